const SEARCH_MARKER: &str = "search/";

/// Extracts the human-readable search term from a map-search URL.
///
/// The input must mention `google`, `search` and `maps` (case-sensitive,
/// anywhere). The term is the path segment right after the first `search/`,
/// with its first `+` turned into a space. Returns `None` for anything else,
/// including input that names all three words but has no `search/` segment
/// or an empty one.
pub fn parse_search_term(url: &str) -> Option<String> {
    let looks_like_map_search =
        url.contains("google") && url.contains("search") && url.contains("maps");
    if !looks_like_map_search {
        return None;
    }

    let (_, rest) = url.split_once(SEARCH_MARKER)?;
    let segment = rest.split('/').next().unwrap_or_default();
    if segment.is_empty() {
        return None;
    }
    Some(segment.replacen('+', " ", 1))
}
