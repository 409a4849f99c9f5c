use scout_core::Msg;

pub const HELP: &str = "\
Commands:
  url <search url>     set the input and preview the search term
  submit [search url]  create a scrape task from the input
  select <row>         show leads of the task at that row (complete tasks only)
  refresh              reload tasks and the newest complete task's leads
  show                 redraw the tables
  help                 this text
  quit                 exit";

/// A parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Vec<Msg>),
    /// 1-based row of the task table.
    Select(usize),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "show" | "ls" => Command::Show,
        "refresh" | "r" => Command::Send(vec![Msg::RefreshClicked]),
        "url" => Command::Send(vec![Msg::InputChanged(rest.to_string())]),
        "submit" | "s" if rest.is_empty() => Command::Send(vec![Msg::SubmitClicked]),
        "submit" | "s" => Command::Send(vec![
            Msg::InputChanged(rest.to_string()),
            Msg::SubmitClicked,
        ]),
        "select" | "sel" => match rest.parse::<usize>() {
            Ok(row) if row > 0 => Command::Select(row),
            _ => Command::Invalid(format!("select expects a row number, got {rest:?}")),
        },
        other => Command::Invalid(format!("unknown command {other:?}; type help")),
    }
}
