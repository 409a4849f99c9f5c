use scout_core::{AppViewModel, LeadRowView, TaskRowView};

const TITLE: &str = "Google Map Lead Scraper";
const MISSING: &str = "N/A";

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {TITLE} ==\n"));
    if !view.input.is_empty() {
        out.push_str(&format!("Input: {}\n", view.input));
        if let Some(term) = &view.search_term {
            out.push_str(&format!("Showing all results matching \"{term}\"\n"));
        }
    }
    if view.creating {
        out.push_str("Submitting task...\n");
    }

    out.push('\n');
    out.push_str(&section_heading("Tasks", view.tasks_loading));
    if view.tasks.is_empty() {
        out.push_str(if view.tasks_loading {
            "  Loading...\n"
        } else {
            "  No tasks yet.\n"
        });
    } else {
        out.push_str(&task_table(&view.tasks));
    }

    out.push('\n');
    let lead_title = match &view.leads_task {
        Some(task_id) => format!("Leads (task {task_id})"),
        None => "Leads".to_string(),
    };
    out.push_str(&section_heading(&lead_title, view.leads_loading));
    if view.leads.is_empty() {
        out.push_str(if view.leads_loading {
            "  Loading...\n"
        } else {
            "  No leads to show.\n"
        });
    } else {
        out.push_str(&lead_table(&view.leads));
    }

    if let Some(failure) = &view.last_failure {
        out.push_str(&format!("\nLast request failed: {failure}\n"));
    }
    out
}

fn section_heading(title: &str, loading: bool) -> String {
    if loading {
        format!("-- {title} (loading) --\n")
    } else {
        format!("-- {title} --\n")
    }
}

fn task_table(tasks: &[TaskRowView]) -> String {
    let rows = tasks
        .iter()
        .map(|task| {
            let marker = if task.active { ">" } else { " " };
            vec![
                format!("{marker}{}", task.row),
                task.name.clone().unwrap_or_default(),
                task.status.to_string(),
                task.created.clone(),
            ]
        })
        .collect();
    format_table(&[" #", "Name", "Status", "Date"], rows)
}

fn lead_table(leads: &[LeadRowView]) -> String {
    let rows = leads
        .iter()
        .map(|lead| {
            let emails = if lead.emails.is_empty() {
                MISSING.to_string()
            } else {
                lead.emails.join(", ")
            };
            vec![
                cell(&lead.name),
                cell(&lead.rating),
                cell(&lead.reviews),
                cell(&lead.category),
                cell(&lead.address),
                cell(&lead.phone),
                emails,
                cell(&lead.www),
            ]
        })
        .collect();
    format_table(
        &[
            "Name", "Rating", "Reviews", "Category", "Address", "Phone", "Emails", "Website",
        ],
        rows,
    )
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Left-aligned columns separated by two spaces, header first.
fn format_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    std::iter::once(header_row)
        .chain(rows)
        .map(|row| {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(value, width)| pad(value, *width))
                .collect::<Vec<_>>()
                .join("  ");
            format!("  {}\n", line.trim_end())
        })
        .collect()
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_core::{LeadId, TaskId};

    fn task_row(row: usize, active: bool) -> TaskRowView {
        TaskRowView {
            row,
            task_id: TaskId::from(row as u64),
            name: Some("dental clinic".to_string()),
            status: "Complete",
            created: "1970-01-01 00:00:00".to_string(),
            selectable: true,
            active,
        }
    }

    #[test]
    fn empty_view_shows_placeholders() {
        let out = render(&AppViewModel::default());
        assert!(out.contains("No tasks yet."));
        assert!(out.contains("No leads to show."));
        assert!(!out.contains("Last request failed"));
    }

    #[test]
    fn task_table_marks_active_row() {
        let table = task_table(&[task_row(1, true), task_row(2, false)]);
        assert_eq!(
            table,
            concat!(
                "   #  Name           Status    Date\n",
                "  >1  dental clinic  Complete  1970-01-01 00:00:00\n",
                "   2  dental clinic  Complete  1970-01-01 00:00:00\n",
            )
        );
    }

    #[test]
    fn leads_without_emails_show_na() {
        let view = AppViewModel {
            leads: vec![LeadRowView {
                lead_id: LeadId::new("1"),
                name: Some("Bright Smiles".to_string()),
                www: None,
                rating: Some("4.8".to_string()),
                reviews: None,
                category: None,
                address: None,
                phone: None,
                emails: Vec::new(),
            }],
            leads_task: Some(TaskId::from(1)),
            ..AppViewModel::default()
        };

        let out = render(&view);
        assert!(out.contains("-- Leads (task 1) --"));
        assert!(out.contains("Bright Smiles"));
        assert!(out.contains("N/A"));
    }

    #[test]
    fn preview_and_loading_markers() {
        let view = AppViewModel {
            input: "https://google.com/maps/search/bar+x/".to_string(),
            search_term: Some("bar x".to_string()),
            tasks_loading: true,
            creating: true,
            last_failure: Some("list tasks failed: timeout".to_string()),
            ..AppViewModel::default()
        };

        let out = render(&view);
        assert!(out.contains("Showing all results matching \"bar x\""));
        assert!(out.contains("Submitting task..."));
        assert!(out.contains("-- Tasks (loading) --"));
        assert!(out.contains("Last request failed: list tasks failed: timeout"));
    }
}
