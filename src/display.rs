use crate::models::{DueDate, RankedTask};

/// Label shown for a due date in result tables.
pub fn due_date_label(due: &DueDate) -> String {
    match due {
        DueDate::Today => "Today".to_string(),
        DueDate::Date(Some(date)) => date.format("%Y-%m-%d").to_string(),
        DueDate::Asap => "ASAP".to_string(),
        DueDate::Daily => "Daily".to_string(),
        DueDate::Custom(value) => format!("Urgency: {}", value),
        DueDate::Date(None) | DueDate::Unset => String::new(),
    }
}

/// The `importance * urgency = priority` expression for a ranked task.
pub fn priority_calculation(task: &RankedTask) -> String {
    format!("{} * {} = {}", task.importance, task.urgency, task.priority)
}

/// Column headers for result tables, with or without the computed columns.
pub fn result_headers(all_columns: bool) -> Vec<&'static str> {
    if all_columns {
        vec!["Rank", "Task", "Importance", "Urgency", "Calculation", "Due"]
    } else {
        vec!["Rank", "Task", "Due"]
    }
}

/// One result row as text, matching [`result_headers`].
pub fn result_row(task: &RankedTask, all_columns: bool) -> Vec<String> {
    let mut row = vec![task.rank.to_string(), task.description.clone()];
    if all_columns {
        row.push(task.importance.to_string());
        row.push(task.urgency.to_string());
        row.push(priority_calculation(task));
    }
    row.push(due_date_label(&task.due_date));
    row
}
