use chrono::NaiveDate;
use crate::error::InputError;
use crate::models::{DueDate, DueDateKind, Task};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Splits raw text into tasks, one per non-blank line, with nothing assigned.
pub fn split_task_lines(text: &str) -> Vec<Task> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(Task::new)
        .collect()
}

/// Parses importance text. Empty or non-numeric text means unset.
pub fn parse_importance(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

/// Parses batch input where each line is `description | importance | due`.
///
/// Trailing fields may be omitted. `line` numbers in errors are 1-based and
/// count blank lines too.
pub fn parse_batch(text: &str, separator: &str) -> Result<Vec<Task>, InputError> {
    let mut tasks = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let mut fields = raw.splitn(3, separator).map(str::trim);
        let description = fields.next().unwrap_or_default();
        if description.is_empty() {
            continue;
        }
        let mut task = Task::new(description);
        task.importance = fields.next().and_then(parse_importance);
        if let Some(due) = fields.next() {
            task.due_date = parse_due_date(due, i + 1)?;
        }
        tasks.push(task);
    }
    Ok(tasks)
}

/// Parses a due date field: `today`, `asap`, `daily`, `custom:N`,
/// `date:YYYY-MM-DD` or a bare `YYYY-MM-DD`. An empty field is unset.
pub fn parse_due_date(value: &str, line: usize) -> Result<DueDate, InputError> {
    let value = value.trim();
    let unknown = || InputError::UnknownDueDate { line, value: value.to_string() };

    if let Some((kind, rest)) = value.split_once(':') {
        return match kind.parse::<DueDateKind>() {
            Ok(DueDateKind::Custom) => Ok(DueDate::Custom(rest.trim().to_string())),
            Ok(DueDateKind::Date) => parse_date(rest, line).map(|d| DueDate::Date(Some(d))),
            _ => Err(unknown()),
        };
    }

    if value.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_date(value, line).map(|d| DueDate::Date(Some(d)));
    }

    value.parse::<DueDateKind>().map(DueDateKind::empty).map_err(|_| unknown())
}

fn parse_date(value: &str, line: usize) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate { line, value: value.trim().to_string() })
}

/// Parses a JSON array of tasks.
pub fn parse_json(text: &str) -> Result<Vec<Task>, InputError> {
    let tasks: Vec<Task> = serde_json::from_str(text)?;
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let tasks = split_task_lines("  A \n\n   \nB");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "A");
        assert_eq!(tasks[1].description, "B");
    }

    #[test]
    fn non_numeric_importance_is_unset() {
        assert_eq!(parse_importance("abc"), None);
        assert_eq!(parse_importance(""), None);
        assert_eq!(parse_importance(" 3 "), Some(3));
    }
}
