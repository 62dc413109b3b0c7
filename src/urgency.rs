use chrono::{Local, NaiveDate};
use crate::models::DueDate;

/// Dates further out than this many days all score the minimum urgency.
pub const DATE_HORIZON_DAYS: i64 = 10;

/// Urgency used for anything without a usable value.
pub const DEFAULT_URGENCY: i64 = 1;

/// Calculates the urgency score for a due date, relative to the local date.
pub fn compute_urgency(due: &DueDate) -> i64 {
    resolve_urgency(due, Local::now().date_naive())
}

/// Calculates the urgency score for a due date as seen on `today`.
///
/// - `daily` is 5, `asap` is 3, `today` is 1.
/// - A date `diff` whole days away scores `11 - diff`, or 1 once it is more
///   than 10 days out. Overdue dates keep growing with no ceiling.
/// - A custom value scores itself if it is a positive integer, else 1.
/// - Anything unset scores 1.
pub fn resolve_urgency(due: &DueDate, today: NaiveDate) -> i64 {
    match due {
        DueDate::Daily => 5,
        DueDate::Asap => 3,
        DueDate::Today => 1,
        DueDate::Date(Some(date)) => {
            let diff = (*date - today).num_days();
            if diff > DATE_HORIZON_DAYS {
                DEFAULT_URGENCY
            } else {
                DATE_HORIZON_DAYS + 1 - diff
            }
        }
        DueDate::Custom(value) => parse_custom_urgency(value).unwrap_or(DEFAULT_URGENCY),
        DueDate::Date(None) | DueDate::Unset => DEFAULT_URGENCY,
    }
}

/// Parses a custom urgency override. Only positive integers count.
///
/// The whole trimmed value must be an integer: `"3.5"` and `"7abc"` are
/// rejected rather than read as their leading digits.
pub fn parse_custom_urgency(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|v| *v > 0)
}
