use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single task being prioritized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The description entered by the user.
    pub description: String,
    /// Importance rank in `1..=N`; `None` until the user picks one.
    #[serde(default)]
    pub importance: Option<u32>,
    /// How soon the task is due.
    #[serde(default)]
    pub due_date: DueDate,
}

impl Task {
    /// Creates a task with no importance and no due date chosen.
    pub fn new(description: impl Into<String>) -> Task {
        Task {
            description: description.into(),
            importance: None,
            due_date: DueDate::Unset,
        }
    }
}

/// Due-date descriptor. Only `Date` and `Custom` carry a value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DueDate {
    #[default]
    Unset,
    Today,
    /// A calendar date; `None` while the type is chosen but no date entered yet.
    Date(Option<NaiveDate>),
    Asap,
    Daily,
    /// Urgency override as entered, e.g. `"7"`. Not validated here.
    Custom(String),
}

impl DueDate {
    pub fn kind(&self) -> DueDateKind {
        match self {
            DueDate::Unset => DueDateKind::Unset,
            DueDate::Today => DueDateKind::Today,
            DueDate::Date(_) => DueDateKind::Date,
            DueDate::Asap => DueDateKind::Asap,
            DueDate::Daily => DueDateKind::Daily,
            DueDate::Custom(_) => DueDateKind::Custom,
        }
    }
}

/// The selectable due-date types, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueDateKind {
    Unset,
    Today,
    Date,
    Asap,
    Daily,
    Custom,
}

impl DueDateKind {
    /// Order in which the TUI cycles through the types.
    pub const CYCLE: [DueDateKind; 6] = [
        DueDateKind::Unset,
        DueDateKind::Today,
        DueDateKind::Date,
        DueDateKind::Asap,
        DueDateKind::Daily,
        DueDateKind::Custom,
    ];

    /// An empty descriptor of this kind.
    pub fn empty(self) -> DueDate {
        match self {
            DueDateKind::Unset => DueDate::Unset,
            DueDateKind::Today => DueDate::Today,
            DueDateKind::Date => DueDate::Date(None),
            DueDateKind::Asap => DueDate::Asap,
            DueDateKind::Daily => DueDate::Daily,
            DueDateKind::Custom => DueDate::Custom(String::new()),
        }
    }

    pub fn next(self) -> DueDateKind {
        let i = Self::CYCLE.iter().position(|k| *k == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }

    /// Whether the kind needs a value entered alongside it.
    pub fn takes_value(self) -> bool {
        matches!(self, DueDateKind::Date | DueDateKind::Custom)
    }
}

impl fmt::Display for DueDateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DueDateKind::Unset => "unset",
            DueDateKind::Today => "today",
            DueDateKind::Date => "date",
            DueDateKind::Asap => "asap",
            DueDateKind::Daily => "daily",
            DueDateKind::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for DueDateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unset" => Ok(DueDateKind::Unset),
            "today" => Ok(DueDateKind::Today),
            "date" => Ok(DueDateKind::Date),
            "asap" => Ok(DueDateKind::Asap),
            "daily" => Ok(DueDateKind::Daily),
            "custom" => Ok(DueDateKind::Custom),
            other => Err(format!("unknown due date type '{}'", other)),
        }
    }
}

/// A task with its computed score. Rebuilt from the task list on every change.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RankedTask {
    /// 1-based position after sorting.
    pub rank: usize,
    pub description: String,
    pub due_date: DueDate,
    /// Importance used in the calculation, after defaulting unset values.
    pub importance: u32,
    pub urgency: i64,
    /// `importance * urgency`; lower acts first.
    pub priority: i64,
}
