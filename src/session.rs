use chrono::NaiveDate;
use log::debug;
use crate::allocator::{available_importance, importance_choices};
use crate::error::SessionError;
use crate::input::{parse_importance, split_task_lines, DATE_FORMAT};
use crate::models::{DueDate, DueDateKind, RankedTask, Task};
use crate::ranking::{rank_tasks, rank_tasks_on};
use std::collections::BTreeSet;

/// Steps of the prioritization wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CollectingTasks,
    AssigningAttributes,
    ViewingResults,
}

/// State of one prioritization session: the raw text, the task list built
/// from it, the current step and the column toggle.
#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    tasks: Vec<Task>,
    step: Step,
    show_all_columns: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            text: String::new(),
            tasks: Vec::new(),
            step: Step::CollectingTasks,
            show_all_columns: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access to the raw text buffer for the input step.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn show_all_columns(&self) -> bool {
        self.show_all_columns
    }

    pub fn set_show_all_columns(&mut self, show: bool) {
        self.show_all_columns = show;
    }

    pub fn toggle_all_columns(&mut self) {
        self.show_all_columns = !self.show_all_columns;
    }

    /// Advances one step.
    ///
    /// Leaving the input step rebuilds the task list from the text, and fails
    /// with [`SessionError::NoTasks`] when there are no non-blank lines.
    /// Advancing from the results step does nothing.
    pub fn next_step(&mut self) -> Result<(), SessionError> {
        match self.step {
            Step::CollectingTasks => {
                let tasks = split_task_lines(&self.text);
                if tasks.is_empty() {
                    return Err(SessionError::NoTasks);
                }
                debug!("collected {} tasks", tasks.len());
                self.tasks = tasks;
                self.step = Step::AssigningAttributes;
            }
            Step::AssigningAttributes => self.step = Step::ViewingResults,
            Step::ViewingResults => {}
        }
        debug!("step is now {:?}", self.step);
        Ok(())
    }

    /// Goes back one step. Does nothing on the input step.
    pub fn previous_step(&mut self) {
        self.step = match self.step {
            Step::CollectingTasks | Step::AssigningAttributes => Step::CollectingTasks,
            Step::ViewingResults => Step::AssigningAttributes,
        };
        debug!("step is now {:?}", self.step);
    }

    /// Returns from the results to the input step. The text is kept.
    pub fn restart(&mut self) {
        if self.step == Step::ViewingResults {
            self.step = Step::CollectingTasks;
            debug!("session restarted");
        }
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task, SessionError> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(SessionError::TaskIndex { index, len })
    }

    pub fn set_importance(&mut self, index: usize, importance: Option<u32>) -> Result<(), SessionError> {
        self.task_mut(index)?.importance = importance;
        Ok(())
    }

    /// Sets importance from text; anything that is not a number clears it.
    pub fn set_importance_text(&mut self, index: usize, value: &str) -> Result<(), SessionError> {
        self.set_importance(index, parse_importance(value))
    }

    /// Moves the task to its next importance choice, and back to unset after
    /// the last one.
    pub fn cycle_importance(&mut self, index: usize) -> Result<(), SessionError> {
        let choices = importance_choices(&self.tasks, index);
        let current = self.task_mut(index)?.importance;
        let next = match current {
            None => choices.first().copied(),
            Some(v) => choices.iter().copied().find(|c| *c > v),
        };
        self.set_importance(index, next)
    }

    /// Changes the due-date type, discarding any previous value.
    pub fn set_due_date_kind(&mut self, index: usize, kind: DueDateKind) -> Result<(), SessionError> {
        self.task_mut(index)?.due_date = kind.empty();
        Ok(())
    }

    /// Sets the value for a `date` or `custom` due date.
    ///
    /// Dates must be `YYYY-MM-DD`. Custom values are stored as typed. Other
    /// types carry no value and ignore it.
    pub fn set_due_date_value(&mut self, index: usize, value: &str) -> Result<(), SessionError> {
        let task = self.task_mut(index)?;
        match &mut task.due_date {
            DueDate::Date(date) => {
                let parsed = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
                    .map_err(|_| SessionError::InvalidDate { value: value.to_string() })?;
                *date = Some(parsed);
            }
            DueDate::Custom(custom) => *custom = value.trim().to_string(),
            other => debug!("ignoring value '{}' for due date {:?}", value, other.kind()),
        }
        Ok(())
    }

    /// Importance values no task has taken.
    pub fn available_importance(&self) -> BTreeSet<u32> {
        available_importance(&self.tasks)
    }

    /// Importance values to offer for the task at `index`.
    pub fn importance_choices(&self, index: usize) -> Vec<u32> {
        importance_choices(&self.tasks, index)
    }

    /// The current ranking, recomputed on every call.
    pub fn ranked(&self) -> Vec<RankedTask> {
        rank_tasks(&self.tasks)
    }

    pub fn ranked_on(&self, today: NaiveDate) -> Vec<RankedTask> {
        rank_tasks_on(&self.tasks, today)
    }
}
