use std::collections::BTreeSet;
use crate::models::Task;

/// Importance values in `1..=N` that no task has taken yet.
///
/// This only narrows what is offered; two tasks may still end up sharing a
/// value, in which case ranking falls back to input order.
pub fn available_importance(tasks: &[Task]) -> BTreeSet<u32> {
    let total = u32::try_from(tasks.len()).unwrap_or(u32::MAX);
    let mut values: BTreeSet<u32> = (1..=total).collect();
    for t in tasks {
        if let Some(v) = t.importance {
            values.remove(&v);
        }
    }
    values
}

/// Values to offer in the importance selector of the task at `index`:
/// everything available plus the task's own current value.
pub fn importance_choices(tasks: &[Task], index: usize) -> Vec<u32> {
    let mut choices = available_importance(tasks);
    if let Some(v) = tasks.get(index).and_then(|t| t.importance) {
        choices.insert(v);
    }
    choices.into_iter().collect()
}
