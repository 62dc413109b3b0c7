use chrono::{Local, NaiveDate};
use log::debug;
use crate::models::{RankedTask, Task};
use crate::urgency::resolve_urgency;

/// Ranks tasks against the local date. See [`rank_tasks_on`].
pub fn rank_tasks(tasks: &[Task]) -> Vec<RankedTask> {
    rank_tasks_on(tasks, Local::now().date_naive())
}

/// Ranks tasks by `importance * urgency`, lowest first.
///
/// Unset importance counts as the task count, so it sorts last among
/// otherwise equal tasks. Tasks with equal priority keep their input order.
pub fn rank_tasks_on(tasks: &[Task], today: NaiveDate) -> Vec<RankedTask> {
    let total = tasks.len();
    let mut scored: Vec<(usize, RankedTask)> = tasks
        .iter()
        .enumerate()
        .map(|(position, t)| {
            let importance = effective_importance(t, total);
            let urgency = resolve_urgency(&t.due_date, today);
            let ranked = RankedTask {
                rank: 0,
                description: t.description.clone(),
                due_date: t.due_date.clone(),
                importance,
                urgency,
                // Custom urgency is unbounded; saturate so huge values still sort last.
                priority: i64::from(importance).saturating_mul(urgency),
            };
            (position, ranked)
        })
        .collect();

    // Input position is the tie-break, independent of sort stability.
    scored.sort_by(|(pa, a), (pb, b)| a.priority.cmp(&b.priority).then(pa.cmp(pb)));

    let ranked: Vec<RankedTask> = scored
        .into_iter()
        .enumerate()
        .map(|(i, (_, mut t))| {
            t.rank = i + 1;
            t
        })
        .collect();

    debug!("ranked {} tasks as of {}", ranked.len(), today);
    ranked
}

/// The importance used for ranking: the assigned value if positive,
/// otherwise `total` (the least important slot).
pub fn effective_importance(task: &Task, total: usize) -> u32 {
    match task.importance {
        Some(v) if v > 0 => v,
        _ => u32::try_from(total).unwrap_or(u32::MAX),
    }
}
