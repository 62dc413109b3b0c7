//! # priorank
//!
//! Ranks a list of tasks by combining how important each one is with how
//! urgent its due date makes it.
//!
//! Every task gets an importance rank `1..=N` (1 is most important) and a
//! due date: `today`, a calendar date, `asap`, `daily`, or a custom urgency.
//! The due date maps to an urgency score, and
//! `priority = importance * urgency`. Tasks are listed from the lowest
//! priority number up, so rank 1 is the task to act on first.
//!
//! ## Urgency Calculation
//!
//! | Due date | Urgency |
//! |---|---|
//! | daily | 5 |
//! | asap | 3 |
//! | today | 1 |
//! | date `d` days away | `11 - d`, or 1 beyond 10 days |
//! | custom `n` | `n` when a positive integer, else 1 |
//! | unset | 1 |
//!
//! Overdue dates keep growing in urgency with no ceiling.
//!
//! ## Usage
//!
//! Run `priorank` with no arguments for the interactive wizard, or pipe tasks
//! into `priorank rank`:
//!
//! ```bash
//! printf 'Write report | 1 | 2026-10-20\nStandup | 2 | daily\n' | priorank rank --all
//! ```

pub mod allocator;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod ranking;
pub mod session;
pub mod tui;
pub mod urgency;
