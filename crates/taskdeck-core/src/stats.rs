//! Aggregate statistics and productivity scoring over a task set.
//!
//! Everything here is a single synchronous pass over the input slice,
//! recomputed on every call. All ratios are guarded: an empty denominator
//! yields 0, never NaN or a panic. Tasks without a parseable due date are
//! excluded from every due-date-dependent count, the same rule the filter
//! pipeline applies.
//!
//! "On time" means the completed task's due date has not yet passed at
//! evaluation time. Completion timestamps are not tracked in the store, so
//! this is evaluation-time semantics, not finished-before-deadline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::task::{Task, TaskStatus};

/// Weight of the completion rate in the composite score.
const COMPLETION_WEIGHT: f64 = 0.4;
/// Weight of the on-time rate in the composite score.
const ON_TIME_WEIGHT: f64 = 0.3;
/// Weight of the inverted overdue rate in the composite score.
const OVERDUE_WEIGHT: f64 = 0.3;
/// Each overdue task costs double its linear share of the overdue score.
const OVERDUE_PENALTY: f64 = 200.0;

/// Dashboard summary for a task set.
///
/// Counts are plain tallies; the three trailing fields are 0-100
/// percentages. Derived fresh on every call, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_tasks: u32,
    pub total_completed: u32,
    pub total_pending: u32,
    pub total_in_progress: u32,
    pub total_on_hold: u32,
    /// Open tasks whose due date has passed.
    pub total_overdue: u32,
    /// Open tasks due on the current calendar day.
    pub due_today: u32,
    /// Open tasks due inside the current Sunday-to-Saturday window.
    pub due_this_week: u32,
    /// Share of completed tasks whose due date has not yet passed.
    pub on_time_percentage: u32,
    pub completion_rate: u32,
    /// Weighted composite, 0-100.
    pub productivity_score: u32,
}

/// Compute the aggregate summary for `tasks` as of `today`.
pub fn aggregate(tasks: &[Task], today: NaiveDate) -> AggregateStats {
    let week = dates::week_bounds(today);
    let mut stats = AggregateStats {
        total_tasks: tasks.len() as u32,
        ..Default::default()
    };
    let mut on_time = 0u32;

    for task in tasks {
        match task.status {
            TaskStatus::Pending => stats.total_pending += 1,
            TaskStatus::InProgress => stats.total_in_progress += 1,
            TaskStatus::OnHold => stats.total_on_hold += 1,
            TaskStatus::Completed => stats.total_completed += 1,
            TaskStatus::Unknown => {}
        }

        let Some(due) = task.parsed_due_date() else {
            continue;
        };
        if task.status.is_completed() {
            if due >= today {
                on_time += 1;
            }
        } else {
            if due < today {
                stats.total_overdue += 1;
            }
            if due == today {
                stats.due_today += 1;
            }
            if dates::in_window(due, week) {
                stats.due_this_week += 1;
            }
        }
    }

    stats.on_time_percentage = ratio_pct(on_time, stats.total_completed);
    stats.completion_rate = ratio_pct(stats.total_completed, stats.total_tasks);
    stats.productivity_score = productivity_score(
        stats.total_completed,
        stats.on_time_percentage,
        stats.total_overdue,
        stats.total_tasks,
    );
    stats
}

/// Rounded percentage, 0 when the denominator is 0.
fn ratio_pct(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (100.0 * f64::from(numerator) / f64::from(denominator)).round() as u32
}

/// Weighted composite of completion, on-time, and inverted overdue rates.
///
/// The overdue term punishes each overdue task at double its linear share of
/// the task set, floored at 0, so a handful of overdue items drags the score
/// noticeably.
fn productivity_score(completed: u32, on_time_pct: u32, overdue: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let total_f = f64::from(total);
    let completion_score = 100.0 * f64::from(completed) / total_f;
    let on_time_score = f64::from(on_time_pct);
    let overdue_score = (100.0 - OVERDUE_PENALTY * f64::from(overdue) / total_f).max(0.0);

    let score = COMPLETION_WEIGHT * completion_score
        + ON_TIME_WEIGHT * on_time_score
        + OVERDUE_WEIGHT * overdue_score;
    score.round().clamp(0.0, 100.0) as u32
}
