//! Task filter and sort pipeline.
//!
//! Every active predicate in a [`FilterConfig`] must hold for a task to pass
//! (pure conjunction, no cross-task interaction), and the surviving set is
//! stably sorted by the fixed status rank so that Pending work surfaces
//! first and ties keep their input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Due-date bucket restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateFilter {
    #[default]
    All,
    /// Past due and not completed.
    Overdue,
    /// Same calendar day as today.
    Today,
    /// Within the Sunday-to-Saturday window containing today.
    ThisWeek,
    /// Within the following 7-day window.
    NextWeek,
}

impl fmt::Display for DueDateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DueDateFilter::All => "All",
            DueDateFilter::Overdue => "Overdue",
            DueDateFilter::Today => "Today",
            DueDateFilter::ThisWeek => "This Week",
            DueDateFilter::NextWeek => "Next Week",
        };
        write!(f, "{label}")
    }
}

impl FromStr for DueDateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "all" => Ok(DueDateFilter::All),
            "overdue" => Ok(DueDateFilter::Overdue),
            "today" => Ok(DueDateFilter::Today),
            "this week" | "week" => Ok(DueDateFilter::ThisWeek),
            "next week" => Ok(DueDateFilter::NextWeek),
            other => Err(format!("unknown due filter: {other}")),
        }
    }
}

/// Time window applied to completed tasks only.
///
/// Non-completed tasks always pass: the window exists so "done" lists can be
/// scoped to the current week or month without hiding open work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    #[default]
    AllTime,
    ThisWeek,
    ThisMonth,
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeWindow::AllTime => "All Time",
            TimeWindow::ThisWeek => "This Week",
            TimeWindow::ThisMonth => "This Month",
        };
        write!(f, "{label}")
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "all" | "all time" => Ok(TimeWindow::AllTime),
            "this week" | "week" => Ok(TimeWindow::ThisWeek),
            "this month" | "month" => Ok(TimeWindow::ThisMonth),
            other => Err(format!("unknown time window: {other}")),
        }
    }
}

/// Filter settings for a task list view.
///
/// `None` status/priority/project means "All". An empty `search` matches
/// everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub due: DueDateFilter,
    #[serde(default)]
    pub window: TimeWindow,
}

impl FilterConfig {
    fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(ref project_id) = self.project_id {
            if task.project_id != *project_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if !self.search.is_empty() && !matches_search(task, &self.search) {
            return false;
        }
        if !matches_due_filter(task, self.due, today) {
            return false;
        }
        matches_time_window(task, self.window, today)
    }
}

/// Case-insensitive substring match against name or description.
fn matches_search(task: &Task, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    if task.name.to_lowercase().contains(&needle) {
        return true;
    }
    task.description
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(&needle)
}

/// Due-bucket predicate. Tasks without a parseable due date fail every
/// bucket except `All`.
fn matches_due_filter(task: &Task, due: DueDateFilter, today: NaiveDate) -> bool {
    if due == DueDateFilter::All {
        return true;
    }
    let Some(date) = task.parsed_due_date() else {
        return false;
    };
    match due {
        DueDateFilter::All => true,
        DueDateFilter::Overdue => date < today && !task.status.is_completed(),
        DueDateFilter::Today => date == today,
        DueDateFilter::ThisWeek => dates::in_window(date, dates::week_bounds(today)),
        DueDateFilter::NextWeek => dates::in_window(date, dates::next_week_bounds(today)),
    }
}

/// Time-window predicate: bounds the due date of completed tasks only.
fn matches_time_window(task: &Task, window: TimeWindow, today: NaiveDate) -> bool {
    if window == TimeWindow::AllTime || !task.status.is_completed() {
        return true;
    }
    let Some(date) = task.parsed_due_date() else {
        return false;
    };
    match window {
        TimeWindow::AllTime => true,
        TimeWindow::ThisWeek => dates::in_window(date, dates::week_bounds(today)),
        TimeWindow::ThisMonth => dates::in_window(date, dates::month_bounds(today)),
    }
}

/// Filter tasks by `config` and stably sort by status rank.
///
/// `Vec::sort_by_key` is a stable sort, so tasks with equal rank keep their
/// relative order from the input.
pub fn filter_and_sort(tasks: &[Task], config: &FilterConfig, today: NaiveDate) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|task| config.matches(task, today))
        .cloned()
        .collect();
    out.sort_by_key(|task| task.status.sort_rank());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(name: &str, status: TaskStatus, due: Option<&str>) -> Task {
        let mut t = Task::new(name, "project-1");
        t.status = status;
        t.due_date = due.map(String::from);
        t
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = filter_and_sort(&[], &FilterConfig::default(), d(2024, 6, 10));
        assert!(out.is_empty());
    }

    #[test]
    fn default_config_passes_everything() {
        let tasks = vec![
            task("a", TaskStatus::Pending, None),
            task("b", TaskStatus::Completed, Some("garbage")),
        ];
        let out = filter_and_sort(&tasks, &FilterConfig::default(), d(2024, 6, 10));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn project_filter_is_exact() {
        let mut other = task("other", TaskStatus::Pending, None);
        other.project_id = "project-2".into();
        let tasks = vec![task("mine", TaskStatus::Pending, None), other];

        let config = FilterConfig {
            project_id: Some("project-1".into()),
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &config, d(2024, 6, 10));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "mine");
    }

    #[test]
    fn status_and_priority_filters_combine() {
        let mut a = task("a", TaskStatus::Pending, None);
        a.priority = TaskPriority::High;
        let mut b = task("b", TaskStatus::Pending, None);
        b.priority = TaskPriority::Low;
        let mut c = task("c", TaskStatus::Completed, None);
        c.priority = TaskPriority::High;

        let config = FilterConfig {
            status: Some(TaskStatus::Pending),
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        let out = filter_and_sort(&[a, b, c], &config, d(2024, 6, 10));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "a");
    }

    #[test]
    fn search_matches_name_or_description_case_insensitive() {
        let mut a = task("Fix login bug", TaskStatus::Pending, None);
        a.description = None;
        let mut b = task("Other", TaskStatus::Pending, None);
        b.description = Some("relates to the LOGIN flow".into());
        let c = task("Unrelated", TaskStatus::Pending, None);

        let config = FilterConfig {
            search: "login".into(),
            ..Default::default()
        };
        let out = filter_and_sort(&[a, b, c], &config, d(2024, 6, 10));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn overdue_bucket_excludes_completed_and_unparseable() {
        let today = d(2024, 6, 10);
        let tasks = vec![
            task("late", TaskStatus::Pending, Some("2024-06-07")),
            task("done late", TaskStatus::Completed, Some("2024-06-07")),
            task("bad date", TaskStatus::Pending, Some("nope")),
            task("future", TaskStatus::Pending, Some("2024-06-20")),
        ];
        let config = FilterConfig {
            due: DueDateFilter::Overdue,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &config, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "late");
    }

    #[test]
    fn today_bucket_matches_calendar_day() {
        let today = d(2024, 6, 10);
        let tasks = vec![
            task("today", TaskStatus::Pending, Some("2024-06-10")),
            task("tomorrow", TaskStatus::Pending, Some("2024-06-11")),
        ];
        let config = FilterConfig {
            due: DueDateFilter::Today,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &config, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "today");
    }

    #[test]
    fn this_week_and_next_week_buckets() {
        // 2024-06-10 is a Monday; week is 06-09 through 06-15.
        let today = d(2024, 6, 10);
        let tasks = vec![
            task("saturday", TaskStatus::Pending, Some("2024-06-15")),
            task("next sunday", TaskStatus::Pending, Some("2024-06-16")),
            task("far", TaskStatus::Pending, Some("2024-06-30")),
        ];

        let this_week = FilterConfig {
            due: DueDateFilter::ThisWeek,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &this_week, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "saturday");

        let next_week = FilterConfig {
            due: DueDateFilter::NextWeek,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &next_week, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "next sunday");
    }

    #[test]
    fn time_window_only_bounds_completed_tasks() {
        let today = d(2024, 6, 10);
        let tasks = vec![
            task("open old", TaskStatus::Pending, Some("2024-01-01")),
            task("done old", TaskStatus::Completed, Some("2024-01-01")),
            task("done this week", TaskStatus::Completed, Some("2024-06-11")),
        ];
        let config = FilterConfig {
            window: TimeWindow::ThisWeek,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &config, today);
        let names: Vec<_> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["open old", "done this week"]);
    }

    #[test]
    fn time_window_this_month() {
        let today = d(2024, 6, 10);
        let tasks = vec![
            task("done may", TaskStatus::Completed, Some("2024-05-31")),
            task("done june", TaskStatus::Completed, Some("2024-06-01")),
        ];
        let config = FilterConfig {
            window: TimeWindow::ThisMonth,
            ..Default::default()
        };
        let out = filter_and_sort(&tasks, &config, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "done june");
    }

    #[test]
    fn sort_orders_by_status_rank() {
        let tasks = vec![
            task("done", TaskStatus::Completed, None),
            task("held", TaskStatus::OnHold, None),
            task("active", TaskStatus::InProgress, None),
            task("open", TaskStatus::Pending, None),
        ];
        let out = filter_and_sort(&tasks, &FilterConfig::default(), d(2024, 6, 10));
        let names: Vec<_> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["open", "active", "held", "done"]);
    }

    #[test]
    fn sort_is_stable_within_equal_rank() {
        let tasks = vec![
            task("first", TaskStatus::Pending, None),
            task("second", TaskStatus::Pending, None),
            task("third", TaskStatus::Pending, None),
        ];
        let out = filter_and_sort(&tasks, &FilterConfig::default(), d(2024, 6, 10));
        let names: Vec<_> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_status_sorts_last() {
        let tasks = vec![
            task("mystery", TaskStatus::Unknown, None),
            task("done", TaskStatus::Completed, None),
            task("open", TaskStatus::Pending, None),
        ];
        let out = filter_and_sort(&tasks, &FilterConfig::default(), d(2024, 6, 10));
        let names: Vec<_> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["open", "done", "mystery"]);
    }

    #[test]
    fn due_filter_from_str() {
        assert_eq!("this-week".parse::<DueDateFilter>().unwrap(), DueDateFilter::ThisWeek);
        assert_eq!("Next Week".parse::<DueDateFilter>().unwrap(), DueDateFilter::NextWeek);
        assert_eq!("month".parse::<TimeWindow>().unwrap(), TimeWindow::ThisMonth);
        assert!("sometime".parse::<DueDateFilter>().is_err());
    }
}
