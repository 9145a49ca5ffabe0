//! Shared helpers for CLI commands: clock, snapshot access, and rendering.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use taskdeck_core::classify::UrgencyStyle;
use taskdeck_core::{classify_due_date, due_bucket, Config, Snapshot, Task};

/// The CLI owns the clock; the core only ever sees this date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Effective snapshot path from config, honoring the TASKDECK_ENV override.
pub fn snapshot_path(config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(config.snapshot_path()?)
}

/// Load config and snapshot together.
pub fn load() -> Result<(Config, Snapshot, PathBuf), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let path = snapshot_path(&config)?;
    let snapshot = Snapshot::load(&path)?;
    Ok((config, snapshot, path))
}

/// ANSI color for an urgency style, when color output is enabled.
fn style_code(style: UrgencyStyle) -> &'static str {
    match style {
        UrgencyStyle::Neutral => "\x1b[90m",
        UrgencyStyle::Green => "\x1b[32m",
        UrgencyStyle::Yellow => "\x1b[33m",
        UrgencyStyle::Orange => "\x1b[38;5;208m",
        UrgencyStyle::Red => "\x1b[31m",
    }
}

/// One-line rendering of a task with its urgency label.
pub fn render_task_line(task: &Task, today: NaiveDate, color: bool) -> String {
    let bucket = due_bucket(task.due_date.as_deref(), today);
    let label = bucket.label();
    let due = if color {
        format!("{}{label}\x1b[0m", style_code(bucket.style()))
    } else {
        label
    };
    format!(
        "{}  [{}] [{}] {}  ({})",
        task.id, task.status, task.priority, task.name, due
    )
}

/// Task plus its classification, for `--json` output.
pub fn task_with_classification(task: &Task, today: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "task": task,
        "due": classify_due_date(task.due_date.as_deref(), today),
    })
}
