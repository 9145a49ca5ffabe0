//! Task and project records as supplied by the external store.
//!
//! Status and priority are closed enumerations on the wire, but the store is
//! not trusted: any unrecognized string deserializes to the explicit
//! `Unknown` variant, which sorts last and styles neutrally instead of
//! poisoning a comparator or a render pass.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates;

/// Task workflow status.
///
/// Valid progression is Pending → InProgress → Completed, with OnHold as a
/// parking state reachable from either active status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    /// Absorbs unrecognized wire values.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Fixed ordinal used by the list sort: Pending first, Completed last
    /// among known statuses, Unknown after everything.
    pub fn sort_rank(&self) -> u8 {
        match self {
            TaskStatus::Pending => 1,
            TaskStatus::InProgress => 2,
            TaskStatus::OnHold => 3,
            TaskStatus::Completed => 4,
            TaskStatus::Unknown => 5,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Completed => "Completed",
            TaskStatus::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in progress" => Ok(TaskStatus::InProgress),
            "on hold" => Ok(TaskStatus::OnHold),
            "completed" | "done" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
    /// Absorbs unrecognized wire values; lowest display weight.
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    /// Display weight, highest first. Unknown weighs below Low.
    pub fn weight(&self) -> u8 {
        match self {
            TaskPriority::Critical => 4,
            TaskPriority::High => 3,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 1,
            TaskPriority::Unknown => 0,
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
            TaskPriority::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "critical" => Ok(TaskPriority::Critical),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A unit of work belonging to a project.
///
/// `due_date` is kept as the raw wire string because the store does not
/// validate it; parsing happens lazily via [`Task::parsed_due_date`] and a
/// bad value degrades to "Invalid date" downstream rather than failing
/// deserialization of the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task owned by a project.
    pub fn new(name: impl Into<String>, project_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            name: name.into(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Calendar due date, if the raw value is present and parseable.
    pub fn parsed_due_date(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(dates::parse_date)
    }

    /// Mark the task completed.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
        self.updated_at = Utc::now();
    }
}

/// A named grouping of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            archived: false,
            created_at: Utc::now(),
        }
    }
}
