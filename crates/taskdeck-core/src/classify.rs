//! Due-date urgency classification.
//!
//! Maps a task's raw due date and the current calendar day to an urgency
//! bucket with a display label, an ordinal rank, and style classes. The
//! classifier never fails: absent and unparseable dates fall into neutral
//! rank-0 buckets.
//!
//! One bucketing scheme is used everywhere. The historical dashboard-summary
//! variant that merged the 2-3 day band into the generic "days left" band is
//! gone; 2-3 days out is its own yellow band at every call site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;

/// Display style tier for an urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyStyle {
    Neutral,
    Green,
    Yellow,
    Orange,
    Red,
}

impl UrgencyStyle {
    /// Foreground class name for renderers.
    pub fn color_class(&self) -> &'static str {
        match self {
            UrgencyStyle::Neutral => "text-neutral",
            UrgencyStyle::Green => "text-green",
            UrgencyStyle::Yellow => "text-yellow",
            UrgencyStyle::Orange => "text-orange",
            UrgencyStyle::Red => "text-red",
        }
    }

    /// Background class name for renderers.
    pub fn bg_class(&self) -> &'static str {
        match self {
            UrgencyStyle::Neutral => "bg-neutral",
            UrgencyStyle::Green => "bg-green",
            UrgencyStyle::Yellow => "bg-yellow",
            UrgencyStyle::Orange => "bg-orange",
            UrgencyStyle::Red => "bg-red",
        }
    }
}

/// Urgency bucket for a due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "bucket", rename_all = "snake_case")]
pub enum DueBucket {
    /// No due date set.
    NoDueDate,
    /// Due date present but unparseable.
    InvalidDate,
    /// More than 3 days out.
    DaysLeft { days: u32 },
    /// 2 or 3 days out.
    DueSoon { days: u32 },
    DueTomorrow,
    DueToday,
    /// Past due by `days` calendar days (at least 1).
    Overdue { days: u32 },
}

impl DueBucket {
    /// Human-readable label, e.g. "3 days overdue" or "Due today".
    pub fn label(&self) -> String {
        match self {
            DueBucket::NoDueDate => "No due date".to_string(),
            DueBucket::InvalidDate => "Invalid date".to_string(),
            DueBucket::DaysLeft { days } => format!("{days} days left"),
            DueBucket::DueSoon { days } => format!("{days} days left"),
            DueBucket::DueTomorrow => "Due tomorrow".to_string(),
            DueBucket::DueToday => "Due today".to_string(),
            DueBucket::Overdue { days: 1 } => "1 day overdue".to_string(),
            DueBucket::Overdue { days } => format!("{days} days overdue"),
        }
    }

    /// Ordinal urgency, 0 (no signal) through 5 (overdue).
    pub fn rank(&self) -> u8 {
        match self {
            DueBucket::NoDueDate | DueBucket::InvalidDate => 0,
            DueBucket::DaysLeft { .. } => 1,
            DueBucket::DueSoon { .. } => 2,
            DueBucket::DueTomorrow => 3,
            DueBucket::DueToday => 4,
            DueBucket::Overdue { .. } => 5,
        }
    }

    pub fn style(&self) -> UrgencyStyle {
        match self {
            DueBucket::NoDueDate | DueBucket::InvalidDate => UrgencyStyle::Neutral,
            DueBucket::DaysLeft { .. } => UrgencyStyle::Green,
            DueBucket::DueSoon { .. } | DueBucket::DueTomorrow => UrgencyStyle::Yellow,
            DueBucket::DueToday => UrgencyStyle::Orange,
            DueBucket::Overdue { .. } => UrgencyStyle::Red,
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, DueBucket::Overdue { .. })
    }
}

/// Flattened per-task classification handed to renderers.
///
/// Recomputed on every render pass, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueClassification {
    pub label: String,
    pub rank: u8,
    pub color_class: &'static str,
    pub bg_class: &'static str,
}

impl From<DueBucket> for DueClassification {
    fn from(bucket: DueBucket) -> Self {
        DueClassification {
            label: bucket.label(),
            rank: bucket.rank(),
            color_class: bucket.style().color_class(),
            bg_class: bucket.style().bg_class(),
        }
    }
}

/// Bucket a raw due date against today's calendar date.
///
/// Pure in the calendar-day difference alone; time-of-day in either input is
/// irrelevant because both sides are already dates.
pub fn due_bucket(due_date: Option<&str>, today: NaiveDate) -> DueBucket {
    let Some(raw) = due_date else {
        return DueBucket::NoDueDate;
    };
    let Some(due) = dates::parse_date(raw) else {
        return DueBucket::InvalidDate;
    };

    match dates::day_diff(due, today) {
        diff if diff < 0 => DueBucket::Overdue {
            days: diff.unsigned_abs() as u32,
        },
        0 => DueBucket::DueToday,
        1 => DueBucket::DueTomorrow,
        diff @ 2..=3 => DueBucket::DueSoon { days: diff as u32 },
        diff => DueBucket::DaysLeft { days: diff as u32 },
    }
}

/// Convenience wrapper producing the flattened display record.
pub fn classify_due_date(due_date: Option<&str>, today: NaiveDate) -> DueClassification {
    due_bucket(due_date, today).into()
}
