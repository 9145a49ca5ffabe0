//! # Taskdeck Core Library
//!
//! Pure dashboard engine for task tracking: due-date classification, task
//! filtering/sorting, and productivity scoring, plus the snapshot store and
//! configuration edges the CLI shell sits on.
//!
//! ## Architecture
//!
//! - **Engine** ([`classify`], [`filter`], [`stats`]): stateless, synchronous
//!   functions over in-memory task slices. Every one of them takes the
//!   current calendar date as a parameter; nothing in here reads the clock,
//!   so results are deterministic and unit-testable.
//! - **Edges** ([`store`], [`config`]): the JSON snapshot of projects and
//!   tasks and the TOML config. The engine reads task slices out of a loaded
//!   snapshot; only the edges perform IO or mutation.
//!
//! ## Key components
//!
//! - [`classify_due_date`]: due date + today → urgency bucket and styles
//! - [`filter_and_sort`]: AND-combined predicates + stable status-rank sort
//! - [`aggregate`]: counts, rates, and the 0-100 productivity score
//! - [`Snapshot`]: whole-file persistence collaborator

pub mod classify;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod narrative;
pub mod stats;
pub mod store;
pub mod task;

pub use classify::{classify_due_date, due_bucket, DueBucket, DueClassification, UrgencyStyle};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result, StoreError};
pub use filter::{filter_and_sort, DueDateFilter, FilterConfig, TimeWindow};
pub use narrative::Mood;
pub use stats::{aggregate, AggregateStats};
pub use store::Snapshot;
pub use task::{Project, Task, TaskPriority, TaskStatus};
