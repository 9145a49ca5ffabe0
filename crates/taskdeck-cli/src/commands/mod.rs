pub mod config;
pub mod project;
pub mod stats;
pub mod task;
