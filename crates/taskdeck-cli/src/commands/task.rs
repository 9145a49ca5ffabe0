//! Task management commands.

use clap::Subcommand;

use taskdeck_core::{
    filter_and_sort, DueDateFilter, FilterConfig, Task, TaskPriority, TaskStatus, TimeWindow,
};

use crate::common;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Owning project ID
        #[arg(long)]
        project_id: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium, high, critical
        #[arg(long, default_value = "medium")]
        priority: TaskPriority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// List tasks with dashboard filters
    List {
        /// Filter by project ID
        #[arg(long)]
        project_id: Option<String>,
        /// Filter by status: pending, in-progress, on-hold, completed
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Filter by priority: low, medium, high, critical
        #[arg(long)]
        priority: Option<TaskPriority>,
        /// Case-insensitive search over name and description
        #[arg(long, default_value = "")]
        search: String,
        /// Due bucket: all, overdue, today, this-week, next-week
        #[arg(long, default_value = "all")]
        due: DueDateFilter,
        /// Time window for completed tasks: all-time, this-week, this-month
        #[arg(long, default_value = "all-time")]
        window: TimeWindow,
        /// Emit JSON instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Show one task with its due-date classification
    Get {
        /// Task ID
        id: String,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut snapshot, path) = common::load()?;
    let today = common::today();

    match action {
        TaskAction::Add {
            name,
            project_id,
            description,
            priority,
            due,
            tags,
        } => {
            let mut task = Task::new(name, project_id);
            task.description = description;
            task.priority = priority;
            task.due_date = due;
            task.tags = tags
                .map(|t| t.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default();

            snapshot.add_task(task.clone())?;
            snapshot.save(&path)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List {
            project_id,
            status,
            priority,
            search,
            due,
            window,
            json,
        } => {
            let filter = FilterConfig {
                project_id,
                status,
                priority,
                search,
                due,
                window,
            };
            let tasks = filter_and_sort(&snapshot.tasks, &filter, today);
            if json {
                let annotated: Vec<_> = tasks
                    .iter()
                    .map(|t| common::task_with_classification(t, today))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&annotated)?);
            } else {
                for task in &tasks {
                    println!("{}", common::render_task_line(task, today, config.display.color));
                }
                println!("{} task(s)", tasks.len());
            }
        }
        TaskAction::Get { id } => {
            let task = snapshot
                .task(&id)
                .ok_or(taskdeck_core::StoreError::TaskNotFound(id))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&common::task_with_classification(task, today))?
            );
        }
        TaskAction::Complete { id } => {
            let task = snapshot
                .task_mut(&id)
                .ok_or(taskdeck_core::StoreError::TaskNotFound(id))?;
            task.complete();
            let summary = format!("Task completed: {} ({})", task.id, task.name);
            snapshot.save(&path)?;
            println!("{summary}");
        }
        TaskAction::Delete { id } => {
            let removed = snapshot.remove_task(&id)?;
            snapshot.save(&path)?;
            println!("Task deleted: {} ({})", removed.id, removed.name);
        }
    }

    Ok(())
}
