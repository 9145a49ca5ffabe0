//! Dashboard statistics commands.

use clap::Subcommand;

use taskdeck_core::{aggregate, narrative, Task};

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show the productivity summary
    Show {
        /// Scope to one project
        #[arg(long)]
        project_id: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (config, snapshot, _path) = common::load()?;
    let today = common::today();

    match action {
        StatsAction::Show { project_id, json } => {
            let scoped: Vec<Task> = match project_id {
                Some(ref pid) => snapshot
                    .tasks
                    .iter()
                    .filter(|t| t.project_id == *pid)
                    .cloned()
                    .collect(),
                None => snapshot.tasks.clone(),
            };
            let stats = aggregate(&scoped, today);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Tasks:        {}", stats.total_tasks);
                println!("  Pending:     {}", stats.total_pending);
                println!("  In progress: {}", stats.total_in_progress);
                println!("  On hold:     {}", stats.total_on_hold);
                println!("  Completed:   {}", stats.total_completed);
                println!("Overdue:      {}", stats.total_overdue);
                println!("Due today:    {}", stats.due_today);
                println!("Due this week: {}", stats.due_this_week);
                println!("Completion:   {}%", stats.completion_rate);
                println!("On time:      {}%", stats.on_time_percentage);
                println!("Score:        {}/100", stats.productivity_score);
                if config.display.narrative {
                    println!();
                    println!("{}", narrative::message(&stats));
                }
            }
        }
    }

    Ok(())
}
