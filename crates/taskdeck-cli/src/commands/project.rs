//! Project management commands.

use clap::Subcommand;

use taskdeck_core::{Project, StoreError};

use crate::common;

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Add {
        /// Project name
        name: String,
    },
    /// List projects
    List {
        /// Include archived projects
        #[arg(long)]
        all: bool,
    },
    /// Archive a project (it stops accepting new tasks)
    Archive {
        /// Project ID
        id: String,
    },
    /// Restore an archived project
    Restore {
        /// Project ID
        id: String,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, mut snapshot, path) = common::load()?;

    match action {
        ProjectAction::Add { name } => {
            let project = Project::new(name);
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(&project)?);
            snapshot.projects.push(project);
            snapshot.save(&path)?;
        }
        ProjectAction::List { all } => {
            let projects: Vec<&Project> = if all {
                snapshot.projects.iter().collect()
            } else {
                snapshot.active_projects()
            };
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        ProjectAction::Archive { id } => {
            let project = snapshot
                .project_mut(&id)
                .ok_or(StoreError::ProjectNotFound(id))?;
            project.archived = true;
            let summary = format!("Project archived: {} ({})", project.id, project.name);
            snapshot.save(&path)?;
            println!("{summary}");
        }
        ProjectAction::Restore { id } => {
            let project = snapshot
                .project_mut(&id)
                .ok_or(StoreError::ProjectNotFound(id))?;
            project.archived = false;
            let summary = format!("Project restored: {} ({})", project.id, project.name);
            snapshot.save(&path)?;
            println!("{summary}");
        }
    }

    Ok(())
}
