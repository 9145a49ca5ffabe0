//! JSON snapshot store.
//!
//! The dashboard engine treats persistence as an external collaborator; this
//! module is that collaborator for the CLI: a whole-file JSON snapshot of
//! projects and tasks under `~/.config/taskdeck[-dev]/`. The engine only
//! ever reads slices out of a loaded snapshot; mutation happens here, at the
//! edge.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::task::{Project, Task};

/// Returns `~/.config/taskdeck[-dev]/` based on TASKDECK_ENV.
///
/// Set TASKDECK_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Fails if the home directory cannot be determined or the directory cannot
/// be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .ok_or(StoreError::HomeDirUnavailable)?
        .join(".config");

    let env = std::env::var("TASKDECK_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("taskdeck-dev")
    } else {
        base_dir.join("taskdeck")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::WriteFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Default snapshot location inside the data directory.
pub fn default_snapshot_path() -> Result<PathBuf, StoreError> {
    Ok(data_dir()?.join("snapshot.json"))
}

/// Full persisted state: all projects and all tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Load a snapshot from disk. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Snapshot::default());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the snapshot back to disk, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Projects eligible for task creation (not archived).
    pub fn active_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.archived).collect()
    }

    /// Add a task after checking its owning project exists and is active.
    pub fn add_task(&mut self, task: Task) -> Result<(), StoreError> {
        let project = self
            .project(&task.project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(task.project_id.clone()))?;
        if project.archived {
            return Err(StoreError::ProjectArchived(project.name.clone()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove a task by id.
    pub fn remove_task(&mut self, id: &str) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    /// Tasks belonging to one project.
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }
}
