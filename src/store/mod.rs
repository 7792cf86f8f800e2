// Store module entry point
// JSON-file-backed persistence for the task list

mod task;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tokio::fs;

pub use task::{Priority, Status, Task, TaskDraft, TaskPatch};

/// Store-level failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("failed to access task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("task file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// JSON-file-backed task store
///
/// Every operation is a whole-file load-modify-save cycle. There is no
/// locking; two concurrent writers can lose an update (last-writer-wins on
/// the full file), which is acceptable for the single-user scope.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task list, creating the backing file with an empty
    /// list if it does not exist yet
    pub async fn load(&self) -> Result<Vec<Task>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(&self.path, b"[]").await?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Serialize the full list and overwrite the backing file
    pub async fn save_all(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(tasks)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Append a new task built from the draft, assigning id and creation
    /// timestamp, and persist the list
    pub async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut tasks = self.load().await?;
        let task = Task {
            id: next_id(&tasks),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        tasks.push(task.clone());
        self.save_all(&tasks).await?;
        Ok(task)
    }

    /// Merge patch fields onto the task with the given id and persist
    pub async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task, StoreError> {
        let mut tasks = self.load().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.apply(patch);
        let updated = task.clone();
        self.save_all(&tasks).await?;
        Ok(updated)
    }

    /// Remove the task with the given id and persist. Removing an absent
    /// id is a no-op, not an error; returns whether a task was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tasks = self.load().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        let removed = tasks.len() != before;
        if removed {
            self.save_all(&tasks).await?;
        }
        Ok(removed)
    }
}

/// Next task identifier: current time in milliseconds, bumped past the
/// highest existing id so rapid successive creations stay unique
fn next_id(tasks: &[Task]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    if now > max {
        now
    } else {
        max + 1
    }
}
