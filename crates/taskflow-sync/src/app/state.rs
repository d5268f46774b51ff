/// **Input**: User intents from the presentation layer, task service responses.
/// **Output**: Mutated controller state for rendering (collection, loading, error, editing, notification).
/// **Position**: Synchronization controller - owns the local mirror of the remote task collection.
/// **Update**: When adding operations or changing the reconciliation flow.
use taskflow_client::{NewTask, Task, TaskPatch, TaskflowClient};

use crate::app::notification::Notification;

const FETCH_FAILED: &str = "Failed to load tasks. Please refresh the page.";
const ADD_FAILED: &str = "Failed to add task. Please try again.";
const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
const TOGGLE_FAILED: &str = "Failed to update task status.";

/// Owns the cached task collection and drives every remote mutation.
///
/// Every mutation follows the same protocol: clear the previous error, issue
/// one remote call, then reconcile by re-fetching the full collection so the
/// rendered state is always a snapshot the server actually produced. The
/// collection is never patched locally.
///
/// Overlapping operations are not serialized; if a caller issues a second
/// operation before the first resolves, the last re-fetch to complete wins.
/// The `&mut self` receivers already prevent that within a single owner.
#[derive(Debug)]
pub struct TaskController {
    client: TaskflowClient,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    editing: Option<Task>,
    notification: Option<Notification>,
}

impl TaskController {
    pub fn new(client: TaskflowClient) -> Self {
        Self {
            client,
            tasks: Vec::new(),
            loading: false,
            error: None,
            editing: None,
            notification: None,
        }
    }

    /// Cached collection, in server order as of the last successful fetch
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a collection fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message from the most recent failed operation, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Task currently selected for editing, if any
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Notification from the most recent completed action, if still visible
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Re-fetch the full collection and replace the local mirror wholesale.
    ///
    /// On failure the previous collection stays visible; only the error
    /// banner marks it as stale.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.client.list_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "task collection fetched");
                self.tasks = tasks;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch tasks");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a task on the service, then reconcile
    pub async fn add_task(&mut self, task: NewTask) {
        self.error = None;
        if let Err(err) = self.client.create_task(&task).await {
            tracing::error!(error = %err, "failed to add task");
            self.error = Some(ADD_FAILED.to_string());
            return;
        }
        if self.reconcile().await {
            self.notification = Some(Notification::success("Task added successfully!"));
        }
    }

    /// Update the task currently selected for editing, then reconcile.
    ///
    /// The editing selection is consumed up front, so it is lost even when
    /// the update fails (source behavior, kept deliberately).
    pub async fn update_task(&mut self, patch: TaskPatch) {
        let Some(editing) = self.editing.take() else {
            tracing::warn!("update requested with no task selected for editing");
            return;
        };
        self.error = None;
        if let Err(err) = self.client.update_task(&editing.id, &patch).await {
            tracing::error!(error = %err, task_id = %editing.id, "failed to update task");
            self.error = Some(UPDATE_FAILED.to_string());
            return;
        }
        if self.reconcile().await {
            self.notification = Some(Notification::success("Task updated successfully!"));
        }
    }

    /// Delete a task on the service, then reconcile
    pub async fn delete_task(&mut self, id: &str) {
        self.error = None;
        if let Err(err) = self.client.delete_task(id).await {
            tracing::error!(error = %err, task_id = %id, "failed to delete task");
            self.error = Some(DELETE_FAILED.to_string());
            return;
        }
        if self.reconcile().await {
            self.notification = Some(Notification::info("Task deleted!"));
        }
    }

    /// Invert a task's completion flag on the service, then reconcile.
    ///
    /// The current flag is resolved against the cached collection at call
    /// time, so toggling twice with no interleaving mutation restores the
    /// original value.
    pub async fn toggle_complete(&mut self, id: &str) {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            tracing::warn!(task_id = %id, "toggle requested for a task not in the collection");
            return;
        };
        let completed = !task.completed;
        self.error = None;
        let patch = TaskPatch::completed(completed);
        if let Err(err) = self.client.update_task(id, &patch).await {
            tracing::error!(error = %err, task_id = %id, "failed to update task status");
            self.error = Some(TOGGLE_FAILED.to_string());
            return;
        }
        if self.reconcile().await {
            let message = if completed {
                "Task marked as completed!"
            } else {
                "Task marked as incomplete!"
            };
            self.notification = Some(Notification::success(message));
        }
    }

    /// Set or clear the editing selection (local only, no remote call)
    pub fn select_for_edit(&mut self, task: Option<Task>) {
        self.editing = task;
    }

    /// Dismiss the current notification (local only)
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Tick handler for auto-dismiss; call periodically from the UI loop
    pub fn update_tick(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            if notification.ticks_remaining > 0 {
                notification.ticks_remaining -= 1;
            } else {
                self.notification = None;
            }
        }
    }

    /// Re-fetch after a mutation so local state matches the server.
    ///
    /// Returns true when the re-fetch succeeded; a failure here leaves the
    /// fetch-failure message in the error slot and the caller must not raise
    /// a success notification.
    async fn reconcile(&mut self) -> bool {
        self.refresh().await;
        self.error.is_none()
    }
}
