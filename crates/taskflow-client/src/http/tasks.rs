/*
[INPUT]:  Task payloads and identifiers
[OUTPUT]: Task resource responses (list, create, update, delete)
[POS]:    HTTP layer - task resource endpoints
[UPDATE]: When task endpoints or payload shapes change
*/

use reqwest::Method;

use crate::http::{Result, TaskflowClient};
use crate::types::{NewTask, Task, TaskPatch};

impl TaskflowClient {
    /// Fetch the full task collection in server order
    ///
    /// GET /api/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.api_request(Method::GET, "/api/tasks")?;
        self.send_json(builder).await
    }

    /// Create a task; the service assigns the identifier
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let builder = self.api_request(Method::POST, "/api/tasks")?;
        self.send_json(builder.json(task)).await
    }

    /// Apply a partial update to one task
    ///
    /// PATCH /api/tasks/{id}
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.api_request(Method::PATCH, &endpoint)?;
        self.send_json(builder.json(patch)).await
    }

    /// Delete one task
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}
