/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Stateful in-memory task service mounted on a mock server
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When the task service contract changes
*/

//! Common test utilities for taskflow-sync tests

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// In-memory task store backing the mock service
#[derive(Default)]
pub struct TaskStore {
    tasks: Mutex<Vec<Value>>,
    next_id: AtomicU64,
}

impl TaskStore {
    /// Current service-side collection, in insertion order
    pub fn snapshot(&self) -> Vec<Value> {
        self.tasks.lock().expect("store lock").clone()
    }
}

struct ListTasks(Arc<TaskStore>);

impl Respond for ListTasks {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(Value::Array(self.0.snapshot()))
    }
}

struct CreateTask(Arc<TaskStore>);

impl Respond for CreateTask {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let payload: Value = match serde_json::from_slice(&request.body) {
            Ok(value) => value,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({ "message": "Invalid payload" }));
            }
        };
        let id = self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = json!({
            "_id": format!("task-{id}"),
            "title": payload.get("title").cloned().unwrap_or_else(|| json!("")),
            "description": payload.get("description").cloned().unwrap_or_else(|| json!("")),
            "completed": payload.get("completed").cloned().unwrap_or_else(|| json!(false)),
        });
        self.0.tasks.lock().expect("store lock").push(task.clone());
        ResponseTemplate::new(201).set_body_json(task)
    }
}

struct UpdateTask(Arc<TaskStore>);

impl Respond for UpdateTask {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request.url.path().trim_start_matches("/api/tasks/").to_string();
        let patch: Value = match serde_json::from_slice(&request.body) {
            Ok(value) => value,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({ "message": "Invalid payload" }));
            }
        };

        let mut tasks = self.0.tasks.lock().expect("store lock");
        let Some(task) = tasks
            .iter_mut()
            .find(|task| task["_id"].as_str() == Some(id.as_str()))
        else {
            return ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Task not found" }));
        };

        if let Some(fields) = patch.as_object() {
            for (key, value) in fields {
                task[key.as_str()] = value.clone();
            }
        }
        ResponseTemplate::new(200).set_body_json(task.clone())
    }
}

struct DeleteTask(Arc<TaskStore>);

impl Respond for DeleteTask {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request.url.path().trim_start_matches("/api/tasks/").to_string();
        let mut tasks = self.0.tasks.lock().expect("store lock");
        let before = tasks.len();
        tasks.retain(|task| task["_id"].as_str() != Some(id.as_str()));
        if tasks.len() == before {
            return ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Task not found" }));
        }
        ResponseTemplate::new(204)
    }
}

/// Mount a stateful task service on the mock server and hand back its store
pub async fn mount_task_service(server: &MockServer) -> Arc<TaskStore> {
    let store = Arc::new(TaskStore::default());

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ListTasks(store.clone()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(CreateTask(store.clone()))
        .mount(server)
        .await;
    Mock::given(method("PATCH"))
        .and(path_regex(r"^/api/tasks/.+$"))
        .respond_with(UpdateTask(store.clone()))
        .mount(server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/tasks/.+$"))
        .respond_with(DeleteTask(store.clone()))
        .mount(server)
        .await;

    store
}
