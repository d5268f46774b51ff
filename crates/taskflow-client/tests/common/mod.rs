/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskflow-client tests

use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// JSON document for one task as the service serializes it
#[allow(dead_code)]
pub fn task_document(id: &str, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "description": "",
        "completed": completed,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}
