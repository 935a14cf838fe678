//! Shared helpers: spawn the gateway on an ephemeral port, optionally pointed at a mock
//! completion API.

use fitplan_core::{CompletionClient, Planner};
use fitplan_gateway::{serve, AppState};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "sk-test";

/// Returns the base URL of a running gateway.
pub async fn spawn_gateway(client: Option<CompletionClient>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(Planner::new(client));
    tokio::spawn(serve(listener, state));
    format!("http://{}", addr)
}

pub fn mock_client(mock_base: &str) -> CompletionClient {
    CompletionClient::new(TEST_KEY).with_api_base(format!("{}/v1", mock_base))
}

/// A chat completion envelope whose first choice carries `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn beginner_hiit() -> Value {
    json!({
        "goal": "fat-loss",
        "experience": "beginner",
        "style": "HIIT",
        "daysPerWeek": 3
    })
}

pub async fn post_plan(base: &str, body: &Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate-workout-plan", base))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.json().await.unwrap();
    (status, body)
}
