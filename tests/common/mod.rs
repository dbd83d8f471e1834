#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use savour_kitchen::api_connection::GeminiProvider;
use savour_kitchen::config::GeminiConfig;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn text_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
    .to_string()
}

pub fn error_reply(message: &str) -> String {
    serde_json::json!({"error": {"code": 400, "message": message, "status": "INVALID_ARGUMENT"}})
        .to_string()
}

/// Stand-in for the Gemini generateContent endpoint with one canned reply.
#[derive(Clone)]
pub struct FakeGemini {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl FakeGemini {
    pub fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            hits: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self::replying(StatusCode::OK, text_reply(text))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }

    pub async fn start(&self) -> GeminiProvider {
        let router = Router::new()
            .route("/v1beta/models/{*rest}", post(generate_content))
            .with_state(self.clone());
        let base_url = spawn(router).await;
        GeminiProvider::new(GeminiConfig::new(TEST_API_KEY).with_base_url(base_url))
    }
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Query(query): Query<HashMap<String, String>>,
    Json(request): Json<serde_json::Value>,
) -> (StatusCode, String) {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(key) = query.get("key") {
        fake.keys.lock().unwrap().push(key.clone());
    }
    if let Some(prompt) = request["contents"][0]["parts"][0]["text"].as_str() {
        fake.prompts.lock().unwrap().push(prompt.to_string());
    }
    (fake.status, fake.body.clone())
}

pub fn provider_at(base_url: String) -> GeminiProvider {
    GeminiProvider::new(GeminiConfig::new(TEST_API_KEY).with_base_url(base_url))
}
