//! Mock model client for testing.

use super::{ModelClient, ModelError, Part};
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Text(String),
    Error(ModelError),
}

/// Returns a canned reply and records every call, without network I/O.
pub struct MockModelClient {
    reply: Reply,
    calls: Mutex<Vec<Vec<Part>>>,
}

impl MockModelClient {
    /// Mock that answers every request with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every request with `error`.
    pub fn failing(error: ModelError) -> Self {
        Self {
            reply: Reply::Error(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Parts received so far, one entry per call.
    pub fn calls(&self) -> Vec<Vec<Part>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, parts: &[Part]) -> Result<String, ModelError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(parts.to_vec());
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Error(error) => Err(error.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
