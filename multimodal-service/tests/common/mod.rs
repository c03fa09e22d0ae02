#![allow(dead_code)]

use multimodal_service::config::{GeminiSettings, ServiceConfig};
use multimodal_service::services::providers::mock::MockModelClient;
use multimodal_service::services::ModelError;
use multimodal_service::startup::Application;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::multipart;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

pub const MOCK_REPLY: &str = "This is a mocked response from the AI model.";

const TEST_API_KEY: &str = "AIzaSyTestKey0123456789abcdef";

/// Server on a random port backed by a mock model.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub model: Arc<MockModelClient>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(MockModelClient::replying(MOCK_REPLY), CoreConfig::default()).await
    }

    pub async fn failing(error: ModelError) -> Self {
        Self::spawn_with(MockModelClient::failing(error), CoreConfig::default()).await
    }

    pub async fn with_body_limit(max_body_bytes: usize) -> Self {
        let common = CoreConfig {
            max_body_bytes,
            ..CoreConfig::default()
        };
        Self::spawn_with(MockModelClient::replying(MOCK_REPLY), common).await
    }

    pub async fn spawn_with(model: MockModelClient, common: CoreConfig) -> Self {
        let gemini = GeminiSettings::from_vars(|key| match key {
            "GEMINI_API_KEY" => Some(TEST_API_KEY.to_string()),
            _ => None,
        })
        .expect("Failed to build Gemini settings");

        let config = ServiceConfig {
            common: CoreConfig { port: 0, ..common },
            gemini,
        };

        let model = Arc::new(model);
        let app = Application::build_with_model(config, model.clone())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");
        for _ in 0..50 {
            if client.get(format!("{}/health", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            client,
            model,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, HeaderMap, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status();
        let headers = response.headers().clone();
        (status, headers, response.text().await.unwrap())
    }

    /// POST a raw body labelled as JSON, so malformed payloads reach the route.
    pub async fn post_json(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.");
        into_json(response).await
    }

    pub async fn post_form(&self, path: &str, form: multipart::Form) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.");
        into_json(response).await
    }

    /// A form-urlencoded body, which is what plain HTML forms send.
    pub async fn post_urlencoded(&self, path: &str, fields: &[(&str, &str)]) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request.");
        into_json(response).await
    }

    /// POST with no body and no content type at all.
    pub async fn post_empty(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.");
        into_json(response).await
    }
}

async fn into_json(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json().await.expect("Failed to parse JSON");
    (status, body)
}

/// File part with a declared content type.
pub fn file(file_name: &str, mime: &str, data: Vec<u8>) -> multipart::Part {
    multipart::Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .unwrap()
}

/// File part without a `Content-Type` header.
pub fn untyped_file(file_name: &str, data: Vec<u8>) -> multipart::Part {
    multipart::Part::bytes(data).file_name(file_name.to_string())
}

pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0]
}

pub fn wav_bytes() -> Vec<u8> {
    b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec()
}
