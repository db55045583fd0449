#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::mime;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

use llm_workbench::errors::WorkbenchError;
use llm_workbench::llm_client::LLMClientTrait;

/// Upstream client that fails every call with the configured error and
/// records what was attempted.
pub struct FailingLLMClient {
    error: WorkbenchError,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FailingLLMClient {
    pub fn new(error: WorkbenchError) -> Self {
        Self {
            error,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for FailingLLMClient {
    fn base_url(&self) -> &str {
        "http://mock-upstream/v1"
    }

    async fn get(&self, path: &str) -> Result<Response, WorkbenchError> {
        self.calls.lock().unwrap().push(format!("GET {path}"));
        Err(self.error.clone())
    }

    async fn post_json(
        &self,
        path: &str,
        _body: Value,
        _expected_content_type: mime::Mime,
    ) -> Result<Response, WorkbenchError> {
        self.calls.lock().unwrap().push(format!("POST {path}"));
        Err(self.error.clone())
    }
}
