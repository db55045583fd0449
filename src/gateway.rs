//! Single point of contact with the OpenAI-compatible inference server.
//!
//! Health and model listing never fail: any upstream problem becomes a
//! degraded result. Chat and response calls return upstream failures to the
//! caller unchanged.

use std::sync::Arc;

use actix_web::mime;
use serde_json::Value;

use crate::config::Config;
use crate::consts;
use crate::errors::WorkbenchError;
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::models::health::HealthStatus;
use crate::models::model_list::{Model, ModelList};
use crate::models::request::{ChatCompletionCreate, ResponseCreate};
use crate::models::response_direct::ChatCompletion;
use crate::relay::{DeltaStream, EventStream};

#[derive(Clone)]
pub struct Gateway {
    client: Arc<dyn LLMClientTrait>,
}

impl Gateway {
    pub fn new(client: Arc<dyn LLMClientTrait>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, WorkbenchError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .build()
            .map_err(|e| WorkbenchError::ConfigError(e.to_string()))?;

        Ok(Self::new(Arc::new(LLMClient::new(
            http_client,
            &config.base_url,
            &config.api_key,
        ))))
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn fetch_models(&self) -> Result<Vec<Model>, WorkbenchError> {
        let response = self.client.get(consts::MODELS_PATH).await?;
        let model_list: ModelList = response.json().await?;
        Ok(model_list.data)
    }

    pub async fn check_health(&self) -> HealthStatus {
        match self.fetch_models().await {
            Ok(models) => HealthStatus::online(models),
            Err(e) => {
                log::warn!("health check failed: {}", e);
                HealthStatus::offline(self.base_url(), &e.to_string())
            }
        }
    }

    pub async fn list_models(&self) -> Vec<Model> {
        self.fetch_models().await.unwrap_or_else(|e| {
            log::warn!("list models failed: {}", e);
            vec![]
        })
    }

    pub async fn chat_completion(
        &self,
        mut request: ChatCompletionCreate,
    ) -> Result<ChatCompletion, WorkbenchError> {
        request.stream = false;
        let response = self
            .client
            .post_json(
                consts::CHAT_COMPLETIONS_PATH,
                serde_json::to_value(&request)?,
                mime::APPLICATION_JSON,
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Opens a token stream. Upstream status errors surface here, before any
    /// fragment is produced; later failures surface from the stream itself.
    pub async fn chat_completion_stream(
        &self,
        mut request: ChatCompletionCreate,
    ) -> Result<DeltaStream, WorkbenchError> {
        request.stream = true;
        let response = self
            .client
            .post_json(
                consts::CHAT_COMPLETIONS_PATH,
                serde_json::to_value(&request)?,
                mime::TEXT_EVENT_STREAM,
            )
            .await?;

        Ok(DeltaStream::new(response))
    }

    /// Returns the upstream JSON body as is.
    pub async fn create_response(&self, mut request: ResponseCreate) -> Result<Value, WorkbenchError> {
        request.stream = false;
        let response = self
            .client
            .post_json(
                consts::RESPONSES_PATH,
                serde_json::to_value(&request)?,
                mime::APPLICATION_JSON,
            )
            .await?;

        Ok(response.json().await?)
    }

    pub async fn create_response_stream(
        &self,
        mut request: ResponseCreate,
    ) -> Result<EventStream, WorkbenchError> {
        request.stream = true;
        let response = self
            .client
            .post_json(
                consts::RESPONSES_PATH,
                serde_json::to_value(&request)?,
                mime::TEXT_EVENT_STREAM,
            )
            .await?;

        Ok(EventStream::new(response))
    }
}
