use actix_web::mime;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

use crate::errors::WorkbenchError;

#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    fn base_url(&self) -> &str;

    async fn get(&self, path: &str) -> Result<Response, WorkbenchError>;

    async fn post_json(
        &self,
        path: &str,
        body: Value,
        expected_content_type: mime::Mime,
    ) -> Result<Response, WorkbenchError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-2xx response into `UpstreamStatus`, keeping the upstream body.
async fn ensure_success(response: Response) -> Result<Response, WorkbenchError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(WorkbenchError::UpstreamStatus { status, body })
}

fn check_content_type(
    response: &Response,
    expected_content_type: &mime::Mime,
) -> Result<(), WorkbenchError> {
    // Missing header is tolerated; some local servers omit it on streams.
    let Some(header) = response.headers().get(reqwest::header::CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type: mime::Mime = header
        .to_str()
        .map_err(|e| WorkbenchError::ParseError(e.to_string()))?
        .parse()
        .map_err(|e: mime::FromStrError| WorkbenchError::ParseError(e.to_string()))?;

    if content_type.essence_str() != expected_content_type.essence_str() {
        return Err(WorkbenchError::ParseError(format!(
            "content-type: {content_type}, expected: {expected_content_type}"
        )));
    }
    Ok(())
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<Response, WorkbenchError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        ensure_success(response).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: Value,
        expected_content_type: mime::Mime,
    ) -> Result<Response, WorkbenchError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        check_content_type(&response, &expected_content_type)?;
        Ok(response)
    }
}
