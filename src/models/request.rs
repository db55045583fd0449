use serde::{self, Deserialize, Serialize};

use super::Role;
use crate::consts;
use crate::errors::WorkbenchError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
        }
    }
}

fn default_temperature() -> f64 {
    consts::DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> i32 {
    consts::UNBOUNDED_MAX_TOKENS
}

/// Body of `POST /api/chat`.
///
/// When `input` is present the call goes to the upstream `/responses` endpoint,
/// otherwise to `/chat/completions`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    #[serde(default)]
    pub stream: bool,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub previous_response_id: Option<String>,
    #[serde(default)]
    pub reasoning_effort: Option<String>,
}

#[derive(Debug, Clone)]
pub enum UpstreamCall {
    Responses(ResponseCreate),
    Completions(ChatCompletionCreate),
}

impl ChatRequest {
    pub fn into_upstream_call(self) -> Result<UpstreamCall, WorkbenchError> {
        match self.input {
            Some(input) => Ok(UpstreamCall::Responses(ResponseCreate::new(
                self.model,
                input,
                self.previous_response_id,
                self.reasoning_effort,
                self.stream,
            ))),
            None => {
                if self.messages.is_empty() {
                    return Err(WorkbenchError::ValidationError(
                        "messages must not be empty when no input is given".to_string(),
                    ));
                }
                Ok(UpstreamCall::Completions(ChatCompletionCreate::new(
                    self.messages,
                    self.model,
                    self.temperature,
                    self.max_tokens,
                    self.stream,
                )))
            }
        }
    }
}

/// Payload for the upstream `/chat/completions` endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub stream: bool,
    /// `None` means unbounded; the key is then left out of the payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<i32>,
}

impl ChatCompletionCreate {
    pub fn new(
        messages: Vec<ChatMessage>,
        model: String,
        temperature: f64,
        max_tokens: i32,
        stream: bool,
    ) -> Self {
        Self {
            model,
            messages,
            temperature,
            stream,
            max_tokens: (max_tokens > 0).then_some(max_tokens),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reasoning {
    pub effort: String,
}

/// Payload for the upstream `/responses` endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResponseCreate {
    pub model: String,
    pub input: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub previous_response_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reasoning: Option<Reasoning>,
}

impl ResponseCreate {
    pub fn new(
        model: String,
        input: String,
        previous_response_id: Option<String>,
        reasoning_effort: Option<String>,
        stream: bool,
    ) -> Self {
        Self {
            model,
            input,
            stream,
            previous_response_id: previous_response_id.filter(|id| !id.is_empty()),
            reasoning: reasoning_effort
                .filter(|effort| !effort.is_empty())
                .map(|effort| Reasoning { effort }),
        }
    }
}
