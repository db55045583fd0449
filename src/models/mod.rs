pub mod ab_test;
pub mod health;
pub mod model_list;
pub mod records;
pub mod request;
pub mod response_direct;
pub mod response_stream;

use serde::{self, Deserialize, Serialize};

/// Message author. Roles this crate does not know, such as `developer`, pass
/// through to the upstream unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
