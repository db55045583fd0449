use serde::{self, Deserialize, Serialize};

use super::model_list::Model;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: ServerStatus,
    pub models: Vec<Model>,
    pub message: String,
}

impl HealthStatus {
    pub fn online(models: Vec<Model>) -> Self {
        Self {
            status: ServerStatus::Online,
            models,
            message: "Upstream server is reachable".to_string(),
        }
    }

    pub fn offline(base_url: &str, cause: &str) -> Self {
        Self {
            status: ServerStatus::Offline,
            models: vec![],
            message: format!(
                "Could not connect to upstream server at {}. Error: {}",
                base_url, cause
            ),
        }
    }
}
