use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<Model>,
}

/// An entry of the upstream `/models` listing. Unknown fields pass through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    pub id: String,
    #[serde(default = "default_object")]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_object() -> String {
    "model".to_string()
}
