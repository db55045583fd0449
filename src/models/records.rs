//! Records kept by the JSON file stores.
//!
//! Every record carries its key as a typed field. All other fields are
//! whatever the UI sent and are stored unchanged.

use serde::{self, Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use crate::errors::WorkbenchError;
use crate::store::Record;

/// Accepts a key sent as a string, a number or `null` and keeps it as a string.
fn key_from_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(key) => Ok(key),
        Value::Number(key) => Ok(key.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number key, got {}",
            other
        ))),
    }
}

macro_rules! id_record {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $file:literal) => {
        $(#[$meta])*
        #[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
        pub struct $name {
            #[serde(default, deserialize_with = "key_from_scalar")]
            pub id: String,
            #[serde(flatten)]
            pub fields: Map<String, Value>,
        }

        impl Record for $name {
            const KIND: &'static str = $kind;
            const KEY_FIELD: &'static str = "id";
            const FILE_NAME: &'static str = $file;

            fn key(&self) -> &str {
                &self.id
            }

            fn prepare(&mut self) -> Result<(), WorkbenchError> {
                if self.id.is_empty() {
                    self.id = uuid::Uuid::new_v4().to_string();
                }
                Ok(())
            }
        }
    };
}

id_record!(
    /// A reusable prompt with placeholders.
    PromptTemplate,
    "Template",
    "prompt_templates.json"
);
id_record!(Workflow, "Workflow", "workflows.json");
id_record!(Dataset, "Dataset", "datasets.json");
id_record!(
    /// A user-defined evaluator. Built-in ones live in [`crate::evaluators`].
    Evaluator,
    "Evaluator",
    "evaluators.json"
);
id_record!(EvalJob, "Eval job", "eval_jobs.json");

/// A tool definition, keyed by its function name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tool {
    #[serde(default, deserialize_with = "key_from_scalar")]
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record for Tool {
    const KIND: &'static str = "Tool";
    const KEY_FIELD: &'static str = "name";
    const FILE_NAME: &'static str = "tools.json";

    fn key(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self) -> Result<(), WorkbenchError> {
        if self.name.trim().is_empty() {
            return Err(WorkbenchError::ValidationError(
                "Tool name is required".to_string(),
            ));
        }
        Ok(())
    }
}
