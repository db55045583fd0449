use serde::{self, Deserialize, Serialize};

use crate::consts;

fn default_temperature() -> f64 {
    consts::DEFAULT_TEMPERATURE
}

/// Body of `POST /api/ab-test`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AbTestRequest {
    pub prompt: String,
    pub models: Vec<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

/// Outcome of one model's call. A failed call is a normal result, not an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AbTestResult {
    Success {
        model: String,
        response: Option<String>,
    },
    Error {
        model: String,
        error: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AbTestReport {
    pub results: Vec<AbTestResult>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_result_wire_shapes() {
        let success = AbTestResult::Success {
            model: "m1".into(),
            response: Some("hello".into()),
        };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({"status": "success", "model": "m1", "response": "hello"})
        );

        let error = AbTestResult::Error {
            model: "m2".into(),
            error: "boom".into(),
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"status": "error", "model": "m2", "error": "boom"})
        );
    }

    #[test]
    fn test_request_temperature_default() {
        let request: AbTestRequest =
            serde_json::from_value(json!({"prompt": "p", "models": ["a"]})).unwrap();
        assert_eq!(request.temperature, 0.7);
    }
}
