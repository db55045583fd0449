use std::sync::Arc;

use reqwest::Client;
use tempfile::TempDir;

use llm_workbench::consts;
use llm_workbench::gateway::Gateway;
use llm_workbench::llm_client::LLMClient;
use llm_workbench::store::Stores;

pub fn create_gateway(base_url: &str) -> Gateway {
    let client = LLMClient::new(Client::new(), base_url, consts::PLACEHOLDER_API_KEY);
    Gateway::new(Arc::new(client))
}

/// Nothing listens on port 1 on a test machine, so connections are refused.
pub fn unreachable_gateway() -> Gateway {
    create_gateway("http://127.0.0.1:1/v1")
}

pub fn create_test_stores() -> (TempDir, Stores) {
    let dir = tempfile::tempdir().unwrap();
    let stores = Stores::open(dir.path()).unwrap();
    (dir, stores)
}
