#![allow(dead_code)]

use serde_json::{Value, json};

pub fn sample_models() -> Value {
    json!({
        "object": "list",
        "data": [
            {"id": "qwen2.5-7b-instruct", "object": "model", "owned_by": "organization_owner"},
            {"id": "text-embedding-nomic", "object": "model", "owned_by": "organization_owner"}
        ]
    })
}

pub fn sample_completion(model: &str, content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1234567890,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15},
        "stats": {},
        "system_fingerprint": model
    })
}

pub fn sample_chunk(content: Option<&str>) -> Value {
    let delta = match content {
        Some(text) => json!({"role": "assistant", "content": text}),
        None => json!({"role": "assistant"}),
    };
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion.chunk",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{"index": 0, "delta": delta, "finish_reason": null}]
    })
}

/// Chunks spelling "Hello world", with empty and role-only chunks mixed in.
pub fn sample_chunks() -> Vec<Value> {
    vec![
        sample_chunk(None),
        sample_chunk(Some("Hello")),
        sample_chunk(Some("")),
        sample_chunk(Some(" world")),
        json!({
            "id": "chatcmpl-test-1",
            "object": "chat.completion.chunk",
            "created": 1234567890,
            "model": "test-model",
            "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}]
        }),
    ]
}

pub fn sample_response_body() -> Value {
    json!({
        "id": "resp_abc123",
        "object": "response",
        "status": "completed",
        "model": "test-model",
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": "Hi there"}]
        }],
        "previous_response_id": null
    })
}

pub fn sample_response_events() -> Vec<(&'static str, Value)> {
    vec![
        ("response.created", json!({"type": "response.created", "response": {"id": "resp_abc123"}})),
        ("response.output_text.delta", json!({"type": "response.output_text.delta", "delta": "Hi"})),
        ("response.output_text.delta", json!({"type": "response.output_text.delta", "delta": " there"})),
        ("response.completed", json!({"type": "response.completed", "response": {"id": "resp_abc123"}})),
    ]
}
