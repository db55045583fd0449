use serde::Serialize;

/// Upstream chat-completions stream: one `data:` line per chunk, then `[DONE]`.
pub fn build_chunk_stream<T: Serialize>(chunks: &[T]) -> String {
    let mut sse = String::new();
    for chunk in chunks {
        let json_str = serde_json::to_string(chunk).unwrap();
        sse.push_str(&format!("data: {}\n\n", json_str));
    }
    sse.push_str("data: [DONE]\n\n");
    sse
}

/// Upstream `/responses` stream with `event:`/`data:` pairs.
pub fn build_event_stream(events: &[(&str, serde_json::Value)], delimiter: &str) -> String {
    let mut sse = String::new();
    for (name, data) in events {
        let json_str = serde_json::to_string(data).unwrap();
        sse.push_str(&format!(
            "event: {}{}data: {}{}{}",
            name, delimiter, json_str, delimiter, delimiter
        ));
    }
    sse
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub event: Option<String>,
    pub data: String,
}

/// Parses what the relay sent to the browser.
pub fn parse_frames(body: &str) -> Vec<Frame> {
    body.split("\r\n\r\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let mut event = None;
            let mut data = vec![];
            for line in block.split("\r\n") {
                if let Some(name) = line.strip_prefix("event: ") {
                    event = Some(name.to_string());
                } else if let Some(payload) = line.strip_prefix("data: ") {
                    data.push(payload.to_string());
                }
            }
            Frame {
                event,
                data: data.join("\n"),
            }
        })
        .collect()
}
