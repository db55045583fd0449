use actix_web::web::Bytes;
use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use super::FrameSource;
use super::lines::LineReader;
use super::sse;
use crate::errors::WorkbenchError;

/// One named event of the `/responses` stream. `data` is raw JSON text, never parsed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpstreamEvent {
    pub event: String,
    pub data: String,
}

/// Pairs `event:` lines with the `data:` line that follows them.
///
/// A second `event:` line before any data replaces the pending name. A `data:`
/// line with no pending name is dropped. An empty `data:` line leaves the
/// pending name in place.
#[derive(Debug, Default)]
pub struct EventDecoder {
    pending: Option<String>,
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) -> Option<UpstreamEvent> {
        if let Some(name) = line.strip_prefix("event:") {
            self.pending = Some(name.trim().to_string());
            return None;
        }

        let data = line.strip_prefix("data:")?.trim();
        if data.is_empty() {
            return None;
        }
        match self.pending.take_if(|name| !name.is_empty()) {
            Some(event) => Some(UpstreamEvent {
                event,
                data: data.to_string(),
            }),
            None => {
                log::debug!("dropping data line without a preceding event: {:?}", data);
                None
            }
        }
    }
}

/// Decoded events of one streaming `/responses` call, in upstream order.
pub struct EventStream {
    lines: LineReader,
    decoder: EventDecoder,
}

impl EventStream {
    pub fn new(response: Response) -> Self {
        Self {
            lines: LineReader::new(response),
            decoder: EventDecoder::new(),
        }
    }

    pub async fn next_event(&mut self) -> Option<Result<UpstreamEvent, WorkbenchError>> {
        loop {
            let line = match self.lines.next_line().await? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if let Some(event) = self.decoder.feed(&line) {
                return Some(Ok(event));
            }
        }
    }
}

#[async_trait]
impl FrameSource for EventStream {
    async fn next_frame(&mut self) -> Option<Result<Bytes, WorkbenchError>> {
        let event = self.next_event().await?;
        Some(event.map(|event| sse::event_frame(&event.event, &event.data)))
    }
}
