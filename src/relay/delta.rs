use actix_web::web::Bytes;
use async_trait::async_trait;
use reqwest::Response;

use super::FrameSource;
use super::lines::LineReader;
use super::sse;
use crate::consts;
use crate::errors::WorkbenchError;
use crate::models::response_stream::ChatCompletionChunk;

/// Line-level decoder for the chat-completions token stream.
#[derive(Debug, Default)]
pub struct DeltaDecoder {
    done: bool,
}

impl DeltaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the text fragment carried by `line`, if any.
    ///
    /// Blank lines, comments, chunks without text and the `[DONE]` marker
    /// yield `Ok(None)`. A `data:` line that is not a valid chunk is an error.
    pub fn decode_line(&mut self, line: &str) -> Result<Option<String>, WorkbenchError> {
        if self.done {
            return Ok(None);
        }
        let Some(payload) = line.strip_prefix("data:") else {
            return Ok(None);
        };
        let payload = payload.trim();
        if payload.is_empty() {
            return Ok(None);
        }
        if payload == consts::DONE_MARKER {
            self.done = true;
            return Ok(None);
        }

        let chunk: ChatCompletionChunk = serde_json::from_str(payload)?;
        Ok(chunk.fragment().map(str::to_string))
    }
}

/// Non-empty text fragments of one streaming chat completion, in upstream order.
pub struct DeltaStream {
    lines: LineReader,
    decoder: DeltaDecoder,
}

impl DeltaStream {
    pub fn new(response: Response) -> Self {
        Self {
            lines: LineReader::new(response),
            decoder: DeltaDecoder::new(),
        }
    }

    pub async fn next_fragment(&mut self) -> Option<Result<String, WorkbenchError>> {
        while !self.decoder.is_done() {
            let line = match self.lines.next_line().await? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            match self.decoder.decode_line(&line) {
                Ok(Some(fragment)) => return Some(Ok(fragment)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

#[async_trait]
impl FrameSource for DeltaStream {
    async fn next_frame(&mut self) -> Option<Result<Bytes, WorkbenchError>> {
        let fragment = self.next_fragment().await?;
        Some(fragment.map(|fragment| sse::delta_frame(&fragment)))
    }
}
