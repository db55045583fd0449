use reqwest::Response;

use crate::consts;
use crate::errors::WorkbenchError;

/// Splits an arbitrary byte chunking back into text lines.
///
/// Both `\n` and `\r\n` terminate a line; the terminator is not returned.
/// Bytes already searched for a terminator are not searched again.
#[derive(Debug)]
pub struct LineSplitter {
    buffer: Vec<u8>,
    start: usize,
    scanned: usize,
    max_line: usize,
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self::with_max_line(consts::MAX_LINE_BYTES)
    }
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_line(max_line: usize) -> Self {
        Self {
            buffer: Vec::new(),
            start: 0,
            scanned: 0,
            max_line,
        }
    }

    pub fn push(&mut self, chunk: &[u8]) {
        if self.start > 0 {
            self.buffer.drain(..self.start);
            self.scanned -= self.start;
            self.start = 0;
        }
        self.buffer.extend_from_slice(chunk);
    }

    /// Next complete line, `Ok(None)` if more input is needed.
    pub fn next_line(&mut self) -> Result<Option<String>, WorkbenchError> {
        let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') else {
            self.scanned = self.buffer.len();
            self.check_length(self.scanned - self.start)?;
            return Ok(None);
        };

        let end = self.scanned + offset;
        self.check_length(end - self.start)?;
        let line = &self.buffer[self.start..end];
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let line = String::from_utf8_lossy(line).into_owned();

        self.start = end + 1;
        self.scanned = self.start;
        Ok(Some(line))
    }

    /// Returns the unterminated tail once the input is over.
    pub fn finish(&mut self) -> Option<String> {
        let rest = self.buffer.split_off(self.start);
        self.buffer.clear();
        self.start = 0;
        self.scanned = 0;
        if rest.is_empty() {
            return None;
        }
        let rest = rest.strip_suffix(b"\r").unwrap_or(&rest);
        Some(String::from_utf8_lossy(rest).into_owned())
    }

    fn check_length(&self, len: usize) -> Result<(), WorkbenchError> {
        if len > self.max_line {
            return Err(WorkbenchError::ParseError(format!(
                "stream line exceeds {} bytes",
                self.max_line
            )));
        }
        Ok(())
    }
}

/// Pulls lines out of a streaming HTTP body, one upstream chunk at a time.
pub struct LineReader {
    response: Response,
    splitter: LineSplitter,
    exhausted: bool,
}

impl LineReader {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            splitter: LineSplitter::new(),
            exhausted: false,
        }
    }

    pub async fn next_line(&mut self) -> Option<Result<String, WorkbenchError>> {
        loop {
            match self.splitter.next_line() {
                Ok(Some(line)) => return Some(Ok(line)),
                Ok(None) => {}
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
            if self.exhausted {
                return None;
            }
            match self.response.chunk().await {
                Ok(Some(bytes)) => self.splitter.push(&bytes),
                Ok(None) => {
                    self.exhausted = true;
                    return self.splitter.finish().map(Ok);
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
