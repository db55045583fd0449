//! Outbound SSE framing.
//!
//! Wire shapes, kept as existing browser clients expect them:
//! - chat-completions delta: `data: {"data":"<fragment>"}`
//! - responses event: `event: <name>` then `data: <raw json>`
//! - terminal failure: `event: error` then `data: {"error":"<message>"}`

use actix_web::web::Bytes;
use serde::Serialize;

use crate::consts;

const LINE_END: &str = "\r\n";

#[derive(Serialize)]
struct DeltaPayload<'a> {
    data: &'a str,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

pub fn frame(event: Option<&str>, data: &str) -> Bytes {
    let mut out = String::with_capacity(data.len() + 32);
    if let Some(event) = event {
        out.push_str("event: ");
        out.push_str(event);
        out.push_str(LINE_END);
    }
    for line in data.lines() {
        out.push_str("data: ");
        out.push_str(line);
        out.push_str(LINE_END);
    }
    if data.is_empty() {
        out.push_str("data: ");
        out.push_str(LINE_END);
    }
    out.push_str(LINE_END);
    Bytes::from(out)
}

pub fn delta_frame(fragment: &str) -> Bytes {
    let payload = serde_json::to_string(&DeltaPayload { data: fragment })
        .unwrap_or_else(|_| String::from("{}"));
    frame(None, &payload)
}

pub fn event_frame(event: &str, data: &str) -> Bytes {
    frame(Some(event), data)
}

pub fn error_frame(message: &str) -> Bytes {
    let payload = serde_json::to_string(&ErrorPayload { error: message })
        .unwrap_or_else(|_| String::from("{}"));
    frame(Some(consts::ERROR_EVENT), &payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_frame_wraps_fragment_in_json() {
        let bytes = delta_frame("Hel\"lo\n");
        assert_eq!(&bytes[..], b"data: {\"data\":\"Hel\\\"lo\\n\"}\r\n\r\n");
    }

    #[test]
    fn test_event_frame_passes_data_through() {
        let bytes = event_frame("response.output_text.delta", r#"{"delta":"Hi"}"#);
        assert_eq!(
            &bytes[..],
            b"event: response.output_text.delta\r\ndata: {\"delta\":\"Hi\"}\r\n\r\n"
        );
    }

    #[test]
    fn test_multiline_data_gets_one_line_each() {
        let bytes = frame(None, "a\nb");
        assert_eq!(&bytes[..], b"data: a\r\ndata: b\r\n\r\n");
    }

    #[test]
    fn test_error_frame() {
        let bytes = error_frame("upstream closed");
        assert_eq!(
            &bytes[..],
            b"event: error\r\ndata: {\"error\":\"upstream closed\"}\r\n\r\n"
        );
    }
}
