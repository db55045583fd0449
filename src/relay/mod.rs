//! Re-emits an upstream stream to the browser as server-sent events.
//!
//! Both upstream protocols are read line by line and turned into framed SSE
//! bytes by a [`FrameSource`]. [`relay`] moves frames into a bounded channel
//! whose receiving end is the HTTP response body, so the upstream is only
//! read as fast as the client consumes.

pub mod delta;
pub mod events;
pub mod lines;
pub mod sse;

use actix_web::web::Bytes;
use async_trait::async_trait;
use futures_core::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::consts;
use crate::errors::WorkbenchError;

pub use delta::DeltaStream;
pub use events::{EventStream, UpstreamEvent};

pub type FrameSender = mpsc::Sender<Result<Bytes, WorkbenchError>>;

#[async_trait]
pub trait FrameSource: Send {
    /// Next SSE frame, `None` once upstream has ended.
    async fn next_frame(&mut self) -> Option<Result<Bytes, WorkbenchError>>;
}

/// Creates the channel a relay writes into and the body stream that drains it.
pub fn frame_channel() -> (
    FrameSender,
    impl Stream<Item = Result<Bytes, WorkbenchError>> + 'static,
) {
    let (sender, receiver) = mpsc::channel(consts::CHANNEL_BUFFER_SIZE);
    (sender, ReceiverStream::new(receiver))
}

/// Forwards frames from `source` until it ends, fails, or the client goes away.
///
/// An upstream failure is sent to the client as a terminal `error` event and
/// then returned. Returns the number of frames forwarded. Dropping `source`
/// on return closes the upstream connection.
pub async fn relay<S: FrameSource>(
    mut source: S,
    sender: FrameSender,
) -> Result<usize, WorkbenchError> {
    let mut forwarded = 0;

    loop {
        let next = tokio::select! {
            _ = sender.closed() => {
                log::info!("client disconnected after {} frames, closing upstream stream", forwarded);
                return Ok(forwarded);
            }
            next = source.next_frame() => next,
        };

        match next {
            None => {
                log::debug!("upstream stream finished after {} frames", forwarded);
                return Ok(forwarded);
            }
            Some(Ok(frame)) => {
                if sender.send(Ok(frame)).await.is_err() {
                    log::info!("client disconnected after {} frames, closing upstream stream", forwarded);
                    return Ok(forwarded);
                }
                forwarded += 1;
            }
            Some(Err(e)) => {
                let _ = sender.send(Ok(sse::error_frame(&e.to_string()))).await;
                return Err(e);
            }
        }
    }
}
