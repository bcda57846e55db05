use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::app::Result;
use crate::domain::SourceEvent;
use crate::listener::EventHandler;

/// One line of the inbound stream: a post, or an error code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StreamMessage {
    Error { error: u16 },
    Status(Box<SourceEvent>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub events: usize,
    pub errors: usize,
    pub malformed: usize,
}

/// Feed every line of `reader` to `handler`, one event at a time, until EOF.
///
/// Lines that do not parse are logged and skipped.
pub async fn run_stream<R, H>(reader: R, handler: &H) -> Result<StreamStats>
where
    R: AsyncBufRead + Unpin,
    H: EventHandler + ?Sized,
{
    let mut stats = StreamStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<StreamMessage>(line) {
            Ok(StreamMessage::Status(event)) => {
                stats.events += 1;
                debug!(event = %event.id, "Received post");
                handler.on_event(*event).await;
            }
            Ok(StreamMessage::Error { error }) => {
                stats.errors += 1;
                handler.on_error(error);
            }
            Err(e) => {
                stats.malformed += 1;
                warn!(error = %e, "Skipping malformed stream line");
            }
        }
    }

    Ok(stats)
}
