//! Reacting to the status stream.
//!
//! The stream connection itself belongs to the host; it hands every post to an
//! [`EventHandler`]. [`ArticleThreader`] is the handler that turns linked
//! articles into reply threads, and [`run_stream`] drives a handler from a
//! JSON-lines source.

mod stream;
mod threader;

pub use stream::{run_stream, StreamMessage, StreamStats};
pub use threader::ArticleThreader;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::SourceEvent;

#[async_trait]
pub trait EventHandler {
    /// Handle one post. Failures are logged, never propagated.
    async fn on_event(&self, event: SourceEvent);

    /// Out-of-band error code from the stream.
    fn on_error(&self, code: u16) {
        warn!(code, "Stream reported an error");
    }
}
