use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{PostId, ReplyChain};
use crate::poster::Poster;

/// Posts a thread one segment at a time, each replying to the last successful post.
pub struct ThreadPoster {
    poster: Arc<dyn Poster + Send + Sync>,
}

impl ThreadPoster {
    pub fn new(poster: Arc<dyn Poster + Send + Sync>) -> Self {
        Self { poster }
    }

    /// Post `intro` as a reply to `root`, then every segment in order.
    ///
    /// Segments are pulled lazily, so each one is published as soon as it is
    /// packed. A failed post is logged and skipped; the next post replies to
    /// the last one that succeeded.
    pub async fn post_thread<I>(&self, intro: &str, segments: I, root: &PostId) -> ReplyChain
    where
        I: IntoIterator<Item = String>,
    {
        let mut chain = ReplyChain::new(root.clone());
        let mut failed = 0usize;

        if !self.post_one(&mut chain, intro.to_string()).await {
            failed += 1;
        }
        for segment in segments {
            if !self.post_one(&mut chain, segment).await {
                failed += 1;
            }
        }

        info!(
            root = %root,
            posted = chain.len(),
            failed,
            "Thread finished"
        );
        chain
    }

    async fn post_one(&self, chain: &mut ReplyChain, text: String) -> bool {
        match self.poster.post(&text, Some(chain.last_id())).await {
            Ok(id) => {
                debug!(id = %id, reply_to = %chain.last_id(), "Posted segment");
                chain.push(id, text);
                true
            }
            Err(e) => {
                warn!(kind = e.kind(), segment = %text, error = %e, "Failed to post segment");
                false
            }
        }
    }
}
