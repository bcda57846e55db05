use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::app::Result;
use crate::chunker::SegmentPacker;
use crate::config::{Config, ThreadConfig};
use crate::domain::{PostId, ReplyChain, SourceEvent};
use crate::fetcher::{ContentFetcher, Fetcher};
use crate::filter::should_process;
use crate::listener::EventHandler;
use crate::poster::{Poster, ThreadPoster};

/// Filter → fetch → chunk → post, for one event at a time. Holds no per-event state.
pub struct ArticleThreader {
    content: ContentFetcher,
    thread_poster: ThreadPoster,
    thread_config: ThreadConfig,
}

impl ArticleThreader {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        poster: Arc<dyn Poster + Send + Sync>,
        config: &Config,
    ) -> Self {
        Self {
            content: ContentFetcher::new(fetcher, config.fetch.clone()),
            thread_poster: ThreadPoster::new(poster),
            thread_config: config.thread.clone(),
        }
    }

    /// Convert the article linked from `event`.
    ///
    /// Returns `Ok(None)` when the event is filtered out or carries no link.
    pub async fn convert(&self, event: &SourceEvent) -> Result<Option<ReplyChain>> {
        if !should_process(event) {
            debug!(event = %event.id, "Skipping retweet or reply");
            return Ok(None);
        }

        let Some(url) = event.first_url() else {
            debug!(event = %event.id, "Skipping post without a link");
            return Ok(None);
        };

        self.convert_url(url, &event.author_handle(), &event.id)
            .await
            .map(Some)
    }

    /// Fetch `url` and post its text as a thread under `root`.
    ///
    /// Nothing is posted unless the article was fetched and extracted.
    pub async fn convert_url(&self, url: &str, author: &str, root: &PostId) -> Result<ReplyChain> {
        let sentences = self.content.fetch_sentences(url).await?;
        if sentences.is_empty() {
            info!(url, "Article has no text, nothing to post");
            return Ok(ReplyChain::new(root.clone()));
        }

        let intro = self.thread_config.render_intro(author, url);
        let segments = SegmentPacker::new(sentences, &self.thread_config);

        Ok(self.thread_poster.post_thread(&intro, segments, root).await)
    }
}

#[async_trait]
impl EventHandler for ArticleThreader {
    async fn on_event(&self, event: SourceEvent) {
        match self.convert(&event).await {
            Ok(Some(chain)) => {
                info!(event = %event.id, posted = chain.len(), "Converted article");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    event = %event.id,
                    url = event.first_url().unwrap_or_default(),
                    error = %e,
                    "Abandoned article conversion"
                );
            }
        }
    }
}
