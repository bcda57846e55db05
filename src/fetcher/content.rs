use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::{Result, ThreaderError};
use crate::chunker::split_into_sentences;
use crate::config::FetchConfig;
use crate::fetcher::{Document, Fetcher};

/// Fetches an article and turns it into sentences, retrying while the page
/// comes back as the no-script placeholder.
pub struct ContentFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    config: FetchConfig,
}

impl ContentFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: FetchConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetch, extract and split the article at `url`.
    ///
    /// Transport errors and pages without paragraphs fail immediately. Only the
    /// placeholder page is retried, up to `max_attempts` fetches in total.
    pub async fn fetch_sentences(&self, url: &str) -> Result<Vec<String>> {
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let body = self.fetcher.fetch(url).await?;
            let text = extract_text(&body, self.config.content_selector())?
                .ok_or_else(|| ThreaderError::NoExtractableContent(url.to_string()))?;

            if !self.is_placeholder(&text) {
                let sentences = split_into_sentences(&text);
                debug!(url, attempt, sentences = sentences.len(), "Extracted article");
                return Ok(sentences);
            }

            warn!(url, attempt, max_attempts, "Page returned the no-script placeholder");
            if attempt < max_attempts {
                tokio::time::sleep(self.config.retry_delay()).await;
            }
        }

        Err(ThreaderError::PlaceholderRetriesExhausted {
            url: url.to_string(),
            attempts: max_attempts,
        })
    }

    fn is_placeholder(&self, text: &str) -> bool {
        let marker = self.config.placeholder_text.as_str();
        !marker.is_empty() && text.contains(marker)
    }
}

// The parsed tree is not Send, so it never lives across an await.
fn extract_text(body: &[u8], container: Option<&str>) -> Result<Option<String>> {
    Document::parse(body).paragraph_text(container)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    pub(crate) const PLACEHOLDER_HTML: &str =
        "<html><body><p>JavaScript is disabled in this browser</p></body></html>";

    pub(crate) const ARTICLE_HTML: &str =
        "<html><body><p>Rust ships every six weeks.</p><p> Editions are opt-in.</p></body></html>";

    /// Serves scripted responses in order, repeating the last one.
    pub(crate) struct ScriptedFetcher {
        responses: Mutex<VecDeque<std::result::Result<String, String>>>,
        pub calls: AtomicUsize,
    }

    impl ScriptedFetcher {
        pub(crate) fn new(responses: Vec<std::result::Result<&str, &str>>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for ScriptedFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            let response = if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses.front().cloned().unwrap()
            };
            response
                .map(String::into_bytes)
                .map_err(ThreaderError::Other)
        }
    }

    pub(crate) fn fast_config() -> FetchConfig {
        FetchConfig {
            retry_delay_ms: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_sentences_success() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Ok(ARTICLE_HTML)]));
        let content = ContentFetcher::new(fetcher.clone(), fast_config());

        let sentences = content.fetch_sentences("https://example.com/a").await.unwrap();
        assert_eq!(
            sentences,
            vec!["Rust ships every six weeks.", " Editions are opt-in."]
        );
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_retries_placeholder_then_succeeds() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            Ok(PLACEHOLDER_HTML),
            Ok(ARTICLE_HTML),
        ]));
        let content = ContentFetcher::new(fetcher.clone(), fast_config());

        let sentences = content.fetch_sentences("https://example.com/a").await.unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_placeholder_exhausts_retries() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Ok(PLACEHOLDER_HTML)]));
        let content = ContentFetcher::new(fetcher.clone(), fast_config());

        let err = content
            .fetch_sentences("https://example.com/a")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ThreaderError::PlaceholderRetriesExhausted { attempts: 3, .. }
        ));
        assert_eq!(fetcher.calls(), 3);
    }

    #[tokio::test]
    async fn test_transport_error_is_not_retried() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Err("connection reset")]));
        let content = ContentFetcher::new(fetcher.clone(), fast_config());

        let err = content
            .fetch_sentences("https://example.com/a")
            .await
            .unwrap_err();
        assert!(matches!(err, ThreaderError::Other(_)));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_no_paragraphs_is_no_extractable_content() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Ok(
            "<html><body><div>no paragraphs</div></body></html>",
        )]));
        let content = ContentFetcher::new(fetcher.clone(), fast_config());

        let err = content
            .fetch_sentences("https://example.com/a")
            .await
            .unwrap_err();
        assert!(matches!(err, ThreaderError::NoExtractableContent(_)));
    }

    #[tokio::test]
    async fn test_empty_placeholder_text_disables_detection() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![Ok(PLACEHOLDER_HTML)]));
        let config = FetchConfig {
            placeholder_text: String::new(),
            ..fast_config()
        };
        let content = ContentFetcher::new(fetcher.clone(), config);

        let sentences = content.fetch_sentences("https://example.com/a").await.unwrap();
        assert_eq!(sentences, vec!["JavaScript is disabled in this browser."]);
    }
}
