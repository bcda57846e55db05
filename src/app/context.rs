use std::path::Path;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::{Config, PosterKind};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::listener::ArticleThreader;
use crate::poster::{DryRunPoster, Poster, WebhookPoster};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub poster: Arc<dyn Poster + Send + Sync>,
}

impl AppContext {
    /// Load the config file (default location unless `config_path` is given) and wire components.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Self::new(config)
    }

    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.fetch)?);
        let poster: Arc<dyn Poster + Send + Sync> = match config.poster.kind {
            PosterKind::DryRun => Arc::new(DryRunPoster::new()),
            PosterKind::Webhook => Arc::new(WebhookPoster::new(
                config.poster.webhook_url.clone(),
                config.fetch.timeout(),
            )?),
        };

        Ok(Self {
            config,
            fetcher,
            poster,
        })
    }

    pub fn threader(&self) -> ArticleThreader {
        ArticleThreader::new(self.fetcher.clone(), self.poster.clone(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThreaderError;

    #[test]
    fn test_new_with_defaults() {
        let ctx = AppContext::new(Config::default()).unwrap();
        assert_eq!(ctx.config.thread.tweet_size, 280);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.poster.kind = PosterKind::Webhook;
        assert!(matches!(
            AppContext::new(config),
            Err(ThreaderError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[thread]\ntweet_size = 100\n").unwrap();

        let ctx = AppContext::load(Some(&path)).unwrap();
        assert_eq!(ctx.config.thread.tweet_size, 100);
    }
}
