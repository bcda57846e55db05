use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for fetching and extracting linked articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// User agent string to use
    pub user_agent: String,

    /// Skip TLS certificate verification. Off unless explicitly enabled.
    pub danger_accept_invalid_certs: bool,

    /// Attempts made while the page keeps returning the placeholder (default: 3)
    pub max_attempts: u32,

    /// Delay between placeholder retries in milliseconds (default: 1000)
    pub retry_delay_ms: u64,

    /// Text that marks a page rendered without scripting
    pub placeholder_text: String,

    /// Optional CSS selector of the element holding the article; empty means the whole body
    pub content_selector: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "threader/0.1.0".to_string(),
            danger_accept_invalid_certs: false,
            max_attempts: 3,
            retry_delay_ms: 1000,
            placeholder_text: "JavaScript is disabled".to_string(),
            content_selector: String::new(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn content_selector(&self) -> Option<&str> {
        let selector = self.content_selector.trim();
        (!selector.is_empty()).then_some(selector)
    }
}
