//! Publishing threads.
//!
//! - [`Poster`]: async trait for the platform's post call
//! - [`ThreadPoster`]: posts an intro and segments as a reply chain
//! - [`DryRunPoster`]: prints posts instead of publishing them
//! - [`WebhookPoster`]: forwards posts to an HTTP endpoint

mod dry_run;
mod thread;
mod webhook;

pub use dry_run::DryRunPoster;
pub use thread::ThreadPoster;
pub use webhook::WebhookPoster;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PostId;

/// Failure to publish one post. Never fatal for the rest of a thread.
///
/// `OutboundEncode` and `OutboundDecode` are about turning the outbound text
/// into request bytes; anything wrong with the platform's answer, including a
/// body that cannot be read, is `Rejected`.
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Post rejected: {0}")]
    Rejected(String),

    #[error("Outbound decode failed: {0}")]
    OutboundDecode(String),

    #[error("Outbound encode failed: {0}")]
    OutboundEncode(String),
}

impl PostError {
    /// Short tag used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PostError::Rejected(_) => "ERROR",
            PostError::OutboundDecode(_) => "UNICODE_DECODE_ERROR",
            PostError::OutboundEncode(_) => "UNICODE_ENCODE_ERROR",
        }
    }
}

#[async_trait]
pub trait Poster {
    /// Publish `text`, optionally as a reply, and return the new post's id.
    async fn post(&self, text: &str, reply_to: Option<&PostId>) -> Result<PostId, PostError>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call; posts whose text contains a key of `failures` fail with that error.
    pub(crate) struct RecordingPoster {
        pub calls: Mutex<Vec<(String, Option<PostId>)>>,
        failures: Vec<(&'static str, fn(String) -> PostError)>,
    }

    impl RecordingPoster {
        pub(crate) fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failures: Vec::new(),
            }
        }

        pub(crate) fn failing_on(mut self, marker: &'static str, error: fn(String) -> PostError) -> Self {
            self.failures.push((marker, error));
            self
        }

        pub(crate) fn calls(&self) -> Vec<(String, Option<PostId>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Poster for RecordingPoster {
        async fn post(&self, text: &str, reply_to: Option<&PostId>) -> Result<PostId, PostError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push((text.to_string(), reply_to.cloned()));
            if let Some((_, error)) = self.failures.iter().find(|(m, _)| text.contains(m)) {
                return Err(error(text.to_string()));
            }
            Ok(PostId::new(format!("post-{}", calls.len())))
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(PostError::Rejected("dup".into()).kind(), "ERROR");
        assert_eq!(
            PostError::OutboundDecode("x".into()).kind(),
            "UNICODE_DECODE_ERROR"
        );
        assert_eq!(
            PostError::OutboundEncode("x".into()).kind(),
            "UNICODE_ENCODE_ERROR"
        );
    }
}
