use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::domain::PostId;
use crate::poster::{PostError, Poster};

/// Prints each post to stdout and hands out sequential ids.
#[derive(Default)]
pub struct DryRunPoster {
    next_id: AtomicU64,
}

impl DryRunPoster {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Poster for DryRunPoster {
    async fn post(&self, text: &str, reply_to: Option<&PostId>) -> Result<PostId, PostError> {
        let id = PostId::new((self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string());
        let target = reply_to.map(PostId::as_str).unwrap_or("-");

        info!(id = %id, reply_to = target, chars = text.chars().count(), "Dry-run post");
        println!("[{id} -> {target}] {text}");

        Ok(id)
    }
}
