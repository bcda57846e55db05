use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::PostId;

#[derive(Debug, Clone, Serialize)]
pub struct PostedSegment {
    pub id: PostId,
    pub reply_to: PostId,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// Posts successfully published for one origin event, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyChain {
    root: PostId,
    posts: Vec<PostedSegment>,
}

impl ReplyChain {
    pub fn new(root: PostId) -> Self {
        Self {
            root,
            posts: Vec::new(),
        }
    }

    pub fn root(&self) -> &PostId {
        &self.root
    }

    /// Reply target for the next post: the last published id, or the root.
    pub fn last_id(&self) -> &PostId {
        self.posts.last().map(|p| &p.id).unwrap_or(&self.root)
    }

    pub fn push(&mut self, id: PostId, text: String) {
        let reply_to = self.last_id().clone();
        self.posts.push(PostedSegment {
            id,
            reply_to,
            text,
            posted_at: Utc::now(),
        });
    }

    pub fn posts(&self) -> &[PostedSegment] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// True when every post replies to its predecessor and the first replies to the root.
    pub fn is_linked(&self) -> bool {
        let mut expected = &self.root;
        for post in &self.posts {
            if &post.reply_to != expected {
                return false;
            }
            expected = &post.id;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_targets_root() {
        let chain = ReplyChain::new(PostId::new("root"));
        assert!(chain.is_empty());
        assert_eq!(chain.last_id(), &PostId::new("root"));
        assert!(chain.is_linked());
    }

    #[test]
    fn test_push_links_to_previous() {
        let mut chain = ReplyChain::new(PostId::new("root"));
        chain.push(PostId::new("a"), "first".into());
        chain.push(PostId::new("b"), "second".into());

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.posts()[0].reply_to, PostId::new("root"));
        assert_eq!(chain.posts()[1].reply_to, PostId::new("a"));
        assert_eq!(chain.last_id(), &PostId::new("b"));
        assert!(chain.is_linked());
    }
}
