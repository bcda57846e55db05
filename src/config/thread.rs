use serde::{Deserialize, Serialize};

use crate::chunker::char_len;

/// Settings that shape how an article becomes a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadConfig {
    /// Appended after every sentence placed in a segment (default: a single space)
    pub appendage: String,

    /// Appended to a segment when it is closed with room to spare (default: empty)
    pub hashtags: String,

    /// Maximum segment length in characters (default: 280)
    pub tweet_size: usize,

    /// Preamble posted before the article text; `{author}`, `{contact}` and `{url}` are substituted
    pub tweet_intro: String,

    /// Handle people can reach about the thread, used for `{contact}` (default: "@threader")
    pub contact_handle: String,

    /// Also post `hashtags` as a segment of its own at the end of the thread (default: false)
    pub trailing_hashtags: bool,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            appendage: " ".to_string(),
            hashtags: String::new(),
            tweet_size: 280,
            tweet_intro: "{author} This thread was brought to you by threader, contact {contact}"
                .to_string(),
            contact_handle: "@threader".to_string(),
            trailing_hashtags: false,
        }
    }
}

impl ThreadConfig {
    /// Render the intro, cut to `tweet_size` characters like every other post.
    pub fn render_intro(&self, author: &str, url: &str) -> String {
        let intro = self
            .tweet_intro
            .replace("{author}", author)
            .replace("{contact}", &self.contact_handle)
            .replace("{url}", url);

        if char_len(&intro) <= self.tweet_size {
            intro
        } else {
            intro.chars().take(self.tweet_size).collect()
        }
    }

    /// Length of the intro before any author or url is filled in.
    pub fn intro_base_len(&self) -> usize {
        char_len(
            &self
                .tweet_intro
                .replace("{author}", "")
                .replace("{contact}", &self.contact_handle)
                .replace("{url}", ""),
        )
    }
}
