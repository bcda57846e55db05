//! # threader
//!
//! Listens to a status stream and re-posts linked articles as reply threads.
//!
//! ## Architecture
//!
//! Every inbound post runs through a linear pipeline:
//!
//! ```text
//! SourceEvent → filter → ContentFetcher → SegmentPacker → ThreadPoster
//! ```
//!
//! - [`filter`]: drops retweets and replies
//! - [`fetcher`]: fetches the linked page and extracts its paragraphs
//! - [`chunker`]: splits the text into posts of bounded length
//! - [`poster`]: publishes the posts as a reply chain
//!
//! ## Quick Start
//!
//! ```bash
//! # Preview how an article would be split
//! threader chunk article.txt
//!
//! # Thread one article under post 12345
//! threader convert https://example.com/article --reply-to 12345
//!
//! # Handle a stream of posts delivered as JSON lines
//! some-stream-adapter | threader listen
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// the poster and the loaded configuration.
pub mod app;

/// Command-line interface using clap.
///
/// - `listen` - Handle posts from stdin
/// - `convert <url> --reply-to <id>` - Thread one article
/// - `chunk [file]` - Preview segments
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/threader/config.toml`.
pub mod config;

/// Text segmentation.
///
/// - [`split_into_sentences`](chunker::split_into_sentences): period-based splitter
/// - [`SegmentPacker`](chunker::SegmentPacker): greedy, lazy segment packing
/// - [`split_sentence`](chunker::split_sentence): word-level re-split of long sentences
pub mod chunker;

/// Core domain models.
///
/// - [`SourceEvent`](domain::SourceEvent): an inbound post
/// - [`ReplyChain`](domain::ReplyChain): posts published for one event
pub mod domain;

/// Article fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`Document`](fetcher::Document): parsed page, paragraph extraction
/// - [`ContentFetcher`](fetcher::ContentFetcher): fetch + extract with placeholder retry
pub mod fetcher;

/// Retweet and reply suppression.
pub mod filter;

/// Stream event handling.
///
/// - [`EventHandler`](listener::EventHandler): callback interface for the host stream
/// - [`ArticleThreader`](listener::ArticleThreader): the article-to-thread pipeline
pub mod listener;

/// Thread publishing.
pub mod poster;
