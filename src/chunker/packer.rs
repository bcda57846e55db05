use std::collections::VecDeque;

use crate::chunker::char_len;
use crate::config::ThreadConfig;

/// Greedy packer that yields one segment at a time.
///
/// Sentences sit in a work queue. A sentence too long for an empty segment is
/// split at word boundaries and its pieces go back on the front of the queue,
/// so every segment is closed as soon as the next sentence no longer fits and
/// can be posted before the rest of the text is packed.
///
/// Every yielded segment is at most `tweet_size` characters long.
pub struct SegmentPacker<'a> {
    config: &'a ThreadConfig,
    queue: VecDeque<String>,
    current: String,
    trailing_pending: bool,
}

impl<'a> SegmentPacker<'a> {
    pub fn new(sentences: Vec<String>, config: &'a ThreadConfig) -> Self {
        let trailing_pending = config.trailing_hashtags
            && !config.hashtags.is_empty()
            && char_len(&config.hashtags) <= config.tweet_size;

        Self {
            config,
            queue: sentences.into(),
            current: String::new(),
            trailing_pending,
        }
    }

    /// Number of sentences (or sentence pieces) still waiting to be packed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn close_current(&mut self) -> String {
        let mut segment = std::mem::take(&mut self.current);
        let hashtags = &self.config.hashtags;
        if !hashtags.is_empty() && char_len(&segment) + char_len(hashtags) < self.config.tweet_size
        {
            segment.push_str(hashtags);
        }
        segment
    }

    fn requeue_split(&mut self, sentence: &str) {
        let size = self.config.tweet_size;
        let pieces: Vec<String> = split_sentence(sentence, size)
            .into_iter()
            .flat_map(|piece| hard_wrap(piece, size))
            .collect();

        for piece in pieces.into_iter().rev() {
            self.queue.push_front(piece);
        }
    }
}

impl Iterator for SegmentPacker<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let config = self.config;
        let size = config.tweet_size;
        let appendage = config.appendage.as_str();
        let appendage_len = char_len(appendage);

        while let Some(unit) = self.queue.pop_front() {
            let sentence = unit.trim();
            if sentence.is_empty() {
                continue;
            }
            let sentence_len = char_len(sentence);

            if self.current.is_empty() {
                if sentence_len + appendage_len <= size {
                    self.current.push_str(sentence);
                    self.current.push_str(appendage);
                } else if sentence_len <= size {
                    self.current.push_str(sentence);
                } else {
                    self.requeue_split(sentence);
                }
            } else if char_len(&self.current) + sentence_len + appendage_len > size {
                // Retried against a fresh segment on the next call
                self.queue.push_front(sentence.to_string());
                return Some(self.close_current());
            } else {
                self.current.push_str(sentence);
                self.current.push_str(appendage);
            }
        }

        if !self.current.is_empty() {
            return Some(self.close_current());
        }

        if self.trailing_pending {
            self.trailing_pending = false;
            return Some(config.hashtags.clone());
        }

        None
    }
}

/// Pack sentences into segments. See [`SegmentPacker`].
pub fn pack_segments(sentences: Vec<String>, config: &ThreadConfig) -> Vec<String> {
    SegmentPacker::new(sentences, config).collect()
}

/// Re-split a sentence on whitespace into chunks of at most `max_len` characters.
///
/// A sentence that already fits comes back unchanged as the only element.
/// Otherwise words are joined by single spaces. A chunk always takes its first
/// word, so a single word longer than `max_len` comes back whole rather than
/// truncated.
pub fn split_sentence(sentence: &str, max_len: usize) -> Vec<String> {
    if char_len(sentence) <= max_len {
        return vec![sentence.to_string()];
    }

    let mut chunks = Vec::new();
    let mut chunk = String::new();

    for word in sentence.split_whitespace() {
        if chunk.is_empty() {
            chunk.push_str(word);
        } else if char_len(&chunk) + 1 + char_len(word) <= max_len {
            chunk.push(' ');
            chunk.push_str(word);
        } else {
            chunks.push(std::mem::take(&mut chunk));
            chunk.push_str(word);
        }
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}

/// Cut a piece that is still too long into `max_len`-character runs.
fn hard_wrap(piece: String, max_len: usize) -> Vec<String> {
    if char_len(&piece) <= max_len {
        return vec![piece];
    }

    let chars: Vec<char> = piece.chars().collect();
    chars
        .chunks(max_len.max(1))
        .map(|run| run.iter().collect())
        .collect()
}
