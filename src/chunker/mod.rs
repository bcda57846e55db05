//! Turns article text into bounded-length segments.
//!
//! ```text
//! text → split_into_sentences → SegmentPacker → segments
//! ```
//!
//! Sentence splitting is deliberately crude: it cuts on every `.` and knows
//! nothing about abbreviations, decimals or text without a final period.

mod packer;
mod sentences;

pub use packer::{pack_segments, split_sentence, SegmentPacker};
pub use sentences::{split_into_sentences, DELIMITER};

/// Length as counted by the platform: Unicode scalar values, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
