pub mod event;
pub mod thread;

pub use event::{Author, PostId, SourceEvent};
pub use thread::{PostedSegment, ReplyChain};
