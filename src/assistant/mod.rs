pub mod classifier;
mod failure;
pub mod flow;
pub mod prompt;
mod responder;
pub mod responses;
mod types;

pub use classifier::{TopicClassifier, TopicRule};
pub use flow::{ChatEvent, ChatFlow, ChatState};
pub use responder::{MAX_MESSAGE_CHARS, MIN_REPLY_CHARS, Responder, judge_completion};
pub use types::*;
