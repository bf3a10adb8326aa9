// Domain Layer - Read-only records of the Q&A store

pub mod association;
pub mod question;
pub mod reply;
pub mod user;

// Re-exports
pub use association::Association;
pub use question::{Question, QuestionId};
pub use reply::{Reply, ReplyId};
pub use user::{User, UserId};
