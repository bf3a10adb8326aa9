// Port Layer - Interfaces for the relational store

pub mod association_repository;
pub mod question_repository;
pub mod reply_repository;
pub mod store;
pub mod user_repository;

// Re-exports
pub use association_repository::AssociationRepository;
pub use question_repository::QuestionRepository;
pub use reply_repository::ReplyRepository;
pub use store::QuestionStore;
pub use user_repository::UserRepository;
