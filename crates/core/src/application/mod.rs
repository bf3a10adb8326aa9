// Application Layer - Query use cases

pub mod query;
pub mod thread;

// Re-exports
pub use query::QueryService;
pub use thread::QuestionThread;
