// Questions Infrastructure - SQLite Adapter
// Implements: UserRepository, QuestionRepository, ReplyRepository, AssociationRepository

mod association;
mod connection;
mod error;
#[cfg(test)]
mod fixtures;
mod migration;
mod rows;
mod store;

pub use connection::{create_pool, StoreConfig};
pub use migration::run_migrations;
pub use store::SqliteStore;

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
