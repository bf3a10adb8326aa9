// Questions Core - Records, Ports & Query Services
// NO infrastructure dependencies (hexagonal: adapters live in sibling crates)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
