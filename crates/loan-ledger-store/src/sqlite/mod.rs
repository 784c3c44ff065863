//! SQLite persistence module

pub mod repos;
pub mod schema;

pub use repos::{create_pool, run_migrations, SqliteStore, MEMORY_URL};
pub use schema::{LoanRow, UserRow};
