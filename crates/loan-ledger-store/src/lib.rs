//! # Loan Ledger Store
//!
//! Persistence for users and loans behind the [`RecordStore`] trait, with a
//! SQLite implementation built on an sqlx pool. The pool is owned by the
//! store value and handed to callers explicitly; there is no global handle.
//!
//! ```rust,ignore
//! use loan_ledger_store::{RecordStore, SqliteStore};
//!
//! let store = SqliteStore::connect("sqlite:loan_ledger.db?mode=rwc", 5).await?;
//! let loans = store.list_loans(user_id).await?;
//! ```

pub mod error;
pub mod record_store;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use record_store::RecordStore;
pub use sqlite::{create_pool, run_migrations, SqliteStore, MEMORY_URL};
