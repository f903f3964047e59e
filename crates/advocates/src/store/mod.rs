//! Backing stores for advocate rows
//!
//! The endpoint only ever needs one operation, "give me every row", so the
//! trait stays that small. `SqliteStore` is the real table; `SeedStore`
//! serves the built-in seed collection when no database is available.

pub mod schema;
pub mod seed;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::AdvocateRow;

pub use seed::SeedStore;
pub use sqlite::SqliteStore;

#[derive(Error, Debug)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Corrupt advocate row {id}: {reason}")]
  CorruptRow { id: i64, reason: String },

  #[error("Store connection lock poisoned")]
  LockPoisoned,

  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// Source of advocate rows for the data endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateStore: Send + Sync {
  /// Every row of the table, in insertion order
  async fn all(&self) -> Result<Vec<AdvocateRow>, StoreError>;
}
