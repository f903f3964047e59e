//! Server configuration
//!
//! Every flag can also come from the environment so the server can run in a
//! container without a command line.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use crate::store::{seed::seed_advocates, AdvocateStore, SeedStore, SqliteStore};

#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
  /// Server bind address
  #[arg(long, env = "ADVOCATES_BIND", default_value = "127.0.0.1:3000")]
  pub bind: SocketAddr,

  /// SQLite database file [default: ~/.advocates/advocates.db]
  #[arg(long, env = "ADVOCATES_DATABASE")]
  pub database: Option<PathBuf>,

  /// Serve the built-in seed data instead of opening a database
  #[arg(long, conflicts_with = "database")]
  pub seed_data: bool,

  /// Populate the database with seed data if the table is empty
  #[arg(long)]
  pub seed_if_empty: bool,
}

impl ServerConfig {
  pub fn database_path(&self) -> PathBuf {
    self.database.clone().unwrap_or_else(default_database_path)
  }

  /// Build the store this configuration asks for
  pub fn open_store(&self) -> Result<Arc<dyn AdvocateStore>> {
    if self.seed_data {
      warn!("Serving built-in seed data; no database will be read");
      return Ok(Arc::new(SeedStore::new()));
    }

    let path = self.database_path();
    let store = SqliteStore::open(&path).with_context(|| format!("Failed to open database at {}", path.display()))?;

    if self.seed_if_empty && store.count()? == 0 {
      let written = store.insert_many(&seed_advocates())?;
      info!("Seeded empty database with {written} advocates");
    }

    Ok(Arc::new(store))
  }
}

/// `~/.advocates/advocates.db`, falling back to /tmp without a home directory
pub fn default_database_path() -> PathBuf {
  dirs::home_dir().unwrap_or_else(|| Path::new("/tmp").to_path_buf()).join(".advocates").join("advocates.db")
}
