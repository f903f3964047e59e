//! `advocates` table schema

use rusqlite::Connection;
use tracing::info;

use super::StoreError;

/// Current schema version for migrations
pub const SCHEMA_VERSION: i32 = 1;

const ADVOCATES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS advocates (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  first_name TEXT NOT NULL,
  last_name TEXT NOT NULL,
  city TEXT NOT NULL,
  degree TEXT NOT NULL,
  specialties TEXT NOT NULL DEFAULT '[]',
  years_of_experience INTEGER NOT NULL,
  phone_number INTEGER NOT NULL,
  created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Create or migrate the schema
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
  let current_version = get_schema_version(conn)?;

  if current_version == 0 {
    info!("Creating advocates schema v{}", SCHEMA_VERSION);
    conn.execute_batch(ADVOCATES_SCHEMA)?;
    set_schema_version(conn, SCHEMA_VERSION)?;
  } else if current_version > SCHEMA_VERSION {
    return Err(StoreError::Unavailable(format!(
      "database schema v{current_version} is newer than supported v{SCHEMA_VERSION}"
    )));
  }

  Ok(())
}

/// Current schema version, 0 if the database is new
fn get_schema_version(conn: &Connection) -> Result<i32, StoreError> {
  conn.execute("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)", [])?;

  let version = match conn.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0)) {
    Ok(version) => version,
    Err(rusqlite::Error::QueryReturnedNoRows) => 0,
    Err(e) => return Err(e.into()),
  };

  Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), StoreError> {
  conn.execute("DELETE FROM schema_version", [])?;
  conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
  Ok(())
}
