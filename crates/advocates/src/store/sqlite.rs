//! SQLite-backed advocate table

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use super::{schema, AdvocateStore, StoreError};
use crate::model::{AdvocateRow, NewAdvocate};

const SELECT_ALL: &str = "SELECT id, first_name, last_name, city, degree, specialties, \
   years_of_experience, phone_number, created_at FROM advocates ORDER BY id";

/// Advocate table in a SQLite database
pub struct SqliteStore {
  conn: Mutex<Connection>,
}

impl SqliteStore {
  /// Open or create the database file, creating parent directories as needed
  pub fn open(path: &Path) -> Result<Self, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }

    info!("Opening SQLite database at {:?}", path);
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

    Self::with_connection(conn)
  }

  /// In-memory database, mostly for tests
  pub fn open_in_memory() -> Result<Self, StoreError> {
    debug!("Opening in-memory SQLite database");
    Self::with_connection(Connection::open_in_memory()?)
  }

  fn with_connection(conn: Connection) -> Result<Self, StoreError> {
    schema::init_schema(&conn)?;
    Ok(Self { conn: Mutex::new(conn) })
  }

  fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
    self.conn.lock().map_err(|_| StoreError::LockPoisoned)
  }

  /// Insert rows in one transaction, returning how many were written
  pub fn insert_many(&self, advocates: &[NewAdvocate]) -> Result<usize, StoreError> {
    let mut conn = self.lock()?;
    let tx = conn.transaction()?;

    {
      let mut stmt = tx.prepare(
        "INSERT INTO advocates \
         (first_name, last_name, city, degree, specialties, years_of_experience, phone_number) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
      )?;

      for advocate in advocates {
        let specialties = serde_json::to_string(&advocate.specialties)
          .map_err(|e| StoreError::Unavailable(format!("Failed to encode specialties: {e}")))?;
        stmt.execute(params![
          advocate.first_name,
          advocate.last_name,
          advocate.city,
          advocate.degree,
          specialties,
          advocate.years_of_experience,
          advocate.phone_number,
        ])?;
      }
    }

    tx.commit()?;
    Ok(advocates.len())
  }

  /// Delete every row
  pub fn clear(&self) -> Result<usize, StoreError> {
    let conn = self.lock()?;
    Ok(conn.execute("DELETE FROM advocates", [])?)
  }

  pub fn count(&self) -> Result<u64, StoreError> {
    let conn = self.lock()?;
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM advocates", [], |row| row.get(0))?;
    Ok(count as u64)
  }

  fn load_all(&self) -> Result<Vec<AdvocateRow>, StoreError> {
    let conn = self.lock()?;
    let mut stmt = conn.prepare(SELECT_ALL)?;
    let raw = stmt.query_map([], RawRow::from_row)?.collect::<Result<Vec<_>, _>>()?;

    raw.into_iter().map(RawRow::decode).collect()
  }
}

#[async_trait]
impl AdvocateStore for SqliteStore {
  async fn all(&self) -> Result<Vec<AdvocateRow>, StoreError> {
    self.load_all()
  }
}

/// Columns as SQLite returns them, before JSON and timestamp decoding
struct RawRow {
  id: i64,
  first_name: String,
  last_name: String,
  city: String,
  degree: String,
  specialties: String,
  years_of_experience: i64,
  phone_number: i64,
  created_at: String,
}

impl RawRow {
  fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
    Ok(Self {
      id: row.get(0)?,
      first_name: row.get(1)?,
      last_name: row.get(2)?,
      city: row.get(3)?,
      degree: row.get(4)?,
      specialties: row.get(5)?,
      years_of_experience: row.get(6)?,
      phone_number: row.get(7)?,
      created_at: row.get(8)?,
    })
  }

  fn decode(self) -> Result<AdvocateRow, StoreError> {
    let specialties: Vec<String> = serde_json::from_str(&self.specialties)
      .map_err(|e| StoreError::CorruptRow { id: self.id, reason: format!("specialties: {e}") })?;
    let created_at = parse_timestamp(&self.created_at)
      .ok_or_else(|| StoreError::CorruptRow { id: self.id, reason: format!("created_at: {}", self.created_at) })?;

    Ok(AdvocateRow {
      id: self.id,
      first_name: self.first_name,
      last_name: self.last_name,
      city: self.city,
      degree: self.degree,
      specialties,
      years_of_experience: self.years_of_experience,
      phone_number: self.phone_number,
      created_at,
    })
  }
}

/// SQLite's CURRENT_TIMESTAMP format, or RFC 3339
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
    .map(|naive| naive.and_utc())
    .ok()
    .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.with_timezone(&Utc)))
}
