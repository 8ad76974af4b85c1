//! Person store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist validated names and assign record identifiers.
//! - Return every durable record in insertion order.
//!
//! # Invariants
//! - `insert` is atomic: a record is either fully committed or absent.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Nothing is retried internally; retry policy belongs to callers.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::person::{Person, PersonId, PersonName};
use log::{error, info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Flat failure classification shared by store and repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StoreUnavailable,
    StoreClosed,
    ReadFailed,
    WriteFailed,
    ValidationFailed,
}

/// Store-level failure, tagged by the operation that failed.
#[derive(Debug)]
pub enum StoreError {
    /// Backing medium could not be opened, created or migrated.
    Unavailable(DbError),
    ReadFailed(DbError),
    /// Insert did not commit; no partial record exists.
    WriteFailed(DbError),
    Closed,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unavailable(_) => ErrorKind::StoreUnavailable,
            Self::ReadFailed(_) => ErrorKind::ReadFailed,
            Self::WriteFailed(_) => ErrorKind::WriteFailed,
            Self::Closed => ErrorKind::StoreClosed,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "store unavailable: {err}"),
            Self::ReadFailed(err) => write!(f, "store read failed: {err}"),
            Self::WriteFailed(err) => write!(f, "store write failed: {err}"),
            Self::Closed => write!(f, "store is closed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) | Self::ReadFailed(err) | Self::WriteFailed(err) => Some(err),
            Self::Closed => None,
        }
    }
}

/// Durable store for people records.
pub trait PersonStore {
    /// Persists a new record and returns its store-unique identifier.
    fn insert(&mut self, name: &PersonName) -> StoreResult<PersonId>;
    /// Returns every durable record in insertion order.
    fn fetch_all(&self) -> StoreResult<Vec<Person>>;
    /// Releases the backing medium. Calling it more than once is a no-op.
    fn close(&mut self);
    fn is_closed(&self) -> bool;
}

/// SQLite-backed person store owning a single connection.
pub struct SqlitePersonStore {
    conn: Option<Connection>,
}

impl SqlitePersonStore {
    /// Opens the database at `path`, creating it when absent.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path).map_err(StoreError::Unavailable)?;
        Ok(Self { conn: Some(conn) })
    }

    /// Opens a private in-memory database that lives until `close`.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory().map_err(StoreError::Unavailable)?;
        Ok(Self { conn: Some(conn) })
    }
}

impl PersonStore for SqlitePersonStore {
    fn insert(&mut self, name: &PersonName) -> StoreResult<PersonId> {
        let Some(conn) = self.conn.as_mut() else {
            warn!("event=person_insert module=store status=error error_code=store_closed");
            return Err(StoreError::Closed);
        };

        let started_at = Instant::now();
        let id = Uuid::new_v4();
        match insert_row(conn, id, name) {
            Ok(()) => {
                info!(
                    "event=person_insert module=store status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=person_insert module=store status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::WriteFailed(err))
            }
        }
    }

    fn fetch_all(&self) -> StoreResult<Vec<Person>> {
        let Some(conn) = self.conn.as_ref() else {
            warn!("event=person_fetch_all module=store status=error error_code=store_closed");
            return Err(StoreError::Closed);
        };

        let started_at = Instant::now();
        match select_all(conn) {
            Ok(people) => {
                info!(
                    "event=person_fetch_all module=store status=ok count={} duration_ms={}",
                    people.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(people)
            }
            Err(err) => {
                error!(
                    "event=person_fetch_all module=store status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::ReadFailed(err))
            }
        }
    }

    fn close(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };
        // Connection is dropped either way.
        match conn.close() {
            Ok(()) => info!("event=store_close module=store status=ok"),
            Err((_conn, err)) => warn!(
                "event=store_close module=store status=error error_code=close_failed error={}",
                err
            ),
        }
    }

    fn is_closed(&self) -> bool {
        self.conn.is_none()
    }
}

fn insert_row(conn: &mut Connection, id: PersonId, name: &PersonName) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO people (uuid, name) VALUES (?1, ?2);",
        params![id.to_string(), name.as_str()],
    )?;
    tx.commit()?;
    Ok(())
}

fn select_all(conn: &Connection) -> DbResult<Vec<Person>> {
    let mut stmt = conn.prepare("SELECT uuid, name FROM people ORDER BY seq ASC;")?;
    let mut rows = stmt.query([])?;
    let mut people = Vec::new();

    while let Some(row) = rows.next()? {
        people.push(parse_person_row(row)?);
    }

    Ok(people)
}

fn parse_person_row(row: &Row<'_>) -> DbResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        DbError::InvalidData(format!("invalid uuid value `{uuid_text}` in people.uuid"))
    })?;

    let name_text: String = row.get("name")?;
    let name = PersonName::parse(&name_text).map_err(|_| {
        DbError::InvalidData(format!("blank name for person `{id}` in people.name"))
    })?;

    Ok(Person::new(id, name))
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, PersonStore, SqlitePersonStore, StoreError};
    use crate::model::person::PersonName;

    #[test]
    fn error_kinds_map_one_to_one() {
        assert_eq!(StoreError::Closed.kind(), ErrorKind::StoreClosed);
        assert_eq!(
            StoreError::ReadFailed(crate::db::DbError::InvalidData("x".into())).kind(),
            ErrorKind::ReadFailed
        );
    }

    #[test]
    fn stored_name_is_the_trimmed_form() {
        let mut store = SqlitePersonStore::open_in_memory().unwrap();
        let id = store.insert(&PersonName::parse("  Ada ").unwrap()).unwrap();

        let people = store.fetch_all().unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, id);
        assert_eq!(people[0].name.as_str(), "Ada");
    }
}
