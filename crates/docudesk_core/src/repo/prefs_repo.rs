//! Preference key/value repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the two demo preference keys: session flag and user events.
//! - Keep values as opaque text; serialization belongs to the services.
//!
//! # Invariants
//! - `set` replaces the previous value for a key atomically.
//! - Reads of absent keys return `None`, not an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key/value access contract for demo preferences.
pub trait PrefsRepository {
    /// Reads one value; `None` when the key was never written.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Writes one value, replacing any previous value for the key.
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePrefsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePrefsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PrefsRepository for SqlitePrefsRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
