//! SQLite-backed credential table
//!
//! One row per username holding the encoded strip sequence. Registration
//! is an upsert: a second registration for the same username replaces the
//! first credential in a single statement.

use crate::io::error::{AuthError, Result, invalid_input, storage_error};
use crate::spatial::strip::Strip;
use crate::storage::codec::{decode_strips, encode_strips};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use tracing::debug;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password_segments BLOB NOT NULL
)";

/// Persistent mapping from username to registered strips
pub struct CredentialStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl CredentialStore {
    /// Open (or create) the credential database at `path`
    ///
    /// Missing parent directories are created and the credential table is
    /// created if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// database cannot be opened, or the table cannot be created
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AuthError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let conn = Connection::open(path).map_err(|e| storage_error("open database", e))?;
        debug!(path = %path.display(), "opened credential store");
        Self::initialize(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory credential database
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate the database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| storage_error("open database", e))?;
        Self::initialize(conn, None)
    }

    fn initialize(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| storage_error("create table", e))?;
        Ok(Self { conn, path })
    }

    /// Database file backing this store, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Store `strips` for `username`, replacing any existing credential
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `username` is blank
    /// - `strips` is empty or its strips differ in shape
    /// - Encoding or the database write fails
    pub fn put(&self, username: &str, strips: &[Strip]) -> Result<()> {
        validate_username(username)?;

        let first = strips
            .first()
            .ok_or_else(|| invalid_input("strips", &0, &"at least one strip is required"))?;
        if let Some((index, odd)) = strips
            .iter()
            .enumerate()
            .find(|(_, strip)| strip.shape() != first.shape())
        {
            return Err(invalid_input(
                "strips",
                &index,
                &format!(
                    "strip shape {:?} differs from first strip {:?}",
                    odd.shape(),
                    first.shape()
                ),
            ));
        }

        let blob = encode_strips(strips)?;
        self.conn
            .execute(
                "INSERT OR REPLACE INTO users (username, password_segments) VALUES (?1, ?2)",
                params![username, blob],
            )
            .map_err(|e| storage_error("store credential", e))?;

        debug!(username, strips = strips.len(), bytes = blob.len(), "stored credential");
        Ok(())
    }

    /// Fetch the strips registered for `username`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `username` is blank
    /// - No credential exists for `username`
    /// - The database read fails or the stored blob is corrupt
    pub fn get(&self, username: &str) -> Result<Vec<Strip>> {
        validate_username(username)?;

        let blob: Option<Vec<u8>> = self
            .conn
            .query_row(
                "SELECT password_segments FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| storage_error("load credential", e))?;

        let blob = blob.ok_or_else(|| AuthError::NotFound {
            username: username.to_string(),
        })?;

        decode_strips(&blob)
    }

    /// True when a credential exists for `username`
    ///
    /// # Errors
    ///
    /// Returns an error if the database read fails
    pub fn contains(&self, username: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)",
                params![username],
                |row| row.get(0),
            )
            .map_err(|e| storage_error("check credential", e))
    }
}

/// Reject usernames that are empty or only whitespace
///
/// # Errors
///
/// Returns an error if `username` is blank
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(invalid_input(
            "username",
            &username,
            &"a username is required",
        ));
    }
    Ok(())
}
