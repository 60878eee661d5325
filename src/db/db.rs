use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const PORTAL_DB_FILE_NAME: &str = "portal.db";
pub const CLINIC_DB_FILE_NAME: &str = "clinic.db";

/// A single SQLite connection to one of the two database files.
///
/// The portal and the staff console keep entirely separate stores; they
/// share nothing but the application data directory. Every repository
/// opens a fresh connection and closes it when dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the client portal database (clients, pets, appointments).
    pub fn portal() -> Result<Db> {
        Self::open_default(PORTAL_DB_FILE_NAME)
    }

    /// Opens the clinic staff database (animals, visits).
    pub fn clinic() -> Result<Db> {
        Self::open_default(CLINIC_DB_FILE_NAME)
    }

    /// Opens a database at an explicit path. Used by tests to pin a
    /// per-test file instead of the shared application directory.
    pub fn at<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    fn open_default(file_name: &str) -> Result<Db> {
        let db_file_path = DataStorage::new()
            .get_path(file_name)
            .map_err(|e| msg_error_anyhow!(Message::StoragePathFailed(e.to_string())))?;
        Self::at(db_file_path)
    }
}
