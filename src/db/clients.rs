use crate::db::db::Db;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use serde::{Deserialize, Serialize};

const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    phone TEXT UNIQUE,
    name TEXT,
    email TEXT,
    registration_date TEXT
);";
const INSERT_CLIENT: &str = "INSERT INTO clients (phone, name, email, registration_date) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BY_CREDENTIALS: &str = "SELECT id, phone, name, email, registration_date FROM clients WHERE phone = ?1 AND name = ?2";
const SELECT_BY_PHONE: &str = "SELECT id, phone, name, email, registration_date FROM clients WHERE phone = ?1";

/// A registered pet owner, identified by phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<i64>,
    pub phone: String,
    pub name: String,
    pub email: String,
    pub registration_date: Option<String>,
}

impl Client {
    pub fn new(phone: &str, name: &str, email: &str) -> Self {
        Client {
            id: None,
            phone: phone.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            registration_date: None,
        }
    }
}

#[derive(Debug)]
pub struct Clients {
    conn: Connection,
}

impl Clients {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::portal()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_CLIENTS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new client row.
    ///
    /// Returns `false` when the phone number is already taken (the UNIQUE
    /// constraint fires); the existing row is left untouched. Any other
    /// storage error propagates.
    pub fn register(&mut self, client: &Client) -> Result<bool> {
        let registered_at = Local::now().format("%Y-%m-%d").to_string();
        match self
            .conn
            .execute(INSERT_CLIENT, params![client.phone, client.name, client.email, registered_at])
        {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Looks a client up by the exact (phone, name) pair.
    ///
    /// Both fields must match exactly and case-sensitively; a right phone
    /// with a wrong name is as much a miss as an unknown phone.
    pub fn find_by_credentials(&mut self, phone: &str, name: &str) -> Result<Option<Client>> {
        let client = self
            .conn
            .query_row(SELECT_BY_CREDENTIALS, params![phone, name], Self::map_row)
            .optional()?;
        Ok(client)
    }

    pub fn find_by_phone(&mut self, phone: &str) -> Result<Option<Client>> {
        let client = self.conn.query_row(SELECT_BY_PHONE, params![phone], Self::map_row).optional()?;
        Ok(client)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Client> {
        Ok(Client {
            id: row.get(0)?,
            phone: row.get(1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            registration_date: row.get(4)?,
        })
    }
}
