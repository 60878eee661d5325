use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_CLIENT_ANIMALS: &str = "CREATE TABLE IF NOT EXISTS client_animals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_phone TEXT,
    name TEXT,
    species TEXT,
    breed TEXT,
    age INTEGER,
    weight REAL,
    special_notes TEXT
);";
const INSERT_PET: &str = "INSERT INTO client_animals (client_phone, name, species, breed, age, weight, special_notes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_BY_OWNER: &str = "SELECT id, client_phone, name, species, breed, age, weight, special_notes
    FROM client_animals WHERE client_phone = ?1";
const DELETE_PET: &str = "DELETE FROM client_animals WHERE id = ?1";

/// A pet owned by a portal client.
///
/// Ownership is by phone reference; there is no uniqueness on the name,
/// so one owner may register two pets called the same thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<i64>,
    pub client_phone: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i64,
    pub weight: f64,
    pub notes: String,
}

impl Pet {
    pub fn new(client_phone: &str, name: &str, species: &str, breed: &str, age: i64, weight: f64, notes: &str) -> Self {
        Pet {
            id: None,
            client_phone: client_phone.to_string(),
            name: name.to_string(),
            species: species.to_string(),
            breed: breed.to_string(),
            age,
            weight,
            notes: notes.to_string(),
        }
    }

    /// True when a required text field is empty. Notes are optional;
    /// everything else must be filled in before the record may be stored.
    pub fn missing_required(&self) -> bool {
        self.name.trim().is_empty() || self.species.trim().is_empty() || self.breed.trim().is_empty()
    }
}

pub struct Pets {
    conn: Connection,
}

impl Pets {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::portal()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_CLIENT_ANIMALS, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, pet: &Pet) -> Result<i64> {
        self.conn.execute(
            INSERT_PET,
            params![pet.client_phone, pet.name, pet.species, pet.breed, pet.age, pet.weight, pet.notes],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_by_owner(&mut self, phone: &str) -> Result<Vec<Pet>> {
        let mut stmt = self.conn.prepare(SELECT_BY_OWNER)?;
        let pet_iter = stmt.query_map(params![phone], |row| {
            Ok(Pet {
                id: row.get(0)?,
                client_phone: row.get(1)?,
                name: row.get(2)?,
                species: row.get(3)?,
                breed: row.get(4)?,
                age: row.get(5)?,
                weight: row.get(6)?,
                notes: row.get(7)?,
            })
        })?;
        let mut pets = Vec::new();
        for pet in pet_iter {
            pets.push(pet?);
        }
        Ok(pets)
    }

    /// Deletes exactly the row with the given id.
    ///
    /// Appointments reference pets by name, not id, so they survive the
    /// delete as dangling soft references. That is the documented
    /// behavior, not an oversight to fix here.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_PET, params![id])?;
        Ok(())
    }
}
