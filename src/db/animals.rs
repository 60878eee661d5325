use crate::db::db::Db;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

pub(crate) const SCHEMA_ANIMALS: &str = "CREATE TABLE IF NOT EXISTS animals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    species TEXT NOT NULL,
    breed TEXT,
    age INTEGER,
    owner_name TEXT,
    phone TEXT,
    registration_date TEXT
);";
const INSERT_ANIMAL: &str = "INSERT INTO animals (name, species, breed, age, owner_name, phone, registration_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ALL: &str = "SELECT id, name, species, breed, age, owner_name, phone, registration_date FROM animals";

/// An animal on the clinic's intake register.
///
/// Owner name and phone are free text; they are not linked to the portal
/// client records in any way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: Option<i64>,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i64,
    pub owner_name: String,
    pub phone: String,
    pub registration_date: Option<String>,
}

impl Animal {
    pub fn new(name: &str, species: &str, breed: &str, age: i64, owner_name: &str, phone: &str) -> Self {
        Animal {
            id: None,
            name: name.to_string(),
            species: species.to_string(),
            breed: breed.to_string(),
            age,
            owner_name: owner_name.to_string(),
            phone: phone.to_string(),
            registration_date: None,
        }
    }
}

pub struct Animals {
    conn: Connection,
}

impl Animals {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::clinic()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_ANIMALS, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn register(&mut self, animal: &Animal) -> Result<i64> {
        let registered_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(
            INSERT_ANIMAL,
            params![
                animal.name,
                animal.species,
                animal.breed,
                animal.age,
                animal.owner_name,
                animal.phone,
                registered_at
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Animal>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let animal_iter = stmt.query_map([], |row| {
            Ok(Animal {
                id: row.get(0)?,
                name: row.get(1)?,
                species: row.get(2)?,
                breed: row.get(3)?,
                age: row.get(4)?,
                owner_name: row.get(5)?,
                phone: row.get(6)?,
                registration_date: row.get(7)?,
            })
        })?;
        let mut animals = Vec::new();
        for animal in animal_iter {
            animals.push(animal?);
        }
        Ok(animals)
    }
}
