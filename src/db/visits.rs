use crate::db::db::Db;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

pub(crate) const SCHEMA_VISITS: &str = "CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    animal_id INTEGER,
    visit_date TEXT,
    diagnosis TEXT,
    treatment TEXT,
    cost REAL
);";
const INSERT_VISIT: &str = "INSERT INTO visits (animal_id, visit_date, diagnosis, treatment, cost)
    VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_BY_ANIMAL: &str = "SELECT id, animal_id, visit_date, diagnosis, treatment, cost
    FROM visits WHERE animal_id = ?1 ORDER BY visit_date DESC";

/// A completed clinical encounter recorded by staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<i64>,
    pub animal_id: i64,
    pub visit_date: Option<String>,
    pub diagnosis: String,
    pub treatment: String,
    pub cost: f64,
}

pub struct Visits {
    conn: Connection,
}

impl Visits {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::clinic()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_VISITS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Records a visit against an animal id, stamped with the current time.
    ///
    /// The id is a soft reference: no existence check is made, and a
    /// visit against an unknown animal is stored without complaint.
    pub fn record(&mut self, animal_id: i64, diagnosis: &str, treatment: &str, cost: f64) -> Result<i64> {
        self.insert(&Visit {
            id: None,
            animal_id,
            visit_date: None,
            diagnosis: diagnosis.to_string(),
            treatment: treatment.to_string(),
            cost,
        })
    }

    /// Inserts a full visit row. A missing `visit_date` defaults to now.
    pub fn insert(&mut self, visit: &Visit) -> Result<i64> {
        let visited_at = match &visit.visit_date {
            Some(date) => date.clone(),
            None => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        self.conn.execute(
            INSERT_VISIT,
            params![visit.animal_id, visited_at, visit.diagnosis, visit.treatment, visit.cost],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_by_animal(&mut self, animal_id: i64) -> Result<Vec<Visit>> {
        let mut stmt = self.conn.prepare(SELECT_BY_ANIMAL)?;
        let visit_iter = stmt.query_map(params![animal_id], |row| {
            Ok(Visit {
                id: row.get(0)?,
                animal_id: row.get(1)?,
                visit_date: row.get(2)?,
                diagnosis: row.get(3)?,
                treatment: row.get(4)?,
                cost: row.get(5)?,
            })
        })?;
        let mut visits = Vec::new();
        for visit in visit_iter {
            visits.push(visit?);
        }
        Ok(visits)
    }
}
