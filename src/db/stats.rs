use crate::db::animals::SCHEMA_ANIMALS;
use crate::db::db::Db;
use crate::db::visits::SCHEMA_VISITS;
use anyhow::Result;
use rusqlite::Connection;

const COUNT_ANIMALS: &str = "SELECT COUNT(*) FROM animals";
const COUNT_BY_SPECIES: &str = "SELECT species, COUNT(*) FROM animals GROUP BY species ORDER BY species";
const COUNT_VISITS: &str = "SELECT COUNT(*) FROM visits";
const SUM_INCOME: &str = "SELECT COALESCE(SUM(cost), 0) FROM visits";

/// A point-in-time aggregate over the whole clinic store.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicStats {
    pub total_animals: i64,
    pub species_count: Vec<(String, i64)>,
    pub total_visits: i64,
    pub total_income: f64,
}

/// Read-only statistics over the clinic database.
///
/// Recomputed from storage on every call; nothing is cached. With no
/// visits at all the income comes back as 0.0, never as null.
pub struct Stats {
    conn: Connection,
}

impl Stats {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::clinic()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_ANIMALS, [])?;
        db.conn.execute(SCHEMA_VISITS, [])?;
        Ok(Self { conn: db.conn })
    }

    pub fn fetch(&mut self) -> Result<ClinicStats> {
        let total_animals: i64 = self.conn.query_row(COUNT_ANIMALS, [], |row| row.get(0))?;
        let total_visits: i64 = self.conn.query_row(COUNT_VISITS, [], |row| row.get(0))?;
        let total_income: f64 = self.conn.query_row(SUM_INCOME, [], |row| row.get(0))?;

        let mut stmt = self.conn.prepare(COUNT_BY_SPECIES)?;
        let species_iter = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
        let mut species_count = Vec::new();
        for entry in species_iter {
            species_count.push(entry?);
        }

        Ok(ClinicStats {
            total_animals,
            species_count,
            total_visits,
            total_income,
        })
    }
}
