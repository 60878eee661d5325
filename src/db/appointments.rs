use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Stored status value for a pending appointment, kept in the original
/// data format of the clinic records.
pub const STATUS_PENDING: &str = "Ожидание";
/// Stored status value for an appointment confirmed by the clinic.
pub const STATUS_CONFIRMED: &str = "Подтвержден";
/// Sentinel for an appointment that no doctor has been assigned to.
pub const DOCTOR_UNASSIGNED: &str = "Не назначен";

const SCHEMA_APPOINTMENTS: &str = "CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_phone TEXT,
    animal_name TEXT,
    service_type TEXT,
    appointment_date TEXT,
    appointment_time TEXT,
    status TEXT,
    doctor TEXT,
    notes TEXT
);";
const INSERT_APPOINTMENT: &str = "INSERT INTO appointments
    (client_phone, animal_name, service_type, appointment_date, appointment_time, status, doctor, notes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_BY_CLIENT: &str = "SELECT id, client_phone, animal_name, service_type, appointment_date, appointment_time, status, doctor, notes
    FROM appointments WHERE client_phone = ?1 ORDER BY appointment_date DESC";
const DELETE_PENDING: &str = "DELETE FROM appointments WHERE id = ?1 AND status = ?2";

/// Appointment confirmation state.
///
/// No operation in either tool ever sets `Confirmed` or assigns a doctor;
/// confirmed rows exist only through seeding. An unknown or absent stored
/// value reads back as not confirmed, i.e. `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => STATUS_PENDING,
            AppointmentStatus::Confirmed => STATUS_CONFIRMED,
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(value: &str) -> Self {
        if value == STATUS_CONFIRMED {
            AppointmentStatus::Confirmed
        } else {
            AppointmentStatus::Pending
        }
    }
}

/// A client-initiated request to bring an animal in for a service.
///
/// The animal is referenced by NAME, not id: renaming or deleting a pet
/// leaves its appointments behind as soft references.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: Option<i64>,
    pub client_phone: String,
    pub animal_name: String,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub doctor: String,
    pub notes: String,
}

pub struct Appointments {
    conn: Connection,
}

impl Appointments {
    pub fn new() -> Result<Self> {
        Self::with_db(Db::portal()?)
    }

    pub fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_APPOINTMENTS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Creates a client-initiated appointment.
    ///
    /// Status and doctor are not parameters: a booked appointment always
    /// starts out pending and unassigned, whatever the caller supplies in
    /// the form.
    pub fn book(&mut self, phone: &str, animal_name: &str, service: &str, date: NaiveDate, time: &str, notes: &str) -> Result<i64> {
        self.conn.execute(
            INSERT_APPOINTMENT,
            params![
                phone,
                animal_name,
                service,
                date.format("%Y-%m-%d").to_string(),
                time,
                STATUS_PENDING,
                DOCTOR_UNASSIGNED,
                notes
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts a full appointment row, status and doctor included.
    /// Only the demo seed uses this; it is the sole source of confirmed
    /// appointments in the system.
    pub fn insert(&mut self, appointment: &Appointment) -> Result<i64> {
        self.conn.execute(
            INSERT_APPOINTMENT,
            params![
                appointment.client_phone,
                appointment.animal_name,
                appointment.service_type,
                appointment.date.format("%Y-%m-%d").to_string(),
                appointment.time,
                appointment.status.as_str(),
                appointment.doctor,
                appointment.notes
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All appointments for one client, newest date first.
    ///
    /// Dates are stored as fixed-width ISO strings, so the SQL string
    /// ordering coincides with chronological ordering.
    pub fn fetch_by_client(&mut self, phone: &str) -> Result<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(SELECT_BY_CLIENT)?;
        let appt_iter = stmt.query_map(params![phone], |row| {
            Ok(Appointment {
                id: row.get(0)?,
                client_phone: row.get(1)?,
                animal_name: row.get(2)?,
                service_type: row.get(3)?,
                date: row.get(4)?,
                time: row.get(5)?,
                status: AppointmentStatus::from(row.get::<_, String>(6)?.as_str()),
                doctor: row.get(7)?,
                notes: row.get(8)?,
            })
        })?;
        let mut appointments = Vec::new();
        for appointment in appt_iter {
            appointments.push(appointment?);
        }
        Ok(appointments)
    }

    /// Cancels (deletes) an appointment while it is still pending.
    ///
    /// Returns `false` when nothing was deleted, i.e. the id does not
    /// exist or the appointment has already been confirmed. Confirmed
    /// appointments cannot be cancelled from the portal.
    pub fn cancel(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_PENDING, params![id, STATUS_PENDING])?;
        Ok(affected > 0)
    }
}
