//! Database layer for the vetdesk application.
//!
//! Two separate SQLite files back the two tools: the client portal
//! (clients, client pets, appointments) and the staff console (animals,
//! visits). Each table gets its own repository struct that opens a fresh
//! connection and ensures its schema with `CREATE TABLE IF NOT EXISTS` —
//! that is the whole startup contract, there is no migration system.

/// Core database connection handling for both store files.
pub mod db;

/// Portal client accounts, looked up by phone number.
pub mod clients;

/// Pets registered by portal clients.
pub mod pets;

/// Client-initiated appointment requests.
pub mod appointments;

/// Clinic animal intake register.
pub mod animals;

/// Clinical visit records.
pub mod visits;

/// Aggregate clinic statistics.
pub mod stats;

/// Idempotent demo data for the portal.
pub mod seed;
