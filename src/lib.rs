//! # Vetdesk - Veterinary clinic record keeper
//!
//! A command-line toolset for a small veterinary clinic, split into two
//! independent applications over two independent SQLite stores:
//!
//! - **Client portal** (`vetdesk portal`): pet owners log in by phone and
//!   name, manage their pet roster, book and cancel appointments, and
//!   view visit history.
//! - **Staff console** (`vetdesk admin`): clinic staff register animals,
//!   record visits, and review aggregate statistics.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vetdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
