pub mod admin;
pub mod portal;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Client portal: pets, appointments, visit history")]
    Portal,
    #[command(about = "Clinic staff console: animals, visits, statistics")]
    Admin(admin::AdminArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Portal => portal::cmd(),
            Commands::Admin(args) => admin::cmd(args),
        }
    }
}
