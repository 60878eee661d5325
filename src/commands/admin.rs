//! Clinic staff console.
//!
//! Bare `vetdesk admin` runs the numbered menu loop the clinic staff
//! know; each action is also exposed as a direct subcommand so the same
//! operation can be scripted without the menu.

use crate::db::animals::{Animal, Animals};
use crate::db::stats::Stats;
use crate::db::visits::Visits;
use crate::libs::{messages::Message, view::View};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    command: Option<AdminCommand>,
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Register a new animal
    AddAnimal {
        name: String,
        species: String,
        breed: String,
        age: i64,
        owner: String,
        phone: String,
    },
    /// Record a visit for an animal
    AddVisit {
        animal_id: i64,
        diagnosis: String,
        treatment: String,
        cost: f64,
    },
    /// List all registered animals
    Animals,
    /// Show visit history for an animal
    Visits { animal_id: i64 },
    /// Show clinic statistics
    Stats,
}

pub fn cmd(args: AdminArgs) -> Result<()> {
    match args.command {
        Some(AdminCommand::AddAnimal {
            name,
            species,
            breed,
            age,
            owner,
            phone,
        }) => handle_add_animal(&Animal::new(&name, &species, &breed, age, &owner, &phone)),
        Some(AdminCommand::AddVisit {
            animal_id,
            diagnosis,
            treatment,
            cost,
        }) => handle_add_visit(animal_id, &diagnosis, &treatment, cost),
        Some(AdminCommand::Animals) => handle_list_animals(),
        Some(AdminCommand::Visits { animal_id }) => handle_list_visits(animal_id),
        Some(AdminCommand::Stats) => handle_stats(),
        None => handle_interactive(),
    }
}

fn handle_interactive() -> Result<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&[
                "Add an animal",
                "Record a visit",
                "List all animals",
                "Show visit history",
                "Clinic statistics",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let animal = prompt_animal()?;
                handle_add_animal(&animal)?;
            }
            1 => {
                let (animal_id, diagnosis, treatment, cost) = prompt_visit()?;
                handle_add_visit(animal_id, &diagnosis, &treatment, cost)?;
            }
            2 => handle_list_animals()?,
            3 => {
                let animal_id: i64 = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptAnimalId.to_string())
                    .interact_text()?;
                handle_list_visits(animal_id)?;
            }
            4 => handle_stats()?,
            _ => {
                msg_print!(Message::Goodbye);
                break;
            }
        }
    }
    Ok(())
}

fn prompt_animal() -> Result<Animal> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAnimalName.to_string())
        .interact_text()?;
    let species: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAnimalSpecies.to_string())
        .interact_text()?;
    let breed: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAnimalBreed.to_string())
        .allow_empty(true)
        .interact_text()?;
    let age: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAnimalAge.to_string())
        .interact_text()?;
    let owner: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptOwnerName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptOwnerPhone.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(Animal::new(&name, &species, &breed, age, &owner, &phone))
}

fn prompt_visit() -> Result<(i64, String, String, f64)> {
    let animal_id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAnimalId.to_string())
        .interact_text()?;
    let diagnosis: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDiagnosis.to_string())
        .interact_text()?;
    let treatment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTreatment.to_string())
        .interact_text()?;
    let cost: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptVisitCost.to_string())
        .interact_text()?;
    Ok((animal_id, diagnosis, treatment, cost))
}

fn handle_add_animal(animal: &Animal) -> Result<()> {
    Animals::new()?.register(animal)?;
    msg_success!(Message::AnimalRegistered(animal.name.clone()));
    Ok(())
}

fn handle_add_visit(animal_id: i64, diagnosis: &str, treatment: &str, cost: f64) -> Result<()> {
    // No existence check on the animal id: a visit against an unknown id
    // is stored as a dangling soft reference.
    Visits::new()?.record(animal_id, diagnosis, treatment, cost)?;
    msg_success!(Message::VisitRecorded(animal_id));
    Ok(())
}

fn handle_list_animals() -> Result<()> {
    let animals = Animals::new()?.fetch_all()?;
    if animals.is_empty() {
        msg_info!(Message::NoAnimalsFound);
        return Ok(());
    }
    msg_print!(Message::AnimalListHeader, true);
    View::animals(&animals)
}

fn handle_list_visits(animal_id: i64) -> Result<()> {
    let visits = Visits::new()?.fetch_by_animal(animal_id)?;
    if visits.is_empty() {
        msg_info!(Message::NoVisitsFound(animal_id));
        return Ok(());
    }
    msg_print!(Message::VisitListHeader(animal_id), true);
    View::visits(&visits)
}

fn handle_stats() -> Result<()> {
    let stats = Stats::new()?.fetch()?;
    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)
}
