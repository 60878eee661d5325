//! Interactive client portal session.
//!
//! Login screen, then a per-session menu mirroring the portal tabs:
//! pets, appointments, visit history. Every screen re-reads its data
//! from storage after a mutation; nothing is cached across actions
//! beyond the `Session` identity itself.

use crate::db::appointments::{AppointmentStatus, Appointments};
use crate::db::clients::{Client, Clients};
use crate::db::pets::{Pet, Pets};
use crate::db::seed;
use crate::libs::{messages::Message, session::Session, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const SERVICES: [&str; 6] = [
    "Осмотр",
    "Вакцинация",
    "Стерилизация",
    "Чистка зубов",
    "Стрижка",
    "Экстренный прием",
];
const TIME_SLOTS: [&str; 8] = ["09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00"];

pub fn cmd() -> Result<()> {
    seed::run()?;

    loop {
        msg_print!(Message::PortalHeader, true);
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&["Log in", "Register", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                if let Some(session) = login()? {
                    main_screen(&session)?;
                }
            }
            1 => register()?,
            _ => break,
        }
    }
    Ok(())
}

fn login() -> Result<Option<Session>> {
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPhone.to_string())
        .allow_empty(true)
        .interact_text()?;
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .allow_empty(true)
        .interact_text()?;

    if phone.trim().is_empty() || name.trim().is_empty() {
        msg_error!(Message::LoginFieldsRequired);
        return Ok(None);
    }

    // Exact, case-sensitive match on both fields; a wrong name with a
    // right phone is reported the same way as an unknown phone.
    match Clients::new()?.find_by_credentials(&phone, &name)? {
        Some(client) => {
            msg_print!(Message::PortalGreeting(client.name.clone()), true);
            Ok(Some(Session::from(&client)))
        }
        None => {
            msg_error!(Message::ClientNotFound);
            Ok(None)
        }
    }
}

fn register() -> Result<()> {
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPhone.to_string())
        .allow_empty(true)
        .interact_text()?;
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptClientName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .allow_empty(true)
        .interact_text()?;

    if phone.trim().is_empty() || name.trim().is_empty() || email.trim().is_empty() {
        msg_error!(Message::RegistrationFieldsRequired);
        return Ok(());
    }

    if Clients::new()?.register(&Client::new(&phone, &name, &email))? {
        msg_success!(Message::ClientRegistered);
    } else {
        msg_error!(Message::ClientAlreadyExists);
    }
    Ok(())
}

fn main_screen(session: &Session) -> Result<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&["My pets", "Appointments", "Visit history", "Log out"])
            .default(0)
            .interact()?;

        match choice {
            0 => pets_screen(session)?,
            1 => appointments_screen(session)?,
            2 => history_screen()?,
            _ => {
                msg_info!(Message::LoggedOut);
                break;
            }
        }
    }
    Ok(())
}

fn pets_screen(session: &Session) -> Result<()> {
    loop {
        // The roster is re-read from storage on every pass.
        let pets = Pets::new()?.fetch_by_owner(&session.phone)?;
        if pets.is_empty() {
            msg_info!(Message::NoPetsFound);
        } else {
            msg_print!(Message::PetListHeader, true);
            View::pets(&pets)?;
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&["Add a pet", "Delete a pet", "Back"])
            .default(0)
            .interact()?;

        match choice {
            0 => add_pet(session)?,
            1 => delete_pet(&pets)?,
            _ => break,
        }
    }
    Ok(())
}

fn add_pet(session: &Session) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let species: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetSpecies.to_string())
        .allow_empty(true)
        .interact_text()?;
    let breed: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetBreed.to_string())
        .allow_empty(true)
        .interact_text()?;
    let age: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetAge.to_string())
        .interact_text()?;
    let weight: f64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetWeight.to_string())
        .interact_text()?;
    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPetNotes.to_string())
        .allow_empty(true)
        .interact_text()?;

    let pet = Pet::new(&session.phone, &name, &species, &breed, age, weight, &notes);
    if pet.missing_required() {
        // Rejected before any storage call.
        msg_error!(Message::PetFieldsRequired);
        return Ok(());
    }

    Pets::new()?.insert(&pet)?;
    msg_success!(Message::PetAdded(pet.name));
    Ok(())
}

fn delete_pet(pets: &[Pet]) -> Result<()> {
    if pets.is_empty() {
        msg_info!(Message::NoPetsFound);
        return Ok(());
    }

    let labels: Vec<String> = pets.iter().map(|p| format!("{} ({})", p.name, p.species)).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectPet.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    let pet = &pets[choice];

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeletePet(pet.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if let Some(id) = pet.id {
        Pets::new()?.delete(id)?;
        msg_success!(Message::PetDeleted(pet.name.clone()));
    }
    Ok(())
}

fn appointments_screen(session: &Session) -> Result<()> {
    loop {
        let appointments = Appointments::new()?.fetch_by_client(&session.phone)?;
        if appointments.is_empty() {
            msg_info!(Message::NoAppointmentsFound);
        } else {
            msg_print!(Message::AppointmentListHeader, true);
            View::appointments(&appointments)?;
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&["Book an appointment", "Cancel an appointment", "Back"])
            .default(0)
            .interact()?;

        match choice {
            0 => book_appointment(session)?,
            1 => cancel_appointment(session)?,
            _ => break,
        }
    }
    Ok(())
}

fn book_appointment(session: &Session) -> Result<()> {
    let pets = Pets::new()?.fetch_by_owner(&session.phone)?;
    if pets.is_empty() {
        msg_info!(Message::NoPetsForBooking);
        return Ok(());
    }

    let pet_names: Vec<String> = pets.iter().map(|p| p.name.clone()).collect();
    let pet_choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectPet.to_string())
        .items(&pet_names)
        .default(0)
        .interact()?;

    let service_choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptService.to_string())
        .items(&SERVICES)
        .default(0)
        .interact()?;

    let tomorrow = (Local::now() + Duration::days(1)).format("%Y-%m-%d").to_string();
    let date_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAppointmentDate.to_string())
        .default(tomorrow)
        .interact_text()?;
    let date = match NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            msg_error!(Message::InvalidAppointmentDate(date_raw));
            return Ok(());
        }
    };

    let time_choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAppointmentTime.to_string())
        .items(&TIME_SLOTS)
        .default(0)
        .interact()?;

    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAppointmentNotes.to_string())
        .allow_empty(true)
        .interact_text()?;

    Appointments::new()?.book(
        &session.phone,
        &pet_names[pet_choice],
        SERVICES[service_choice],
        date,
        TIME_SLOTS[time_choice],
        &notes,
    )?;
    msg_success!(Message::AppointmentCreated);
    Ok(())
}

fn cancel_appointment(session: &Session) -> Result<()> {
    let appointments = Appointments::new()?.fetch_by_client(&session.phone)?;
    // Only pending appointments are offered for cancellation; confirmed
    // ones have no cancel action at all.
    let pending: Vec<_> = appointments
        .into_iter()
        .filter(|a| a.status == AppointmentStatus::Pending)
        .collect();
    if pending.is_empty() {
        msg_info!(Message::NoPendingAppointments);
        return Ok(());
    }

    let labels: Vec<String> = pending
        .iter()
        .map(|a| format!("{} — {} {} ({})", a.animal_name, a.date.format("%Y-%m-%d"), a.time, a.service_type))
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectAppointment.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmCancelAppointment.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if let Some(id) = pending[choice].id {
        if Appointments::new()?.cancel(id)? {
            msg_success!(Message::AppointmentCancelled);
        } else {
            msg_error!(Message::AppointmentNotCancellable);
        }
    }
    Ok(())
}

fn history_screen() -> Result<()> {
    msg_print!(Message::HistoryHeader, true);
    View::history()
}
