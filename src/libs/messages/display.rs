//! Display implementation for vetdesk application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the console. All user-facing wording lives here, in one place, so
//! command code never carries inline strings.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === PORTAL SCREENS ===
            Message::PortalHeader => "🐾 Vet clinic \"Drug\" — client portal".to_string(),
            Message::PortalGreeting(name) => format!("Welcome, {}!", name),
            Message::LoggedOut => "You have been logged out".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::ClientNotFound => "Client not found. Check the phone number and name".to_string(),
            Message::ClientAlreadyExists => "A client with this phone number already exists".to_string(),
            Message::ClientRegistered => "Registration complete! You can now log in".to_string(),
            Message::LoginFieldsRequired => "Enter both phone number and name".to_string(),
            Message::RegistrationFieldsRequired => "Fill in all registration fields".to_string(),

            // === PET MESSAGES ===
            Message::PetAdded(name) => format!("Pet '{}' added", name),
            Message::PetDeleted(name) => format!("Pet '{}' deleted", name),
            Message::PetFieldsRequired => "Fill in all required pet fields".to_string(),
            Message::NoPetsFound => "You have no registered pets yet".to_string(),
            Message::PetListHeader => "🐾 Your pets".to_string(),
            Message::ConfirmDeletePet(name) => format!("Delete pet '{}'?", name),

            // === APPOINTMENT MESSAGES ===
            Message::AppointmentCreated => "Appointment created! Wait for confirmation from the clinic".to_string(),
            Message::AppointmentCancelled => "Appointment cancelled".to_string(),
            Message::AppointmentNotCancellable => "Only pending appointments can be cancelled".to_string(),
            Message::NoAppointmentsFound => "You have no appointments yet".to_string(),
            Message::NoPendingAppointments => "You have no pending appointments".to_string(),
            Message::NoPetsForBooking => "Add a pet before booking an appointment".to_string(),
            Message::AppointmentListHeader => "📅 Your appointments".to_string(),
            Message::InvalidAppointmentDate(raw) => format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw),
            Message::ConfirmCancelAppointment => "Cancel this appointment?".to_string(),

            // === VISIT HISTORY MESSAGES ===
            Message::HistoryHeader => "📋 Visit history and medical records".to_string(),

            // === ADMIN MESSAGES ===
            Message::AnimalRegistered(name) => format!("Animal '{}' registered", name),
            Message::AnimalListHeader => "🏥 Registered animals".to_string(),
            Message::NoAnimalsFound => "No animals registered yet".to_string(),
            Message::VisitRecorded(id) => format!("Visit recorded for animal ID {}", id),
            Message::VisitListHeader(id) => format!("Visit history for animal ID {}", id),
            Message::NoVisitsFound(id) => format!("No visits recorded for animal ID {}", id),
            Message::StatsHeader => "📊 Clinic statistics".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoragePathFailed(cause) => format!("Failed to resolve storage path: {}", cause),

            // === PROMPTS ===
            Message::PromptPhone => "Phone number".to_string(),
            Message::PromptClientName => "Name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPetName => "Pet name".to_string(),
            Message::PromptPetSpecies => "Species".to_string(),
            Message::PromptPetBreed => "Breed".to_string(),
            Message::PromptPetAge => "Age (years)".to_string(),
            Message::PromptPetWeight => "Weight (kg)".to_string(),
            Message::PromptPetNotes => "Special notes (optional)".to_string(),
            Message::PromptSelectPet => "Select a pet".to_string(),
            Message::PromptService => "Service".to_string(),
            Message::PromptAppointmentDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptAppointmentTime => "Time".to_string(),
            Message::PromptAppointmentNotes => "Notes (optional)".to_string(),
            Message::PromptSelectAppointment => "Select an appointment".to_string(),
            Message::PromptMenuChoice => "Choose an action".to_string(),
            Message::PromptAnimalName => "Animal name".to_string(),
            Message::PromptAnimalSpecies => "Species (dog, cat, etc.)".to_string(),
            Message::PromptAnimalBreed => "Breed".to_string(),
            Message::PromptAnimalAge => "Age".to_string(),
            Message::PromptOwnerName => "Owner name".to_string(),
            Message::PromptOwnerPhone => "Owner phone".to_string(),
            Message::PromptAnimalId => "Animal ID".to_string(),
            Message::PromptDiagnosis => "Diagnosis".to_string(),
            Message::PromptTreatment => "Treatment".to_string(),
            Message::PromptVisitCost => "Cost".to_string(),
        };

        write!(f, "{}", text)
    }
}
