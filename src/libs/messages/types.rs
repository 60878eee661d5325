#[derive(Debug, Clone)]
pub enum Message {
    // === PORTAL SCREENS ===
    PortalHeader,
    PortalGreeting(String), // client name
    LoggedOut,

    // === AUTHENTICATION MESSAGES ===
    ClientNotFound,
    ClientAlreadyExists,
    ClientRegistered,
    LoginFieldsRequired,
    RegistrationFieldsRequired,

    // === PET MESSAGES ===
    PetAdded(String),   // pet name
    PetDeleted(String), // pet name
    PetFieldsRequired,
    NoPetsFound,
    PetListHeader,
    ConfirmDeletePet(String), // pet name

    // === APPOINTMENT MESSAGES ===
    AppointmentCreated,
    AppointmentCancelled,
    AppointmentNotCancellable,
    NoAppointmentsFound,
    NoPendingAppointments,
    NoPetsForBooking,
    AppointmentListHeader,
    InvalidAppointmentDate(String), // raw input
    ConfirmCancelAppointment,

    // === VISIT HISTORY MESSAGES ===
    HistoryHeader,

    // === ADMIN MESSAGES ===
    AnimalRegistered(String), // animal name
    AnimalListHeader,
    NoAnimalsFound,
    VisitRecorded(i64), // animal id
    VisitListHeader(i64),
    NoVisitsFound(i64),
    StatsHeader,
    Goodbye,

    // === STORAGE MESSAGES ===
    StoragePathFailed(String), // cause

    // === PROMPTS ===
    PromptPhone,
    PromptClientName,
    PromptEmail,
    PromptPetName,
    PromptPetSpecies,
    PromptPetBreed,
    PromptPetAge,
    PromptPetWeight,
    PromptPetNotes,
    PromptSelectPet,
    PromptService,
    PromptAppointmentDate,
    PromptAppointmentTime,
    PromptAppointmentNotes,
    PromptSelectAppointment,
    PromptMenuChoice,
    PromptAnimalName,
    PromptAnimalSpecies,
    PromptAnimalBreed,
    PromptAnimalAge,
    PromptOwnerName,
    PromptOwnerPhone,
    PromptAnimalId,
    PromptDiagnosis,
    PromptTreatment,
    PromptVisitCost,
}
