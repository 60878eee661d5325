use crate::db::animals::Animal;
use crate::db::appointments::Appointment;
use crate::db::pets::Pet;
use crate::db::stats::ClinicStats;
use crate::db::visits::Visit;
use anyhow::Result;
use prettytable::{row, Table};

/// Static demo entries for the portal's visit history tab. The original
/// portal never reads these from storage, and neither does this one.
const DEMO_HISTORY: [(&str, &str, &str, &str, &str, &str); 3] = [
    (
        "2024-11-15",
        "Барсик",
        "Вакцинация",
        "Др. Смирнова",
        "Здоров",
        "Повторная вакцинация через год",
    ),
    ("2024-09-10", "Рекс", "Осмотр", "Др. Иванов", "Легкая аллергия", "Сменить корм"),
    ("2024-07-05", "Барсик", "Стрижка", "Др. Петрова", "-", "Регулярный уход за шерстью"),
];

pub struct View {}

impl View {
    pub fn pets(pets: &Vec<Pet>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "SPECIES", "BREED", "AGE", "WEIGHT (KG)", "NOTES"]);
        for pet in pets {
            table.add_row(row![pet.id.unwrap_or(0), pet.name, pet.species, pet.breed, pet.age, pet.weight, pet.notes]);
        }
        table.printstd();

        Ok(())
    }

    pub fn appointments(appointments: &Vec<Appointment>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PET", "SERVICE", "DATE", "TIME", "STATUS", "DOCTOR", "NOTES"]);
        for appointment in appointments {
            table.add_row(row![
                appointment.id.unwrap_or(0),
                appointment.animal_name,
                appointment.service_type,
                appointment.date.format("%Y-%m-%d"),
                appointment.time,
                appointment.status.as_str(),
                appointment.doctor,
                appointment.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn animals(animals: &Vec<Animal>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "SPECIES", "BREED", "AGE", "OWNER", "PHONE", "REGISTERED"]);
        for animal in animals {
            table.add_row(row![
                animal.id.unwrap_or(0),
                animal.name,
                animal.species,
                animal.breed,
                animal.age,
                animal.owner_name,
                animal.phone,
                animal.registration_date.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn visits(visits: &Vec<Visit>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "DIAGNOSIS", "TREATMENT", "COST"]);
        for visit in visits {
            table.add_row(row![
                visit.id.unwrap_or(0),
                visit.visit_date.as_deref().unwrap_or("-"),
                visit.diagnosis,
                visit.treatment,
                format!("{:.2}", visit.cost)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &ClinicStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Total animals", stats.total_animals]);
        for (species, count) in &stats.species_count {
            table.add_row(row![format!("  {}", species), count]);
        }
        table.add_row(row!["Total visits", stats.total_visits]);
        table.add_row(row!["Total income", format!("{:.2}", stats.total_income)]);
        table.printstd();

        Ok(())
    }

    pub fn history() -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PET", "SERVICE", "DOCTOR", "DIAGNOSIS", "RECOMMENDATIONS"]);
        for (date, pet, service, doctor, diagnosis, recommendations) in DEMO_HISTORY {
            table.add_row(row![date, pet, service, doctor, diagnosis, recommendations]);
        }
        table.printstd();

        Ok(())
    }
}
