//! Demo data for the client portal.
//!
//! Seeding is a bootstrap convenience, run once per portal startup. Pets
//! and appointments are only written together with a newly created demo
//! client, so restarting the portal never duplicates them. The two
//! confirmed appointments planted here are the only confirmed rows the
//! system can ever contain; no user or staff action sets that status.

use crate::db::appointments::{Appointment, AppointmentStatus, Appointments};
use crate::db::clients::{Client, Clients};
use crate::db::pets::{Pet, Pets};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;

pub fn run() -> Result<()> {
    let mut clients = Clients::new()?;
    let mut pets = Pets::new()?;
    let mut appointments = Appointments::new()?;
    seed_into(&mut clients, &mut pets, &mut appointments)
}

pub fn seed_into(clients: &mut Clients, pets: &mut Pets, appointments: &mut Appointments) -> Result<()> {
    for client in demo_clients() {
        // A duplicate phone means this demo client (and everything that
        // hangs off it) is already in place.
        if !clients.register(&client)? {
            msg_debug!(format!("demo client {} already present, skipping", client.phone));
            continue;
        }
        for pet in demo_pets(&client.phone) {
            pets.insert(&pet)?;
        }
        for appointment in demo_appointments(&client.phone) {
            appointments.insert(&appointment)?;
        }
    }
    Ok(())
}

fn demo_clients() -> Vec<Client> {
    vec![
        Client::new("79161234567", "Иван Петров", "ivan@mail.ru"),
        Client::new("79037654321", "Мария Сидорова", "maria@mail.ru"),
    ]
}

fn demo_pets(phone: &str) -> Vec<Pet> {
    match phone {
        "79161234567" => vec![
            Pet::new(phone, "Барсик", "Кот", "Сиамский", 3, 4.5, "Аллергия на курицу"),
            Pet::new(phone, "Рекс", "Собака", "Овчарка", 5, 30.0, "Любит играть с мячом"),
        ],
        "79037654321" => vec![Pet::new(phone, "Кеша", "Попугай", "Ара", 2, 1.2, "Разговаривает")],
        _ => vec![],
    }
}

fn demo_appointments(phone: &str) -> Vec<Appointment> {
    let confirmed = |animal: &str, service: &str, date: NaiveDate, time: &str, doctor: &str, notes: &str| Appointment {
        id: None,
        client_phone: phone.to_string(),
        animal_name: animal.to_string(),
        service_type: service.to_string(),
        date,
        time: time.to_string(),
        status: AppointmentStatus::Confirmed,
        doctor: doctor.to_string(),
        notes: notes.to_string(),
    };
    match phone {
        "79161234567" => vec![confirmed(
            "Барсик",
            "Вакцинация",
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            "10:00",
            "Др. Смирнова",
            "Ежегодная вакцинация",
        )],
        "79037654321" => vec![confirmed(
            "Кеша",
            "Осмотр",
            NaiveDate::from_ymd_opt(2024, 12, 16).unwrap(),
            "14:30",
            "Др. Иванов",
            "Плановый осмотр",
        )],
        _ => vec![],
    }
}
