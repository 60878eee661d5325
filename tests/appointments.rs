#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vetdesk::db::appointments::{Appointment, AppointmentStatus, Appointments, DOCTOR_UNASSIGNED};
    use vetdesk::db::db::Db;

    struct AppointmentsTestContext {
        temp_dir: TempDir,
    }

    impl AppointmentsTestContext {
        fn appointments(&self) -> Appointments {
            let db = Db::at(self.temp_dir.path().join("portal.db")).unwrap();
            Appointments::with_db(db).unwrap()
        }
    }

    impl TestContext for AppointmentsTestContext {
        fn setup() -> Self {
            AppointmentsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(AppointmentsTestContext)]
    #[test]
    fn test_booking_always_starts_pending_and_unassigned(ctx: &mut AppointmentsTestContext) {
        let mut appointments = ctx.appointments();

        appointments
            .book("79161234567", "Барсик", "Вакцинация", date(2024, 12, 20), "10:00", "Ежегодная")
            .unwrap();

        let stored = appointments.fetch_by_client("79161234567").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, AppointmentStatus::Pending);
        assert_eq!(stored[0].doctor, DOCTOR_UNASSIGNED);
        assert_eq!(stored[0].animal_name, "Барсик");
        assert_eq!(stored[0].time, "10:00");
    }

    #[test_context(AppointmentsTestContext)]
    #[test]
    fn test_listing_ordered_by_date_descending(ctx: &mut AppointmentsTestContext) {
        let mut appointments = ctx.appointments();

        appointments.book("1", "Барсик", "Осмотр", date(2024, 12, 15), "10:00", "").unwrap();
        appointments.book("1", "Рекс", "Осмотр", date(2024, 12, 16), "11:00", "").unwrap();
        appointments.book("1", "Кеша", "Осмотр", date(2024, 11, 1), "12:00", "").unwrap();

        let stored = appointments.fetch_by_client("1").unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].date, date(2024, 12, 16));
        assert_eq!(stored[1].date, date(2024, 12, 15));
        assert_eq!(stored[2].date, date(2024, 11, 1));
    }

    #[test_context(AppointmentsTestContext)]
    #[test]
    fn test_cancel_removes_pending_appointment(ctx: &mut AppointmentsTestContext) {
        let mut appointments = ctx.appointments();

        let id = appointments.book("1", "Барсик", "Осмотр", date(2024, 12, 15), "10:00", "").unwrap();
        assert!(appointments.cancel(id).unwrap());
        assert!(appointments.fetch_by_client("1").unwrap().is_empty());
    }

    #[test_context(AppointmentsTestContext)]
    #[test]
    fn test_confirmed_appointment_is_not_cancellable(ctx: &mut AppointmentsTestContext) {
        let mut appointments = ctx.appointments();

        // Confirmed rows only ever come from seeding.
        let confirmed = Appointment {
            id: None,
            client_phone: "1".to_string(),
            animal_name: "Барсик".to_string(),
            service_type: "Вакцинация".to_string(),
            date: date(2024, 12, 15),
            time: "10:00".to_string(),
            status: AppointmentStatus::Confirmed,
            doctor: "Др. Смирнова".to_string(),
            notes: String::new(),
        };
        let id = appointments.insert(&confirmed).unwrap();

        assert!(!appointments.cancel(id).unwrap());
        let stored = appointments.fetch_by_client("1").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, AppointmentStatus::Confirmed);
    }

    #[test_context(AppointmentsTestContext)]
    #[test]
    fn test_unknown_status_reads_back_as_pending(_ctx: &mut AppointmentsTestContext) {
        assert_eq!(AppointmentStatus::from("Подтвержден"), AppointmentStatus::Confirmed);
        assert_eq!(AppointmentStatus::from("Ожидание"), AppointmentStatus::Pending);
        // Absent or unrecognized values are treated as not confirmed.
        assert_eq!(AppointmentStatus::from(""), AppointmentStatus::Pending);
        assert_eq!(AppointmentStatus::from("что-то ещё"), AppointmentStatus::Pending);
    }
}
