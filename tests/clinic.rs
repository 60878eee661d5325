#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vetdesk::db::animals::{Animal, Animals};
    use vetdesk::db::db::Db;
    use vetdesk::db::stats::Stats;
    use vetdesk::db::visits::{Visit, Visits};

    struct ClinicTestContext {
        temp_dir: TempDir,
    }

    impl ClinicTestContext {
        fn clinic_db(&self) -> Db {
            Db::at(self.temp_dir.path().join("clinic.db")).unwrap()
        }

        fn animals(&self) -> Animals {
            Animals::with_db(self.clinic_db()).unwrap()
        }

        fn visits(&self) -> Visits {
            Visits::with_db(self.clinic_db()).unwrap()
        }

        fn stats(&self) -> Stats {
            Stats::with_db(self.clinic_db()).unwrap()
        }
    }

    impl TestContext for ClinicTestContext {
        fn setup() -> Self {
            ClinicTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ClinicTestContext)]
    #[test]
    fn test_register_and_list_animals(ctx: &mut ClinicTestContext) {
        let mut animals = ctx.animals();

        let id = animals.register(&Animal::new("Барсик", "Кот", "Сиамский", 3, "Иван Петров", "79161234567")).unwrap();
        assert!(id > 0);

        let all = animals.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Барсик");
        assert_eq!(all[0].owner_name, "Иван Петров");
        assert!(all[0].registration_date.is_some());
    }

    #[test_context(ClinicTestContext)]
    #[test]
    fn test_visit_against_unknown_animal_id_is_stored(ctx: &mut ClinicTestContext) {
        let mut visits = ctx.visits();

        // No animal with id 999 exists; the record is stored anyway.
        let id = visits.record(999, "Здоров", "Нет", 100.0).unwrap();
        assert!(id > 0);

        let stored = visits.fetch_by_animal(999).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].diagnosis, "Здоров");
        assert_eq!(stored[0].cost, 100.0);
    }

    #[test_context(ClinicTestContext)]
    #[test]
    fn test_statistics_aggregates_match(ctx: &mut ClinicTestContext) {
        let mut animals = ctx.animals();
        let mut visits = ctx.visits();

        let cat1 = animals.register(&Animal::new("Барсик", "Кот", "Сиамский", 2, "a", "1")).unwrap();
        animals.register(&Animal::new("Мурка", "Кот", "Британский", 1, "b", "2")).unwrap();
        animals.register(&Animal::new("Рекс", "Собака", "Овчарка", 1, "c", "3")).unwrap();

        visits.record(cat1, "Здоров", "Нет", 100.0).unwrap();
        visits.record(cat1, "Аллергия", "Диета", 50.5).unwrap();

        let stats = ctx.stats().fetch().unwrap();
        assert_eq!(stats.total_animals, 3);
        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.total_income, 150.5);
        assert_eq!(
            stats.species_count,
            vec![("Кот".to_string(), 2), ("Собака".to_string(), 1)]
        );
    }

    #[test_context(ClinicTestContext)]
    #[test]
    fn test_statistics_income_is_zero_without_visits(ctx: &mut ClinicTestContext) {
        let mut animals = ctx.animals();
        animals.register(&Animal::new("Барсик", "Кот", "Сиамский", 2, "a", "1")).unwrap();

        let stats = ctx.stats().fetch().unwrap();
        assert_eq!(stats.total_visits, 0);
        // SUM over an empty table coalesces to zero, never to null.
        assert_eq!(stats.total_income, 0.0);
    }

    #[test_context(ClinicTestContext)]
    #[test]
    fn test_visits_listed_newest_first(ctx: &mut ClinicTestContext) {
        let mut visits = ctx.visits();

        let visit = |date: &str, diagnosis: &str| Visit {
            id: None,
            animal_id: 1,
            visit_date: Some(date.to_string()),
            diagnosis: diagnosis.to_string(),
            treatment: "Нет".to_string(),
            cost: 10.0,
        };
        // Inserted oldest first; the listing must come back newest first.
        visits.insert(&visit("2024-12-15 10:00:00", "Первый")).unwrap();
        visits.insert(&visit("2024-12-16 10:00:00", "Второй")).unwrap();
        visits.insert(&visit("2024-11-01 09:30:00", "Нулевой")).unwrap();

        let stored = visits.fetch_by_animal(1).unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].visit_date.as_deref(), Some("2024-12-16 10:00:00"));
        assert_eq!(stored[1].visit_date.as_deref(), Some("2024-12-15 10:00:00"));
        assert_eq!(stored[2].visit_date.as_deref(), Some("2024-11-01 09:30:00"));
    }
}
