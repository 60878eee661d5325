#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vetdesk::db::clients::{Client, Clients};
    use vetdesk::db::db::Db;

    struct ClientsTestContext {
        temp_dir: TempDir,
    }

    impl ClientsTestContext {
        fn clients(&self) -> Clients {
            let db = Db::at(self.temp_dir.path().join("portal.db")).unwrap();
            Clients::with_db(db).unwrap()
        }
    }

    impl TestContext for ClientsTestContext {
        fn setup() -> Self {
            ClientsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ClientsTestContext)]
    #[test]
    fn test_register_duplicate_phone_leaves_existing_row(ctx: &mut ClientsTestContext) {
        let mut clients = ctx.clients();

        let original = Client::new("79161234567", "Иван Петров", "ivan@mail.ru");
        assert!(clients.register(&original).unwrap());

        // Same phone, different name and email: rejected, not merged.
        let intruder = Client::new("79161234567", "Someone Else", "else@mail.ru");
        assert!(!clients.register(&intruder).unwrap());

        let stored = clients.find_by_phone("79161234567").unwrap().unwrap();
        assert_eq!(stored.name, "Иван Петров");
        assert_eq!(stored.email, "ivan@mail.ru");
    }

    #[test_context(ClientsTestContext)]
    #[test]
    fn test_login_requires_exact_phone_name_pair(ctx: &mut ClientsTestContext) {
        let mut clients = ctx.clients();
        clients.register(&Client::new("79037654321", "Мария Сидорова", "maria@mail.ru")).unwrap();

        // Exact pair succeeds.
        let found = clients.find_by_credentials("79037654321", "Мария Сидорова").unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "maria@mail.ru");

        // Right phone, wrong name.
        assert!(clients.find_by_credentials("79037654321", "Мария").unwrap().is_none());
        // Wrong phone, right name.
        assert!(clients.find_by_credentials("79000000000", "Мария Сидорова").unwrap().is_none());
        // Case matters.
        assert!(clients.find_by_credentials("79037654321", "мария сидорова").unwrap().is_none());
    }

    #[test_context(ClientsTestContext)]
    #[test]
    fn test_distinct_phones_register_independently(ctx: &mut ClientsTestContext) {
        let mut clients = ctx.clients();

        assert!(clients.register(&Client::new("1", "Same Name", "a@mail.ru")).unwrap());
        // A client is identified by phone, not by name.
        assert!(clients.register(&Client::new("2", "Same Name", "b@mail.ru")).unwrap());
    }
}
