#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vetdesk::db::animals::Animals;
    use vetdesk::db::clients::Clients;
    use vetdesk::db::db::{CLINIC_DB_FILE_NAME, PORTAL_DB_FILE_NAME};
    use vetdesk::libs::data_storage::DataStorage;

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            StorageTestContext { temp_dir }
        }
    }

    // Single test: everything here mutates HOME, and the default test
    // runner would interleave that across threads.
    #[test_context(StorageTestContext)]
    #[test]
    fn test_default_databases_live_in_app_directory(ctx: &mut StorageTestContext) {
        // Opening the repositories creates their schemas, which forces
        // both store files onto disk in the application directory.
        let _clients = Clients::new().unwrap();
        let _animals = Animals::new().unwrap();

        let storage = DataStorage::new();
        let portal_path = storage.get_path(PORTAL_DB_FILE_NAME).unwrap();
        let clinic_path = storage.get_path(CLINIC_DB_FILE_NAME).unwrap();
        assert!(portal_path.exists());
        assert!(clinic_path.exists());
        assert_ne!(portal_path, clinic_path);

        // With HOME pointing at a regular file the data directory cannot
        // be created, and the failure surfaces with its cause attached.
        let blocker = ctx.temp_dir.path().join("not-a-directory");
        std::fs::write(&blocker, b"").unwrap();
        std::env::set_var("HOME", &blocker);
        std::env::set_var("LOCALAPPDATA", &blocker);

        let err = Clients::new().unwrap_err();
        assert!(err.to_string().contains("Failed to resolve storage path"));
    }
}
