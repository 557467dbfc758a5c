#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tusk::db::store::SqliteStore;
    use tusk::libs::kv::KvStore;

    /// Test context to ensure a clean environment for each store test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_get_missing_key(_ctx: &mut StoreTestContext) {
        let store = SqliteStore::new().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.last_updated("missing").unwrap(), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_set_and_get(_ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::new().unwrap();
        store.set("catalog", r#"{"tools":[]}"#).unwrap();

        assert_eq!(store.get("catalog").unwrap().as_deref(), Some(r#"{"tools":[]}"#));
        assert!(store.last_updated("catalog").unwrap().is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_set_overwrites_existing_value(_ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::new().unwrap();
        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_remove(_ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::new().unwrap();
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();

        assert_eq!(store.get("key").unwrap(), None);
        // Removing a missing key is not an error
        store.remove("key").unwrap();
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_wipes_every_key(_ctx: &mut StoreTestContext) {
        let mut store = SqliteStore::new().unwrap();
        store.set("credentials", "blob").unwrap();
        store.set("catalog", "{}").unwrap();
        store.set("sync_log", "[]").unwrap();

        store.clear().unwrap();

        assert_eq!(store.get("credentials").unwrap(), None);
        assert_eq!(store.get("catalog").unwrap(), None);
        assert_eq!(store.get("sync_log").unwrap(), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_values_survive_reopening(_ctx: &mut StoreTestContext) {
        {
            let mut store = SqliteStore::new().unwrap();
            store.set("key", "persisted").unwrap();
        }

        let store = SqliteStore::new().unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("persisted"));
    }
}
