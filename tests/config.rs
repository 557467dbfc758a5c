#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tusk::libs::config::{Config, SyncConfig, TrackerConfig};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        min_active_seconds: u64,
        idle_threshold: u64,
        poll_interval: u64,
        sync_interval: u64,
        catalog_interval: u64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                min_active_seconds: 5,
                idle_threshold: 120,
                poll_interval: 500,
                sync_interval: 60,
                catalog_interval: 300,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.tracker.is_none());
        assert!(config.sync.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.tracker, None);
        assert_eq!(config.sync, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            tracker: Some(TrackerConfig {
                min_active_seconds: ctx.min_active_seconds,
                idle_threshold: ctx.idle_threshold,
                poll_interval: ctx.poll_interval,
            }),
            sync: Some(SyncConfig {
                sync_interval: ctx.sync_interval,
                catalog_interval: ctx.catalog_interval,
            }),
        };
        config.save().unwrap();
        let read_config = Config::read().unwrap();
        let tracker_config = read_config.tracker.unwrap();
        let sync_config = read_config.sync.unwrap();

        assert_eq!(tracker_config.min_active_seconds, ctx.min_active_seconds);
        assert_eq!(tracker_config.idle_threshold, ctx.idle_threshold);
        assert_eq!(tracker_config.poll_interval, ctx.poll_interval);
        assert_eq!(sync_config.sync_interval, ctx.sync_interval);
        assert_eq!(sync_config.catalog_interval, ctx.catalog_interval);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_keeps_other_module_unset(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tracker: Some(TrackerConfig::default()),
            sync: None,
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert!(read_config.tracker.is_some());
        assert!(read_config.sync.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_tracker_config(ctx: &mut ConfigTestContext) {
        let tracker_config = TrackerConfig::default();
        assert_eq!(tracker_config.min_active_seconds, ctx.min_active_seconds);
        assert_eq!(tracker_config.idle_threshold, ctx.idle_threshold);
        assert_eq!(tracker_config.poll_interval, ctx.poll_interval);
    }

    #[test]
    fn test_default_sync_config() {
        let sync_config = SyncConfig::default();
        assert_eq!(sync_config.sync_interval, 60);
        assert_eq!(sync_config.catalog_interval, 300);
    }
}
