#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tusk::libs::kv::{KvStore, MemoryStore};
    use tusk::libs::synclog::{SyncLog, SyncLogEntry, SyncOutcome, SYNC_LOG_CAPACITY, SYNC_LOG_KEY};

    fn entry(tool_id: &str, seconds: u64, outcome: SyncOutcome) -> SyncLogEntry {
        SyncLogEntry {
            timestamp: Utc::now(),
            tool_id: tool_id.to_string(),
            tool_name: Some(format!("Tool {}", tool_id)),
            seconds,
            outcome,
            error: None,
        }
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = SyncLog::default();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.entries().next().is_none());
    }

    #[test]
    fn test_entries_come_back_most_recent_first() {
        let mut log = SyncLog::default();
        let base = Utc::now();
        for i in 0..3 {
            log.push(SyncLogEntry {
                timestamp: base + Duration::seconds(i),
                tool_id: format!("t{}", i),
                tool_name: None,
                seconds: 10,
                outcome: SyncOutcome::Synced,
                error: None,
            });
        }

        let ids: Vec<&str> = log.entries().map(|e| e.tool_id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "t0"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = SyncLog::default();
        for i in 0..(SYNC_LOG_CAPACITY + 10) {
            log.push(entry(&format!("t{}", i), 1, SyncOutcome::Synced));
        }

        assert_eq!(log.len(), SYNC_LOG_CAPACITY);
        // Newest entry is still at the front, the first ten are gone
        assert_eq!(log.entries().next().unwrap().tool_id, format!("t{}", SYNC_LOG_CAPACITY + 9));
        assert!(log.entries().all(|e| e.tool_id != "t0"));
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut log = SyncLog::default();
        log.push(entry("t1", 30, SyncOutcome::Synced));
        log.push(SyncLogEntry {
            timestamp: Utc::now(),
            tool_id: "t2".to_string(),
            tool_name: None,
            seconds: 15,
            outcome: SyncOutcome::Requeued,
            error: Some("connection reset".to_string()),
        });
        log.store(&mut store).unwrap();

        let loaded = SyncLog::load(&store).unwrap();
        assert_eq!(loaded.len(), 2);

        let newest = loaded.entries().next().unwrap();
        assert_eq!(newest.tool_id, "t2");
        assert_eq!(newest.outcome, SyncOutcome::Requeued);
        assert_eq!(newest.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(SyncLog::load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_log_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set(SYNC_LOG_KEY, "[[[").unwrap();
        assert!(SyncLog::load(&store).unwrap().is_empty());
    }
}
