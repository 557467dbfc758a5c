#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tusk::engine::tracker::Tracker;

    #[test]
    fn test_stop_without_session_returns_none() {
        let mut tracker = Tracker::new(5);
        assert!(tracker.stop(Utc::now()).is_none());
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_session_long_enough_is_credited() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        assert!(tracker.start("tool-1", t0).is_none());
        let end = tracker.stop(t0 + Duration::seconds(42)).unwrap();

        assert_eq!(end.tool_id, "tool-1");
        assert_eq!(end.seconds, 42);
        assert!(end.credited);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_short_session_is_discarded() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        let end = tracker.stop(t0 + Duration::seconds(3)).unwrap();

        assert_eq!(end.seconds, 3);
        assert!(!end.credited);
    }

    #[test]
    fn test_exactly_minimum_counts() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        let end = tracker.stop(t0 + Duration::seconds(5)).unwrap();

        assert!(end.credited);
    }

    #[test]
    fn test_restarting_same_tool_keeps_start_instant() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        // Repeated events for the tracked tool must not reset the clock
        assert!(tracker.start("tool-1", t0 + Duration::seconds(10)).is_none());

        let end = tracker.stop(t0 + Duration::seconds(20)).unwrap();
        assert_eq!(end.seconds, 20);
    }

    #[test]
    fn test_switching_tools_ends_previous_session() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        let end = tracker.start("tool-2", t0 + Duration::seconds(30)).unwrap();

        assert_eq!(end.tool_id, "tool-1");
        assert_eq!(end.seconds, 30);
        assert!(end.credited);
        assert_eq!(tracker.session().unwrap().tool_id, "tool-2");

        // The second session starts counting from the switch
        let end = tracker.stop(t0 + Duration::seconds(40)).unwrap();
        assert_eq!(end.tool_id, "tool-2");
        assert_eq!(end.seconds, 10);
    }

    #[test]
    fn test_checkpoint_banks_time_and_restarts() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        let banked = tracker.checkpoint(t0 + Duration::seconds(60)).unwrap();

        assert_eq!(banked.tool_id, "tool-1");
        assert_eq!(banked.seconds, 60);
        assert!(banked.credited);

        // Session survives and continues from the checkpoint
        assert_eq!(tracker.session().unwrap().tool_id, "tool-1");
        let end = tracker.stop(t0 + Duration::seconds(90)).unwrap();
        assert_eq!(end.seconds, 30);
    }

    #[test]
    fn test_checkpoint_leaves_young_session_untouched() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        assert!(tracker.checkpoint(t0 + Duration::seconds(3)).is_none());

        // The start instant is preserved, so the final stop still sees the
        // whole stretch and can credit it
        let end = tracker.stop(t0 + Duration::seconds(8)).unwrap();
        assert_eq!(end.seconds, 8);
        assert!(end.credited);
    }

    #[test]
    fn test_checkpoint_without_session_returns_none() {
        let mut tracker = Tracker::new(5);
        assert!(tracker.checkpoint(Utc::now()).is_none());
    }

    #[test]
    fn test_clock_regression_counts_zero() {
        let mut tracker = Tracker::new(5);
        let t0 = Utc::now();

        tracker.start("tool-1", t0);
        let end = tracker.stop(t0 - Duration::seconds(30)).unwrap();

        assert_eq!(end.seconds, 0);
        assert!(!end.credited);
    }
}
