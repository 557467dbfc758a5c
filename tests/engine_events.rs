#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use tusk::engine::events::{HostEvent, IdleState};
    use tusk::engine::router::{Command, Reply};
    use tusk::engine::TrackerEngine;
    use tusk::libs::catalog::{Tool, ToolCatalog};
    use tusk::libs::kv::MemoryStore;

    fn tool(id: &str, url: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: format!("Tool {}", id),
            url: url.to_string(),
            category: "test".to_string(),
            times_used: 0,
            last_used_at: None,
            usage_history: Vec::new(),
        }
    }

    /// Engine over an in-memory store with the given catalog pre-cached,
    /// as if a previous run had fetched it.
    fn engine_with_tools(tools: Vec<Tool>) -> TrackerEngine<MemoryStore> {
        let mut store = MemoryStore::new();
        let mut catalog = ToolCatalog::default();
        catalog.replace(tools);
        catalog.store(&mut store).unwrap();
        TrackerEngine::new(store, 5).unwrap()
    }

    async fn status(engine: &mut TrackerEngine<MemoryStore>) -> Reply {
        engine.handle_command(Command::GetStatus).await
    }

    fn tab(url: &str) -> HostEvent {
        HostEvent::TabActivated { url: url.to_string() }
    }

    async fn at(engine: &mut TrackerEngine<MemoryStore>, event: HostEvent, now: DateTime<Utc>) {
        engine.handle_event_at(event, now).await.unwrap();
    }

    #[tokio::test]
    async fn test_visiting_catalog_tool_starts_tracking() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://app.figma.com/files"), t0).await;

        assert_eq!(
            status(&mut engine).await,
            Reply::Status {
                connected: false,
                tool_count: 1,
                tracking: Some("t1".to_string()),
                pending_tools: 0,
                pending_seconds: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_leaving_tool_credits_elapsed_seconds() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, tab("https://news.example.org"), t0 + Duration::seconds(10)).await;

        assert_eq!(
            status(&mut engine).await,
            Reply::Status {
                connected: false,
                tool_count: 1,
                tracking: None,
                pending_tools: 1,
                pending_seconds: 10,
            }
        );
    }

    #[tokio::test]
    async fn test_quick_tab_flick_leaves_no_trace() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, tab("https://news.example.org"), t0 + Duration::seconds(3)).await;

        let Reply::Status { pending_seconds, pending_tools, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(pending_seconds, 0);
        assert_eq!(pending_tools, 0);
    }

    #[tokio::test]
    async fn test_repeated_tab_events_do_not_double_count() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com/files"), t0).await;
        at(&mut engine, tab("https://figma.com/files/project/9"), t0 + Duration::seconds(8)).await;
        at(&mut engine, tab("https://news.example.org"), t0 + Duration::seconds(20)).await;

        let Reply::Status { pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(pending_seconds, 20);
    }

    #[tokio::test]
    async fn test_switching_tools_credits_the_first() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com"), tool("t2", "notion.so")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, tab("https://www.notion.so/workspace"), t0 + Duration::seconds(30)).await;

        assert_eq!(
            status(&mut engine).await,
            Reply::Status {
                connected: false,
                tool_count: 2,
                tracking: Some("t2".to_string()),
                pending_tools: 1,
                pending_seconds: 30,
            }
        );
    }

    #[tokio::test]
    async fn test_focus_loss_ends_session_and_return_resumes() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, HostEvent::WindowFocus { focused: false }, t0 + Duration::seconds(10)).await;

        let Reply::Status { tracking, pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(tracking, None);
        assert_eq!(pending_seconds, 10);

        // The URL is remembered, so regaining focus resumes tracking
        at(&mut engine, HostEvent::WindowFocus { focused: true }, t0 + Duration::seconds(60)).await;
        at(&mut engine, tab("https://news.example.org"), t0 + Duration::seconds(70)).await;

        let Reply::Status { pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(pending_seconds, 20);
    }

    #[tokio::test]
    async fn test_idle_ends_session_and_activity_resumes() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, HostEvent::IdleState { state: IdleState::Idle }, t0 + Duration::seconds(300)).await;

        let Reply::Status { tracking, pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(tracking, None);
        assert_eq!(pending_seconds, 300);

        at(&mut engine, HostEvent::IdleState { state: IdleState::Active }, t0 + Duration::seconds(400)).await;
        let Reply::Status { tracking, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(tracking, Some("t1".to_string()));
    }

    #[tokio::test]
    async fn test_locked_screen_counts_as_idle() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, HostEvent::IdleState { state: IdleState::Locked }, t0 + Duration::seconds(10)).await;

        let Reply::Status { tracking, pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(tracking, None);
        assert_eq!(pending_seconds, 10);
    }

    #[tokio::test]
    async fn test_unmatched_browsing_tracks_nothing() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://github.com/some/repo"), t0).await;
        at(&mut engine, tab("not a url at all"), t0 + Duration::seconds(5)).await;

        let Reply::Status { tracking, pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(tracking, None);
        assert_eq!(pending_seconds, 0);
    }

    #[tokio::test]
    async fn test_ticks_without_credentials_are_quiet() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;
        at(&mut engine, tab("https://news.example.org"), t0 + Duration::seconds(10)).await;

        // No credentials, so neither tick touches the network or the pending pool
        at(&mut engine, HostEvent::SyncTick, t0 + Duration::seconds(60)).await;
        at(&mut engine, HostEvent::CatalogTick, t0 + Duration::seconds(300)).await;

        let Reply::Status { pending_seconds, .. } = status(&mut engine).await else {
            panic!("expected status reply");
        };
        assert_eq!(pending_seconds, 10);
    }

    #[tokio::test]
    async fn test_disconnect_wipes_tracking_state() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com")]);
        let t0 = Utc::now();

        at(&mut engine, tab("https://figma.com"), t0).await;

        let reply = engine.handle_command(Command::Disconnect).await;
        assert_eq!(reply, Reply::Disconnected);

        assert_eq!(
            status(&mut engine).await,
            Reply::Status {
                connected: false,
                tool_count: 0,
                tracking: None,
                pending_tools: 0,
                pending_seconds: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_get_tools_returns_cached_catalog() {
        let mut engine = engine_with_tools(vec![tool("t1", "figma.com"), tool("t2", "notion.so")]);

        let reply = engine.handle_command(Command::GetTools).await;
        let Reply::Tools { tools } = reply else {
            panic!("expected tools reply");
        };
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].id, "t1");
    }
}
