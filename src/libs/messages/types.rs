#[derive(Debug, Clone)]
pub enum Message {
    // === CONNECTION MESSAGES ===
    Connected,
    Disconnected,
    NotConnected,
    ConnectRejected(String),
    InvalidEndpointUrl,
    MissingApiKey,
    MalformedAccessToken,
    MissingRefreshToken,
    TokenRefreshed,
    TokenRefreshFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTracker,
    ConfigModuleSync,
    PromptSelectModules,
    PromptMinActiveSeconds,
    PromptIdleThreshold,
    PromptPollInterval,
    PromptSyncInterval,
    PromptCatalogInterval,
    PromptEndpointUrl,
    PromptApiKey,
    PromptAccessToken,
    PromptRefreshToken,

    // === CATALOG MESSAGES ===
    CatalogRefreshed(usize),
    CatalogRefreshFailed(String),
    NoToolsCached,
    ToolsHeader,

    // === TRACKING MESSAGES ===
    TrackingStarted(String), // tool name
    TrackingStopped {
        tool_id: String,
        seconds: u64,
    },
    TrackingDiscarded {
        tool_id: String,
        seconds: u64,
    },
    IdleDetected(u64), // threshold seconds
    ActivityResumed,

    // === SYNC MESSAGES ===
    UsageSynced {
        tool_name: String,
        seconds: u64,
    },
    UsageRequeued {
        tool_id: String,
        seconds: u64,
        error: String,
    },
    UsageDropped {
        tool_id: String,
        seconds: u64,
    },
    SyncFailed(String),
    SyncLogHeader,
    SyncLogEmpty,

    // === DUPLICATE CHECK MESSAGES ===
    DuplicateFound {
        name: String,
        times_used: i64,
        count: usize,
    },
    NoDuplicateInCategory(String),

    // === STATUS MESSAGES ===
    StatusHeader,
    StatusHintWatch,

    // === WATCH MESSAGES ===
    WatchStarted {
        sync_interval: u64,
        catalog_interval: u64,
        idle_threshold: u64,
    },
    WatchStopped,
    WatchShuttingDown,
    BridgeDisconnected,
    BridgeDecodeFailed(String),
    EngineEventFailed(String),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === ERROR LOGGING ===
    ErrorInInputListener(String),
    StateDecodeFailed(String),
}
