//! Display implementation for tusk application messages.
//!
//! Converts structured `Message` values into the human-readable text shown in
//! the terminal. All user-facing wording lives here, in one place, so command
//! code never embeds literal strings.
//!
//! ## Message Categories
//!
//! - **Connection Messages**: remote store credentials and token lifecycle
//! - **Configuration Messages**: setup wizard prompts and module names
//! - **Catalog Messages**: tool catalog refresh and cache state
//! - **Tracking Messages**: session start/stop/discard and idle transitions
//! - **Sync Messages**: usage push outcomes and the sync log
//! - **Duplicate Check Messages**: category lookups before adding a tool
//! - **Watch Messages**: watcher lifecycle, bridge and signal handling

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CONNECTION MESSAGES ===
            Message::Connected => "Connected to remote store!".to_string(),
            Message::Disconnected => "Disconnected. Local tracking state cleared.".to_string(),
            Message::NotConnected => "Not connected to a remote store. Run 'tusk connect' first.".to_string(),
            Message::ConnectRejected(reason) => format!("Connection rejected: {}", reason),
            Message::InvalidEndpointUrl => "Endpoint URL must be a valid http(s) URL".to_string(),
            Message::MissingApiKey => "API key must not be empty".to_string(),
            Message::MalformedAccessToken => "Access token does not look like a JWT".to_string(),
            Message::MissingRefreshToken => "Refresh token must not be empty".to_string(),
            Message::TokenRefreshed => "Access token refreshed".to_string(),
            Message::TokenRefreshFailed(e) => format!("Failed to refresh access token: {}", e),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully!".to_string(),
            Message::ConfigModuleTracker => "Tracker".to_string(),
            Message::ConfigModuleSync => "Sync".to_string(),
            Message::PromptSelectModules => "Select modules for configuration".to_string(),
            Message::PromptMinActiveSeconds => "Minimum session length to count, in seconds".to_string(),
            Message::PromptIdleThreshold => "Idle threshold in seconds".to_string(),
            Message::PromptPollInterval => "Activity poll interval in milliseconds".to_string(),
            Message::PromptSyncInterval => "Usage sync interval in seconds".to_string(),
            Message::PromptCatalogInterval => "Catalog refresh interval in seconds".to_string(),
            Message::PromptEndpointUrl => "Remote store URL".to_string(),
            Message::PromptApiKey => "API key".to_string(),
            Message::PromptAccessToken => "Access token".to_string(),
            Message::PromptRefreshToken => "Refresh token".to_string(),

            // === CATALOG MESSAGES ===
            Message::CatalogRefreshed(count) => format!("Tool catalog refreshed: {} tools", count),
            Message::CatalogRefreshFailed(e) => format!("Failed to refresh tool catalog: {}", e),
            Message::NoToolsCached => "No tools cached yet. Run 'tusk tools --refresh' to fetch the catalog.".to_string(),
            Message::ToolsHeader => "Cached tools:".to_string(),

            // === TRACKING MESSAGES ===
            Message::TrackingStarted(name) => format!("Tracking started: {}", name),
            Message::TrackingStopped { tool_id, seconds } => format!("Tracking stopped for {}: {} seconds", tool_id, seconds),
            Message::TrackingDiscarded { tool_id, seconds } => format!("Session for {} discarded ({} seconds, too short)", tool_id, seconds),
            Message::IdleDetected(threshold) => format!("No activity for {} seconds, tracking paused", threshold),
            Message::ActivityResumed => "Activity resumed".to_string(),

            // === SYNC MESSAGES ===
            Message::UsageSynced { tool_name, seconds } => format!("Synced {} seconds for {}", seconds, tool_name),
            Message::UsageRequeued { tool_id, seconds, error } => format!("Sync failed for {} ({} seconds kept for retry): {}", tool_id, seconds, error),
            Message::UsageDropped { tool_id, seconds } => {
                format!("Dropped {} seconds for {}: tool no longer exists in remote store", seconds, tool_id)
            }
            Message::SyncFailed(e) => format!("Sync failed: {}", e),
            Message::SyncLogHeader => "Recent sync attempts:".to_string(),
            Message::SyncLogEmpty => "No sync attempts recorded yet.".to_string(),

            // === DUPLICATE CHECK MESSAGES ===
            Message::DuplicateFound { name, times_used, count } => {
                format!("{} tool(s) already in this category. Least used: {} ({} uses)", count, name, times_used)
            }
            Message::NoDuplicateInCategory(category) => format!("No cached tools in category '{}'", category),

            // === STATUS MESSAGES ===
            Message::StatusHeader => "Tusk status:".to_string(),
            Message::StatusHintWatch => "Live tracking figures are only available while 'tusk watch' is running.".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted {
                sync_interval,
                catalog_interval,
                idle_threshold,
            } => {
                format!(
                    "Watch started (sync every {}s, catalog every {}s, idle after {}s)",
                    sync_interval, catalog_interval, idle_threshold
                )
            }
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchShuttingDown => "Shutting down, syncing pending usage...".to_string(),
            Message::BridgeDisconnected => "Browser bridge disconnected".to_string(),
            Message::BridgeDecodeFailed(e) => format!("Ignoring malformed bridge message: {}", e),
            Message::EngineEventFailed(e) => format!("Failed to handle tracking event: {}", e),
            Message::WatcherReceivedSigterm => "Received SIGTERM signal".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT signal".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C signal".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for ctrl+c: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === ERROR LOGGING ===
            Message::ErrorInInputListener(e) => format!("Error in input listener: {}", e),
            Message::StateDecodeFailed(e) => format!("Stored state could not be decoded, starting fresh: {}", e),
        };
        write!(f, "{}", message)
    }
}
