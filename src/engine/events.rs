use serde::{Deserialize, Serialize};

/// Events the tracking engine consumes.
///
/// Browser events arrive over the bridge; tick events come from the watch
/// loop's interval timers; idle events come from the input monitor. They all
/// funnel into one queue so the engine handles them strictly in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostEvent {
    /// The browser's focused tab changed or navigated.
    TabActivated { url: String },
    /// The browser window gained or lost focus.
    WindowFocus { focused: bool },
    /// The user's input activity state changed.
    IdleState { state: IdleState },
    /// Time to push counted usage to the remote store.
    SyncTick,
    /// Time to refresh the tool catalog.
    CatalogTick,
}

/// User activity state as the host or input monitor reports it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdleState {
    Active,
    Idle,
    Locked,
}

impl IdleState {
    /// A locked screen counts as idle for tracking purposes.
    pub fn is_inactive(self) -> bool {
        self != IdleState::Active
    }
}
