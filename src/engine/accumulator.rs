use std::collections::HashMap;

/// Counted-but-unsynced seconds, keyed by tool id.
///
/// Credited session time lands here and waits for the next sync round.
/// Repeated sessions for the same tool merge into one figure, so a sync
/// pushes at most one update per tool no matter how often the user bounced
/// between tabs.
#[derive(Debug, Default)]
pub struct UsageAccumulator {
    pending: HashMap<String, u64>,
}

impl UsageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds credited seconds for a tool. Zero-second adds are ignored.
    pub fn add(&mut self, tool_id: &str, seconds: u64) {
        if seconds == 0 {
            return;
        }
        *self.pending.entry(tool_id.to_string()).or_insert(0) += seconds;
    }

    /// Takes the whole pending set, leaving the accumulator empty.
    ///
    /// Pairs come out sorted by tool id so a sync round always pushes in a
    /// stable order. Failed pushes are expected to come back via `add`.
    pub fn take(&mut self) -> Vec<(String, u64)> {
        let mut drained: Vec<(String, u64)> = self.pending.drain().collect();
        drained.sort_by(|a, b| a.0.cmp(&b.0));
        drained
    }

    pub fn get(&self, tool_id: &str) -> u64 {
        self.pending.get(tool_id).copied().unwrap_or(0)
    }

    /// Total pending seconds across all tools.
    pub fn total(&self) -> u64 {
        self.pending.values().sum()
    }

    /// Number of tools with pending usage.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
