use chrono::{DateTime, Utc};

/// An open stretch of usage for one tool.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingSession {
    pub tool_id: String,
    pub started_at: DateTime<Utc>,
}

/// A closed stretch of usage, with the debounce verdict applied.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionEnd {
    pub tool_id: String,
    pub seconds: u64,
    /// False when the session was shorter than the minimum and its time
    /// must be discarded.
    pub credited: bool,
}

/// Session state machine: at most one tool is tracked at a time.
///
/// Starting a session for a new tool implicitly ends the current one, so no
/// instant is ever counted twice. Sessions shorter than `min_active` seconds
/// end uncredited; quick tab flicks through a tool's page leave no trace.
#[derive(Debug)]
pub struct Tracker {
    session: Option<TrackingSession>,
    min_active: u64,
}

impl Tracker {
    pub fn new(min_active_seconds: u64) -> Self {
        Tracker {
            session: None,
            min_active: min_active_seconds,
        }
    }

    pub fn session(&self) -> Option<&TrackingSession> {
        self.session.as_ref()
    }

    /// Starts tracking `tool_id`, returning the end of any session it
    /// displaced. Starting the already-tracked tool is a no-op, so the
    /// original start instant survives refreshes and repeated events.
    pub fn start(&mut self, tool_id: &str, now: DateTime<Utc>) -> Option<SessionEnd> {
        if let Some(session) = &self.session {
            if session.tool_id == tool_id {
                return None;
            }
        }
        let ended = self.stop(now);
        self.session = Some(TrackingSession {
            tool_id: tool_id.to_string(),
            started_at: now,
        });
        ended
    }

    /// Ends the current session, if any.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<SessionEnd> {
        let session = self.session.take()?;
        let seconds = elapsed_seconds(session.started_at, now);
        Some(SessionEnd {
            tool_id: session.tool_id,
            seconds,
            credited: seconds >= self.min_active,
        })
    }

    /// Banks the session's elapsed time without ending it.
    ///
    /// Used at sync time so an hours-long session is pushed incrementally.
    /// The session restarts from `now`, and a session still younger than the
    /// minimum is left untouched so its eventual end decides whether the
    /// whole stretch counts.
    pub fn checkpoint(&mut self, now: DateTime<Utc>) -> Option<SessionEnd> {
        let session = self.session.as_mut()?;
        let seconds = elapsed_seconds(session.started_at, now);
        if seconds < self.min_active {
            return None;
        }
        let tool_id = session.tool_id.clone();
        session.started_at = now;
        Some(SessionEnd {
            tool_id,
            seconds,
            credited: true,
        })
    }
}

fn elapsed_seconds(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (now - started_at).num_seconds().max(0) as u64
}
