use crate::engine::events::{HostEvent, IdleState};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant};

/// Watches for keyboard and mouse input and reports idle transitions.
///
/// A dedicated OS thread runs the rdev listener and stamps the shared
/// last-activity instant. An async poll loop compares that stamp against the
/// idle threshold and emits `IdleState` events on each transition. Key
/// releases and pointer moves are ignored; only presses and wheel scrolls
/// count as activity, so a nudged desk does not end an idle period.
pub struct IdleMonitor {
    threshold: Duration,
    poll_interval: Duration,
    last_activity: Arc<Mutex<Instant>>,
}

impl IdleMonitor {
    pub fn new(idle_threshold: u64, poll_interval: u64) -> Self {
        IdleMonitor {
            threshold: Duration::from_secs(idle_threshold),
            poll_interval: Duration::from_millis(poll_interval),
            last_activity: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Spawns the blocking rdev listener thread.
    ///
    /// Restarts the listener after a second on error so monitoring survives
    /// transient input subsystem failures.
    fn spawn_listener(&self) {
        let shared_last_activity = self.last_activity.clone();
        std::thread::spawn(move || loop {
            let last_activity_for_listener = shared_last_activity.clone();
            if let Err(e) = listen(move |event: Event| match event.event_type {
                EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } => {
                    *last_activity_for_listener.lock() = Instant::now();
                }
                _ => {}
            }) {
                msg_error!(Message::ErrorInInputListener(format!("{:?}", e)));
                std::thread::sleep(Duration::from_secs(1));
            } else {
                // listen blocks forever under normal operation
                break;
            }
        });
    }

    /// Runs the idle detection loop until the receiving side goes away.
    pub async fn run(self, tx: mpsc::Sender<HostEvent>) {
        self.spawn_listener();

        let mut idle = false;
        loop {
            let elapsed = self.last_activity.lock().elapsed();

            if !idle && elapsed >= self.threshold {
                idle = true;
                msg_debug!(Message::IdleDetected(self.threshold.as_secs()));
                if tx.send(HostEvent::IdleState { state: IdleState::Idle }).await.is_err() {
                    break;
                }
            } else if idle && elapsed < self.threshold {
                idle = false;
                msg_debug!(Message::ActivityResumed);
                if tx.send(HostEvent::IdleState { state: IdleState::Active }).await.is_err() {
                    break;
                }
            }

            time::sleep(self.poll_interval).await;
        }
    }
}
