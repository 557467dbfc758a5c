//! Watch command: the long-running tracking process.
//!
//! Runs as the browser extension's native host. Bridge lines from stdin,
//! idle transitions from the input monitor, and the sync/catalog timers all
//! feed one event loop that owns the engine, so every state change is
//! serialized through it. The loop ends on stdin EOF (the browser went
//! away) or a termination signal, and always finishes with a final sync of
//! whatever usage is still pending.

use crate::db::store::SqliteStore;
use crate::engine::events::HostEvent;
use crate::engine::TrackerEngine;
use crate::libs::bridge::{self, BridgeInput};
use crate::libs::config::Config;
use crate::libs::idle::IdleMonitor;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{self, Duration, MissedTickBehavior};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tracker_config = config.tracker.unwrap_or_default();
    let sync_config = config.sync.unwrap_or_default();

    let store = SqliteStore::new()?;
    let mut engine = TrackerEngine::new(store, tracker_config.min_active_seconds)?;

    // Set up a channel to handle shutdown signals
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
            let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    let _shutdown_tx = shutdown_tx; // keep the channel open; there are no signals to forward
    #[cfg(not(any(unix, windows)))]
    msg_warning!(Message::WatcherSignalHandlingNotSupported);

    // Bridge reader feeding browser events and commands into the loop
    let (bridge_tx, mut bridge_rx) = mpsc::channel::<BridgeInput>(64);
    let reader = bridge::spawn_reader(bridge_tx);

    // Input-based idle detection
    let (idle_tx, mut idle_rx) = mpsc::channel::<HostEvent>(16);
    let monitor = IdleMonitor::new(tracker_config.idle_threshold, tracker_config.poll_interval);
    let idle_task = tokio::spawn(monitor.run(idle_tx));

    // The catalog timer's immediate first tick doubles as the startup
    // refresh; the sync timer's is consumed since there is nothing to push.
    let mut sync_timer = time::interval(Duration::from_secs(sync_config.sync_interval.max(1)));
    sync_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    sync_timer.tick().await;
    let mut catalog_timer = time::interval(Duration::from_secs(sync_config.catalog_interval.max(1)));
    catalog_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    msg_info!(Message::WatchStarted {
        sync_interval: sync_config.sync_interval,
        catalog_interval: sync_config.catalog_interval,
        idle_threshold: tracker_config.idle_threshold,
    });

    loop {
        tokio::select! {
            input = bridge_rx.recv() => match input {
                Some(BridgeInput::Event(event)) => {
                    if let Err(e) = engine.handle_event(event).await {
                        msg_error!(Message::EngineEventFailed(e.to_string()));
                    }
                }
                Some(BridgeInput::Command { id, command }) => {
                    let reply = engine.handle_command(command).await;
                    if let Err(e) = bridge::write_reply(id, &reply) {
                        msg_error!(Message::EngineEventFailed(e.to_string()));
                    }
                }
                None => {
                    msg_info!(Message::BridgeDisconnected);
                    break;
                }
            },
            event = idle_rx.recv() => {
                if let Some(event) = event {
                    if let Err(e) = engine.handle_event(event).await {
                        msg_error!(Message::EngineEventFailed(e.to_string()));
                    }
                }
            },
            _ = sync_timer.tick() => {
                if let Err(e) = engine.handle_event(HostEvent::SyncTick).await {
                    msg_warning!(Message::SyncFailed(e.to_string()));
                }
            },
            _ = catalog_timer.tick() => {
                if let Err(e) = engine.handle_event(HostEvent::CatalogTick).await {
                    msg_warning!(Message::CatalogRefreshFailed(e.to_string()));
                }
            },
            _ = &mut shutdown_rx => {
                break;
            }
        }
    }

    msg_info!(Message::WatchShuttingDown);
    engine.shutdown().await;

    reader.abort();
    idle_task.abort();
    msg_info!(Message::WatchStopped);
    Ok(())
}
