// Framework bootstrap for the client runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::sync::{SyncSettings, poll_task};
use crate::use_cases::game::session_task;
use crate::use_cases::{GameEvent, HudState, WorldUpdate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Channel endpoints the host environment drives a running session through.
///
/// Input (keyboard, weapon switch) goes in through `input_tx`; rendering
/// subscribes to `world_tx` snapshots; the HUD watches `hud_rx` for texture
/// swaps. `shutdown` ends the session and, through channel closure, the
/// state poller.
#[derive(Clone)]
pub struct SessionHandle {
    pub input_tx: mpsc::Sender<GameEvent>,
    pub world_tx: broadcast::Sender<WorldUpdate>,
    pub hud_rx: watch::Receiver<HudState>,
    pub shutdown: Arc<Notify>,
}

/// Wires the channels and spawns the session and state-poll tasks.
pub fn start_session(tick_interval: Duration, sync: SyncSettings) -> SessionHandle {
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(config::INPUT_CHANNEL_CAPACITY);
    let (world_tx, _world_rx) = broadcast::channel::<WorldUpdate>(config::WORLD_BROADCAST_CAPACITY);
    let (hud_tx, hud_rx) = watch::channel(HudState::default());
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(session_task(
        input_rx,
        world_tx.clone(),
        hud_tx,
        tick_interval,
        shutdown.clone(),
    ));
    tokio::spawn(poll_task(sync, input_tx.clone()));

    SessionHandle {
        input_tx,
        world_tx,
        hud_rx,
        shutdown,
    }
}

/// Binary entry: configured session until ctrl-c.
pub async fn run() -> std::io::Result<()> {
    init_runtime();

    let sync = SyncSettings {
        base_url: config::state_server_url(),
        poll_interval: config::state_poll_interval(),
        poll_timeout: config::state_poll_timeout(),
    };
    tracing::info!(
        base_url = %sync.base_url,
        poll_interval_ms = sync.poll_interval.as_millis(),
        poll_timeout_ms = sync.poll_timeout.as_millis(),
        "state sync configured"
    );

    let session = start_session(config::TICK_INTERVAL, sync);

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    session.shutdown.notify_one();
    Ok(())
}
