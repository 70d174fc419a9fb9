// Polling state-sync client against the remote game-state authority.

use crate::interface_adapters::protocol::RemoteGameState;
use crate::use_cases::GameEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Failure modes of a single poll attempt. All of them are non-fatal: the
/// attempt is logged and dropped, and the next timer firing retries.
#[derive(Debug)]
pub enum SyncError {
    /// Deadline elapsed before the request settled; a late response is
    /// discarded.
    Timeout,
    /// Connection-level failure.
    Request(reqwest::Error),
    /// Non-2xx response status.
    Status(reqwest::StatusCode),
    /// Body was not a well-formed state payload.
    Decode(reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub base_url: String,
    pub poll_interval: Duration,
    pub poll_timeout: Duration,
}

/// One request cycle: `GET {base_url}/state` raced against the deadline.
pub async fn poll_once(
    http: &reqwest::Client,
    base_url: &str,
    deadline: Duration,
) -> Result<RemoteGameState, SyncError> {
    let url = format!("{base_url}/state");
    let attempt = async {
        let response = http.get(&url).send().await.map_err(SyncError::Request)?;
        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }
        response
            .json::<RemoteGameState>()
            .await
            .map_err(SyncError::Decode)
    };

    tokio::time::timeout(deadline, attempt)
        .await
        .map_err(|_| SyncError::Timeout)?
}

/// Recurring poll loop, independent of the simulation tick rate.
///
/// Each timer firing spawns its own request task: a slow poll neither delays
/// the next one nor orders itself against it, so whichever payload arrives is
/// the one applied. Successful payloads are forwarded to the session as
/// explicit weapon-level events; every failure is logged and swallowed. The
/// task ends once the session side of the channel is gone.
pub async fn poll_task(settings: SyncSettings, input_tx: mpsc::Sender<GameEvent>) {
    let http = reqwest::Client::new();
    let mut interval = tokio::time::interval(settings.poll_interval);

    loop {
        interval.tick().await;
        if input_tx.is_closed() {
            debug!("session closed, stopping state polls");
            break;
        }

        let http = http.clone();
        let base_url = settings.base_url.clone();
        let deadline = settings.poll_timeout;
        let tx = input_tx.clone();
        tokio::spawn(async move {
            match poll_once(&http, &base_url, deadline).await {
                Ok(state) => {
                    debug!(weapon_level = state.weapon_level, "state poll succeeded");
                    let _ = tx.send(GameEvent::SetWeaponLevel(state.weapon_level)).await;
                }
                Err(e) => warn!(error = ?e, "state poll failed"),
            }
        });
    }
}
