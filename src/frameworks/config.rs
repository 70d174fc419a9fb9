use std::{env, time::Duration};

// Runtime/client constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

const LOCAL_STATE_SERVER_URL: &str = "http://127.0.0.1:9000";
const REMOTE_STATE_SERVER_URL: &str = "https://ganglia-server.herokuapp.com";

/// Base URL of the remote state authority.
///
/// `STATE_SERVER_URL` overrides everything; otherwise `STATE_SERVER_LOCAL`
/// selects the local development endpoint. A static choice made at startup.
pub fn state_server_url() -> String {
    if let Ok(url) = env::var("STATE_SERVER_URL") {
        return url;
    }
    if env::var("STATE_SERVER_LOCAL").is_ok() {
        LOCAL_STATE_SERVER_URL.to_string()
    } else {
        REMOTE_STATE_SERVER_URL.to_string()
    }
}

pub fn state_poll_interval() -> Duration {
    let millis = env::var("STATE_POLL_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(250);
    Duration::from_millis(millis)
}

pub fn state_poll_timeout() -> Duration {
    let millis = env::var("STATE_POLL_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}
