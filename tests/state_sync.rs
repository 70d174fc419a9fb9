mod support;

use axum::http::StatusCode;
use game_client::interface_adapters::clients::sync::{
    SyncError, SyncSettings, poll_once, poll_task,
};
use game_client::use_cases::GameEvent;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn when_state_settles_before_the_deadline_then_the_exact_level_is_delivered() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, r#"{"weaponLevel": 2}"#).await;
    let (tx, mut rx) = mpsc::channel(16);
    tokio::spawn(poll_task(
        SyncSettings {
            base_url,
            poll_interval: Duration::from_millis(50),
            poll_timeout: Duration::from_millis(500),
        },
        tx,
    ));

    let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("a poll should settle well inside the deadline")
        .expect("poll task alive");
    assert!(matches!(event, GameEvent::SetWeaponLevel(2)));
}

#[tokio::test]
async fn when_the_response_is_slower_than_the_deadline_then_no_event_is_delivered() {
    let base_url = support::spawn_state_stub(
        Duration::from_millis(400),
        StatusCode::OK,
        r#"{"weaponLevel": 2}"#,
    )
    .await;
    let (tx, mut rx) = mpsc::channel(16);
    tokio::spawn(poll_task(
        SyncSettings {
            base_url,
            poll_interval: Duration::from_millis(100),
            poll_timeout: Duration::from_millis(100),
        },
        tx,
    ));

    let outcome = tokio::time::timeout(Duration::from_millis(600), rx.recv()).await;
    assert!(outcome.is_err(), "timed-out polls must not deliver state");
}

#[tokio::test]
async fn when_the_body_is_malformed_then_the_attempt_is_swallowed() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, "not even json").await;
    let (tx, mut rx) = mpsc::channel(16);
    tokio::spawn(poll_task(
        SyncSettings {
            base_url,
            poll_interval: Duration::from_millis(50),
            poll_timeout: Duration::from_millis(500),
        },
        tx,
    ));

    let outcome = tokio::time::timeout(Duration::from_millis(400), rx.recv()).await;
    assert!(outcome.is_err(), "decode failures must not deliver state");
}

#[tokio::test]
async fn when_polled_once_then_the_payload_round_trips() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, r#"{"weaponLevel": 3}"#).await;
    let http = reqwest::Client::new();

    let state = poll_once(&http, &base_url, Duration::from_millis(500))
        .await
        .expect("stub answers immediately");
    assert_eq!(state.weapon_level, 3);
}

#[tokio::test]
async fn when_the_server_errors_then_poll_once_reports_the_status() {
    let base_url = support::spawn_state_stub(
        Duration::ZERO,
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"weaponLevel": 3}"#,
    )
    .await;
    let http = reqwest::Client::new();

    let result = poll_once(&http, &base_url, Duration::from_millis(500)).await;
    assert!(matches!(result, Err(SyncError::Status(_))));
}

#[tokio::test]
async fn when_the_deadline_fires_first_then_poll_once_reports_timeout() {
    let base_url = support::spawn_state_stub(
        Duration::from_millis(300),
        StatusCode::OK,
        r#"{"weaponLevel": 3}"#,
    )
    .await;
    let http = reqwest::Client::new();

    let result = poll_once(&http, &base_url, Duration::from_millis(50)).await;
    assert!(matches!(result, Err(SyncError::Timeout)));
}
