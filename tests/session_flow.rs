mod support;

use axum::http::StatusCode;
use game_client::domain::state::PlayerInput;
use game_client::interface_adapters::clients::sync::SyncSettings;
use game_client::start_session;
use game_client::use_cases::{GameEvent, WorldUpdate};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

async fn next_update(rx: &mut broadcast::Receiver<WorldUpdate>) -> WorldUpdate {
    loop {
        match rx.recv().await {
            Ok(update) => return update,
            // A slow test runner may lag behind the tick rate; skip ahead.
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => panic!("session ended early"),
        }
    }
}

fn sync_against(base_url: String) -> SyncSettings {
    SyncSettings {
        base_url,
        poll_interval: Duration::from_millis(20),
        poll_timeout: Duration::from_millis(500),
    }
}

#[tokio::test]
async fn when_remote_unlocks_the_weapon_then_held_fire_spawns_projectiles() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, r#"{"weaponLevel": 3}"#).await;
    let session = start_session(Duration::from_millis(5), sync_against(base_url));
    let mut world_rx = session.world_tx.subscribe();

    session
        .input_tx
        .send(GameEvent::Input(PlayerInput {
            fire: true,
            ..Default::default()
        }))
        .await
        .expect("session alive");

    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if !next_update(&mut world_rx).await.projectiles.is_empty() {
                break;
            }
        }
    })
    .await
    .expect("projectiles should appear once the remote level is applied");

    session.shutdown.notify_one();
}

#[tokio::test]
async fn when_the_remote_level_stays_at_zero_then_held_fire_spawns_nothing() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, r#"{"weaponLevel": 0}"#).await;
    let session = start_session(Duration::from_millis(5), sync_against(base_url));
    let mut world_rx = session.world_tx.subscribe();

    session
        .input_tx
        .send(GameEvent::Input(PlayerInput {
            fire: true,
            ..Default::default()
        }))
        .await
        .expect("session alive");

    for _ in 0..40 {
        let update = next_update(&mut world_rx).await;
        assert!(
            update.projectiles.is_empty(),
            "a locked weapon must not fire"
        );
    }

    session.shutdown.notify_one();
}

#[tokio::test]
async fn when_cycle_event_arrives_then_hud_reflects_the_new_selection() {
    let base_url =
        support::spawn_state_stub(Duration::ZERO, StatusCode::OK, r#"{"weaponLevel": 3}"#).await;
    let session = start_session(Duration::from_millis(5), sync_against(base_url));
    let mut hud_rx = session.hud_rx.clone();

    session
        .input_tx
        .send(GameEvent::CycleWeapon)
        .await
        .expect("session alive");

    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            hud_rx.changed().await.expect("hud channel alive");
            if hud_rx.borrow().weapon_index == 1 {
                break;
            }
        }
    })
    .await
    .expect("hud should reflect the cycled weapon");

    session.shutdown.notify_one();
}

#[tokio::test]
async fn when_sync_target_is_unreachable_then_the_session_keeps_ticking() {
    // Nothing listens here; every poll fails and is swallowed.
    let session = start_session(
        Duration::from_millis(5),
        sync_against("http://127.0.0.1:9".to_string()),
    );
    let mut world_rx = session.world_tx.subscribe();

    let first = next_update(&mut world_rx).await;
    let later = next_update(&mut world_rx).await;
    assert!(later.tick > first.tick);

    session.shutdown.notify_one();
}
