use crate::domain::state::{PlayerInput, PlayerShip, SimEnemy};
use crate::domain::systems::{collision, enemies, movement, projectiles};
use crate::domain::tuning::enemy::EnemyTuning;
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::world::WorldBounds;
use crate::domain::weapon::WeaponController;
use crate::use_cases::{GameEvent, HudState, WorldUpdate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

/// The session task: single owner of all mutable simulation state.
///
/// Runs a fixed-step loop on `tick_interval`. Within one tick the pipeline
/// order is fixed: deferred-deletion sweep, collision resolution, input
/// drain, firing, integration, publish. Ticks never overlap; the only other
/// event source (the state poller) reaches this task through `input_rx`.
pub async fn session_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    hud_tx: watch::Sender<HudState>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    let player_tuning = PlayerTuning::default();
    let enemy_tuning = EnemyTuning::default();
    let bounds = WorldBounds::default();

    let (spawn_x, spawn_y) = bounds.center();
    let mut ship = PlayerShip::spawn_at(spawn_x, spawn_y, player_tuning.max_hull);
    let mut controller = WeaponController::new();
    let mut rng = StdRng::from_entropy();
    let mut next_enemy_id: u64 = 1;
    let mut foes: Vec<SimEnemy> =
        enemies::seed_enemies(&mut rng, enemy_tuning, bounds, &mut next_enemy_id);
    info!(enemies = foes.len(), "session started");

    let mut input = PlayerInput::default();
    let mut tick: u64 = 0;
    // Monotonic simulation clock in milliseconds; weapon cooldowns are
    // measured against it.
    let mut now_ms: u64 = 0;
    let dt = tick_interval.as_secs_f32();
    let dt_ms = tick_interval.as_millis().max(1) as u64;
    let mut last_hud = HudState::default();
    let mut field_cleared = false;

    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick, "session shutting down");
                break;
            }
            _ = interval.tick() => {}
        }

        // Evict enemies flagged on the previous tick, before anything scans
        // the set.
        collision::sweep_removals(&mut foes);

        // Only the selected weapon's projectiles are collidable.
        collision::resolve_hits(&mut foes, controller.active_weapon_mut(), enemy_tuning.radius);

        while let Ok(event) = input_rx.try_recv() {
            match event {
                GameEvent::Input(held) => input = held,
                GameEvent::CycleWeapon => {
                    let kind = controller.cycle_next();
                    debug!(weapon = ?kind, "weapon cycled");
                }
                GameEvent::SetWeaponLevel(level) => {
                    controller.set_unlocked_level(level);
                }
            }
        }

        if input.fire {
            controller.fire(&ship, now_ms);
        }

        movement::tick_ship(&mut ship, &input, dt, player_tuning, bounds);
        enemies::tick_enemies(&mut foes, &mut rng, dt, enemy_tuning, bounds);
        for weapon in controller.weapons_mut() {
            projectiles::tick_pool(weapon.pool_mut(), dt, bounds);
        }

        if foes.is_empty() && !field_cleared {
            field_cleared = true;
            info!(tick, "field cleared");
        }

        tick += 1;
        now_ms += dt_ms;

        let update = WorldUpdate {
            tick,
            ship: (&ship).into(),
            enemies: foes.iter().filter(|e| !e.pending_removal).map(Into::into).collect(),
            projectiles: controller
                .weapons()
                .flat_map(|w| w.pool().iter().filter(|p| p.active).map(Into::into))
                .collect(),
        };
        let _ = world_tx.send(update);

        let hud = HudState {
            weapon: controller.active_weapon().kind(),
            weapon_index: controller.current_index(),
            weapon_level: controller.unlocked_level(),
        };
        if hud != last_hud {
            last_hud = hud;
            let _ = hud_tx.send(hud);
        }
    }
}
