use crate::domain::state::{Facing, SimEnemy};
use crate::domain::tuning::enemy::EnemyTuning;
use crate::domain::tuning::world::WorldBounds;
use rand::Rng;

/// Seeds the session's enemy population: one wave per world edge, spread
/// randomly over the band below the HUD margin.
pub fn seed_enemies(
    rng: &mut impl Rng,
    tuning: EnemyTuning,
    bounds: WorldBounds,
    next_id: &mut u64,
) -> Vec<SimEnemy> {
    let mut enemies = Vec::with_capacity(tuning.per_side * 2);
    for side in [Facing::Left, Facing::Right] {
        let x = match side {
            Facing::Left => 0.0,
            Facing::Right => bounds.width,
        };
        for _ in 0..tuning.per_side {
            enemies.push(SimEnemy {
                id: *next_id,
                x,
                y: rng.gen_range(tuning.spawn_band_top..bounds.height),
                side,
                pending_removal: false,
            });
            *next_id += 1;
        }
    }
    enemies
}

/// Drifts each live enemy toward the far side with a little vertical jitter.
pub fn tick_enemies(
    enemies: &mut [SimEnemy],
    rng: &mut impl Rng,
    dt: f32,
    tuning: EnemyTuning,
    bounds: WorldBounds,
) {
    for e in enemies.iter_mut() {
        if e.pending_removal {
            continue;
        }
        let drift = rng.gen_range(0.0..tuning.max_drift) * dt;
        e.x += match e.side {
            Facing::Left => drift,
            Facing::Right => -drift,
        };
        e.y += rng.gen_range(-tuning.max_jitter..tuning.max_jitter) * dt;
        e.x = e.x.clamp(0.0, bounds.width);
        e.y = e.y.clamp(0.0, bounds.height);
    }
}
