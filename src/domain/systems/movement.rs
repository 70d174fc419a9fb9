use crate::domain::state::{Facing, PlayerInput, PlayerShip};
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::tuning::world::WorldBounds;

/// Applies one tick of held input to the ship.
///
/// Left/right only flips facing; up/down moves vertically. Velocity does not
/// persist across ticks, and the ship never leaves the world rectangle.
pub fn tick_ship(
    ship: &mut PlayerShip,
    input: &PlayerInput,
    dt: f32,
    tuning: PlayerTuning,
    bounds: WorldBounds,
) {
    if input.left {
        ship.facing = Facing::Left;
    } else if input.right {
        ship.facing = Facing::Right;
    }

    let mut vy = 0.0;
    if input.up {
        vy = -tuning.speed;
    } else if input.down {
        vy = tuning.speed;
    }

    ship.y = (ship.y + vy * dt).clamp(0.0, bounds.height);
}
