use crate::domain::projectile::ProjectilePool;
use crate::domain::tuning::world::WorldBounds;

/// Integrates every active projectile in a pool by one tick.
///
/// Gravity feeds velocity, velocity feeds position. Tracking projectiles keep
/// their heading on the velocity so the sprite follows the arc; growing ones
/// thicken by their configured rate. A projectile that leaves the world
/// rectangle retires to the dormant state in place — pool slots are never
/// dropped.
pub fn tick_pool(pool: &mut ProjectilePool, dt: f32, bounds: WorldBounds) {
    for p in pool.iter_mut() {
        if !p.active {
            continue;
        }

        p.vx += p.gx * dt;
        p.vy += p.gy * dt;
        p.x += p.vx * dt;
        p.y += p.vy * dt;

        if p.tracking {
            p.rot = p.vy.atan2(p.vx);
        }
        if p.scale_growth > 0.0 {
            p.scale += p.scale_growth;
        }

        if !bounds.contains(p.x, p.y, p.radius * p.scale) {
            p.deactivate();
        }
    }
}
