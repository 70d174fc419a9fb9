use crate::domain::state::SimEnemy;
use crate::domain::weapon::Weapon;
use tracing::info;

/// Pairs each live enemy against the active weapon's live projectiles.
///
/// Selection is the collision mask: only the weapon passed in participates.
/// On the first overlap in scan order the enemy is flagged for deferred
/// removal and the projectile retires immediately; remaining projectiles are
/// left alone for that enemy. Returns the number of kills this tick.
pub fn resolve_hits(enemies: &mut [SimEnemy], weapon: &mut Weapon, enemy_radius: f32) -> usize {
    let kind = weapon.kind();
    let pool = weapon.pool_mut();
    let mut kills = 0;

    for enemy in enemies.iter_mut() {
        if enemy.pending_removal {
            continue;
        }
        for p in pool.iter_mut() {
            if !p.active {
                continue;
            }
            if p.overlaps(enemy.x, enemy.y, enemy_radius) {
                enemy.pending_removal = true;
                p.deactivate();
                kills += 1;
                info!(enemy_id = enemy.id, weapon = ?kind, "enemy destroyed");
                break;
            }
        }
    }
    kills
}

/// Deferred-deletion sweep, run at the start of each tick before any scan
/// iterates the set.
pub fn sweep_removals(enemies: &mut Vec<SimEnemy>) {
    enemies.retain(|e| !e.pending_removal);
}
