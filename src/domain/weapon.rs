// Weapons: cooldown-gated spray patterns over a projectile pool, and the
// three-slot controller that cycles between them.

use crate::domain::projectile::ProjectilePool;
use crate::domain::state::{Facing, PlayerShip};
use crate::domain::tuning::weapon::WeaponTuning;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeaponKind {
    #[default]
    Single,
    Triple,
    Beam,
}

/// One weapon variant: a pool plus a fire-rate gate and spawn geometry.
pub struct Weapon {
    kind: WeaponKind,
    tuning: WeaponTuning,
    pool: ProjectilePool,
    /// Simulation timestamp (ms) of the next eligible fire event.
    next_fire_at_ms: u64,
}

impl Weapon {
    pub fn new(kind: WeaponKind, tuning: WeaponTuning) -> Self {
        Self {
            kind,
            tuning,
            pool: ProjectilePool::new(
                tuning.pool_size,
                tuning.projectile_radius,
                tuning.tracking,
                tuning.scale_growth,
            ),
            next_fire_at_ms: 0,
        }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut ProjectilePool {
        &mut self.pool
    }

    /// Fires the variant's spray pattern from the source ship.
    ///
    /// No-op inside the cooldown window. The muzzle sits `muzzle_offset`
    /// pixels to the ship's facing side, and each ray uses the facing-side
    /// base angle plus its pattern offset. A saturated pool drops the
    /// remaining rays silently. Returns the number of projectiles spawned.
    pub fn fire(&mut self, source: &PlayerShip, now_ms: u64) -> usize {
        if now_ms < self.next_fire_at_ms {
            return 0;
        }

        let tuning = self.tuning;
        let x = source.x + tuning.muzzle_offset * source.facing.sign();
        let y = source.y;
        let base_angle = match source.facing {
            Facing::Right => tuning.base_angle_right,
            Facing::Left => tuning.base_angle_left,
        };

        let mut spawned = 0;
        for offset in tuning.ray_offsets {
            let Some(slot) = self.pool.acquire() else {
                break;
            };
            slot.fire(x, y, base_angle + offset, tuning.speed, tuning.gravity);
            spawned += 1;
        }

        self.next_fire_at_ms = now_ms + tuning.cooldown_ms;
        spawned
    }

    /// Hard reset used on weapon switch: every pooled projectile dormant.
    pub fn reset(&mut self) {
        self.pool.deactivate_all();
    }
}

/// Ordered weapon slots with unlock gating and the cycle transition.
///
/// Exactly one weapon is selected at a time. Fire requests only reach the
/// selected weapon, and only while the remotely-synced unlock level exceeds
/// its slot index.
pub struct WeaponController {
    weapons: [Weapon; 3],
    current: usize,
    unlocked_level: u8,
}

pub const MAX_WEAPON_LEVEL: u8 = 3;

impl WeaponController {
    pub fn new() -> Self {
        Self {
            weapons: [
                Weapon::new(WeaponKind::Single, WeaponTuning::single()),
                Weapon::new(WeaponKind::Triple, WeaponTuning::triple()),
                Weapon::new(WeaponKind::Beam, WeaponTuning::beam()),
            ],
            current: 0,
            // Locked until the first successful state poll.
            unlocked_level: 0,
        }
    }

    /// Forwards to the selected weapon when its tier is unlocked.
    pub fn fire(&mut self, source: &PlayerShip, now_ms: u64) -> usize {
        if (self.unlocked_level as usize) <= self.current {
            return 0;
        }
        self.weapons[self.current].fire(source, now_ms)
    }

    /// Advances selection to the next slot, wrapping after the last.
    ///
    /// The outgoing weapon is hard-reset, so a switch never leaves stray
    /// live projectiles behind.
    pub fn cycle_next(&mut self) -> WeaponKind {
        self.weapons[self.current].reset();
        self.current = (self.current + 1) % self.weapons.len();
        self.weapons[self.current].kind()
    }

    /// Applies a remotely-synced unlock level, clamped to the known tiers.
    pub fn set_unlocked_level(&mut self, level: u8) {
        self.unlocked_level = level.min(MAX_WEAPON_LEVEL);
    }

    pub fn unlocked_level(&self) -> u8 {
        self.unlocked_level
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn active_weapon(&self) -> &Weapon {
        &self.weapons[self.current]
    }

    pub fn active_weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapons[self.current]
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    pub fn weapons_mut(&mut self) -> impl Iterator<Item = &mut Weapon> {
        self.weapons.iter_mut()
    }
}

impl Default for WeaponController {
    fn default() -> Self {
        Self::new()
    }
}
