// Domain-level simulation entities and input/snapshot types.

use crate::domain::projectile::SimProjectile;
use serde::{Deserialize, Serialize};

/// Horizontal orientation, used both for the ship's muzzle side and for the
/// edge an enemy entered the world from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Lateral sign: offsets are added facing right, subtracted facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Held input for one tick, delivered by the host environment.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PlayerInput {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub fire: bool,
}

pub struct PlayerShip {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub hull: i32,
    pub max_hull: i32,
}

impl PlayerShip {
    pub fn spawn_at(x: f32, y: f32, max_hull: i32) -> Self {
        Self {
            x,
            y,
            facing: Facing::Right,
            hull: max_hull,
            max_hull,
        }
    }
}

pub struct SimEnemy {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Edge the enemy spawned from; it drifts toward the opposite side.
    pub side: Facing,
    /// Set by collision resolution; the enemy is evicted by the sweep at the
    /// start of the next tick, never mid-scan.
    pub pending_removal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipSnapshot {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub hull: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemySnapshot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileSnapshot {
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub scale: f32,
}

impl From<&PlayerShip> for ShipSnapshot {
    fn from(s: &PlayerShip) -> Self {
        Self {
            x: s.x,
            y: s.y,
            facing: s.facing,
            hull: s.hull,
        }
    }
}

impl From<&SimEnemy> for EnemySnapshot {
    fn from(e: &SimEnemy) -> Self {
        Self {
            id: e.id,
            x: e.x,
            y: e.y,
        }
    }
}

impl From<&SimProjectile> for ProjectileSnapshot {
    fn from(p: &SimProjectile) -> Self {
        Self {
            x: p.x,
            y: p.y,
            rot: p.rot,
            scale: p.scale,
        }
    }
}
