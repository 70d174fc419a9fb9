// Domain layer: core simulation types and rules.

pub mod projectile;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod weapon;

pub use projectile::{ProjectilePool, SimProjectile};
pub use state::{
    EnemySnapshot, Facing, PlayerInput, PlayerShip, ProjectileSnapshot, ShipSnapshot, SimEnemy,
};
pub use weapon::{Weapon, WeaponController, WeaponKind};
