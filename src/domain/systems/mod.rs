// Per-tick simulation systems over the domain state.

pub mod collision;
pub mod enemies;
pub mod movement;
pub mod projectiles;
