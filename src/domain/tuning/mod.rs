// Gameplay tuning, kept separate from runtime/server configuration.

pub mod enemy;
pub mod player;
pub mod weapon;
pub mod world;
