// Use cases layer: the session loop and its channel protocol.

pub mod game;
pub mod types;

pub use types::{GameEvent, HudState, WorldUpdate};
