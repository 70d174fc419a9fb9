// Use-case level inputs/outputs for the session loop.

use crate::domain::state::{EnemySnapshot, PlayerInput, ProjectileSnapshot, ShipSnapshot};
use crate::domain::weapon::WeaponKind;
use serde::Serialize;

/// Events flowing from the host environment and the sync client into the
/// session task. All weapon-level changes arrive here as explicit messages;
/// the controller owns its own state.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Held input for the coming ticks (movement, fire).
    Input(PlayerInput),
    /// Discrete weapon-switch press.
    CycleWeapon,
    /// Unlock level pushed by the state-sync client.
    SetWeaponLevel(u8),
}

/// Per-tick world snapshot broadcast to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdate {
    pub tick: u64,
    pub ship: ShipSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
}

/// HUD-facing selection state (weapon cursor and level icon). Published on
/// change only; consumers swap textures fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HudState {
    pub weapon: WeaponKind,
    pub weapon_index: usize,
    pub weapon_level: u8,
}
