/// Gameplay tuning for the player ship.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Vertical movement speed in pixels per second.
    pub speed: f32,

    /// Hull points at session start.
    pub max_hull: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 100.0,
            max_hull: 100,
        }
    }
}
