/// Gameplay tuning for enemy craft.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Enemies seeded per world edge at session start.
    pub per_side: usize,

    /// World-space collision radius in pixels.
    pub radius: f32,

    /// Upper bound on horizontal drift toward the far side, px/s.
    pub max_drift: f32,

    /// Bound on random vertical jitter, px/s either way.
    pub max_jitter: f32,

    /// Enemies never spawn above this line (HUD band).
    pub spawn_band_top: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            per_side: 4,
            radius: 24.0,
            max_drift: 24.0,
            max_jitter: 6.0,
            spawn_band_top: 150.0,
        }
    }
}
