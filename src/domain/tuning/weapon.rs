/// Gameplay tuning for one weapon variant.
///
/// Angles are degrees in screen coordinates (+y down): 315 climbs to the
/// right, 225 climbs to the left, 0/180 are horizontal beams.
#[derive(Debug, Clone, Copy)]
pub struct WeaponTuning {
    /// Pooled projectiles; sized so cooldown rate times on-screen lifetime
    /// stays under capacity in normal play. Overflow is dropped, never grown.
    pub pool_size: usize,

    /// Projectile speed in pixels per second.
    pub speed: f32,

    /// Minimum interval between successful fire events.
    pub cooldown_ms: u64,

    /// Lateral muzzle distance from the ship center, sign-flipped by facing.
    pub muzzle_offset: f32,

    pub base_angle_right: f32,
    pub base_angle_left: f32,

    /// Per-ray offsets added to the base angle; one projectile per entry.
    pub ray_offsets: &'static [f32],

    /// Gravity applied over the projectile's flight.
    pub gravity: (f32, f32),

    /// Heading follows velocity (gravity-bent trajectories).
    pub tracking: bool,

    /// Per-tick scale increment (beam thickening); zero disables.
    pub scale_growth: f32,

    /// World-space collision radius in pixels.
    pub projectile_radius: f32,
}

impl WeaponTuning {
    pub fn single() -> Self {
        Self {
            pool_size: 64,
            speed: 600.0,
            cooldown_ms: 500,
            muzzle_offset: 70.0,
            base_angle_right: 315.0,
            base_angle_left: 225.0,
            ray_offsets: &[0.0],
            gravity: (0.0, 600.0),
            tracking: true,
            scale_growth: 0.0,
            projectile_radius: 6.0,
        }
    }

    pub fn triple() -> Self {
        Self {
            pool_size: 128,
            speed: 600.0,
            cooldown_ms: 1000,
            muzzle_offset: 70.0,
            base_angle_right: 315.0,
            base_angle_left: 225.0,
            ray_offsets: &[10.0, 0.0, -10.0],
            gravity: (0.0, 600.0),
            tracking: true,
            scale_growth: 0.0,
            projectile_radius: 6.0,
        }
    }

    pub fn beam() -> Self {
        Self {
            pool_size: 64,
            speed: 2000.0,
            // Effectively continuous; the tick rate is the real limiter.
            cooldown_ms: 1,
            muzzle_offset: 90.0,
            base_angle_right: 0.0,
            base_angle_left: 180.0,
            ray_offsets: &[0.0],
            gravity: (0.0, 0.0),
            tracking: false,
            scale_growth: 0.02,
            projectile_radius: 8.0,
        }
    }
}
