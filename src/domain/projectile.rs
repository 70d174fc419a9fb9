// Pooled projectiles: dormant slots are recycled instead of allocated.

/// One pooled projectile.
///
/// A projectile is either dormant (inert, invisible, non-collidable) or active
/// (visible, collidable, moving on a straight or parabolic path). There is no
/// other state; activation and retirement just flip `active` in place.
#[derive(Debug, Clone)]
pub struct SimProjectile {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub gx: f32,
    pub gy: f32,
    /// Heading in radians, screen coordinates (+y down).
    pub rot: f32,
    /// World-space collision radius in pixels.
    pub radius: f32,
    pub active: bool,
    /// When set, the heading follows the velocity each tick so the sprite
    /// orientation tracks gravity-bent trajectories.
    pub tracking: bool,
    pub scale: f32,
    /// Per-tick scale increment; zero disables growth.
    pub scale_growth: f32,
}

impl SimProjectile {
    fn dormant(radius: f32, tracking: bool, scale_growth: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            gx: 0.0,
            gy: 0.0,
            rot: 0.0,
            radius,
            active: false,
            tracking,
            scale: 1.0,
            scale_growth,
        }
    }

    /// Activates the projectile at an origin with a heading in degrees.
    ///
    /// Resets position and scale, derives the velocity from the heading, and
    /// stores the gravity applied during integration.
    pub fn fire(&mut self, x: f32, y: f32, angle_deg: f32, speed: f32, gravity: (f32, f32)) {
        let rot = angle_deg.to_radians();
        self.x = x;
        self.y = y;
        self.vx = rot.cos() * speed;
        self.vy = rot.sin() * speed;
        (self.gx, self.gy) = gravity;
        self.rot = rot;
        self.scale = 1.0;
        self.active = true;
    }

    /// Returns the projectile to the dormant state. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Circle overlap against another circle at `(x, y)`.
    pub fn overlaps(&self, x: f32, y: f32, radius: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        let hit = self.radius * self.scale + radius;
        dx * dx + dy * dy <= hit * hit
    }
}

/// Fixed-capacity projectile pool for one weapon variant.
///
/// Every slot is constructed eagerly; acquisition scans for the first dormant
/// slot and never allocates. An exhausted pool yields `None` — the caller
/// drops the shot, it does not grow the pool.
pub struct ProjectilePool {
    slots: Vec<SimProjectile>,
}

impl ProjectilePool {
    pub fn new(capacity: usize, radius: f32, tracking: bool, scale_growth: f32) -> Self {
        Self {
            slots: vec![SimProjectile::dormant(radius, tracking, scale_growth); capacity],
        }
    }

    /// First dormant slot, or `None` when the pool is saturated.
    pub fn acquire(&mut self) -> Option<&mut SimProjectile> {
        self.slots.iter_mut().find(|p| !p.active)
    }

    /// Hard reset: every slot back to dormant, active or not.
    pub fn deactivate_all(&mut self) {
        for p in &mut self.slots {
            p.deactivate();
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimProjectile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SimProjectile> {
        self.slots.iter_mut()
    }
}
