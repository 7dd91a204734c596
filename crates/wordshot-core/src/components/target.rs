use crate::api::types::TargetId;
use glam::Vec3;

/// Hitbox half-size of a letter target: the 2 x 2 x 0.5 letter slab.
pub const TARGET_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.0, 0.25);

/// A spawned, shootable letter drifting through the scene.
/// Fat struct over components — simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct LetterTarget {
    /// Unique identifier.
    pub id: TargetId,
    /// Uppercase A-Z.
    pub letter: char,
    /// Lane index the target travels in.
    pub row: usize,
    /// Position in scene space.
    pub pos: Vec3,
    /// Horizontal velocity in units/s. Motion is x-only; the other axes
    /// stay fixed for the lifetime of the target.
    pub vel_x: f32,
    /// Y-axis spin in radians, advanced each tick for readability.
    pub rotation: f32,
    /// Game-clock second the target was spawned at.
    pub spawned_at: f64,
    /// Hitbox half-size.
    pub half_extents: Vec3,
}

impl LetterTarget {
    /// Create a new target at the origin.
    pub fn new(id: TargetId, letter: char) -> Self {
        Self {
            id,
            letter,
            row: 0,
            pos: Vec3::ZERO,
            vel_x: 0.0,
            rotation: 0.0,
            spawned_at: 0.0,
            half_extents: TARGET_HALF_EXTENTS,
        }
    }

    // -- Builder pattern --

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel_x(mut self, vel_x: f32) -> Self {
        self.vel_x = vel_x;
        self
    }

    pub fn with_spawned_at(mut self, spawned_at: f64) -> Self {
        self.spawned_at = spawned_at;
        self
    }

    /// Age in seconds at game-clock time `now`.
    pub fn age(&self, now: f64) -> f64 {
        now - self.spawned_at
    }

    /// Axis-aligned hitbox as (min, max) corners.
    pub fn aabb(&self) -> (Vec3, Vec3) {
        (self.pos - self.half_extents, self.pos + self.half_extents)
    }
}
