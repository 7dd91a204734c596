use crate::core::registry::TargetRegistry;

/// Outer horizontal bound. A target crossing it while moving outward
/// bounces back instead of despawning.
pub const BOUNCE_BOUND: f32 = 14.0;

/// Targets older than this are expired regardless of bounce state, which
/// bounds the live set even if the player never shoots.
pub const MAX_TARGET_AGE: f64 = 20.0;

/// Y-axis spin rate in radians/s, for readability.
pub const SPIN_RATE: f32 = 0.6;

/// Advance every target one step: integrate velocity, spin, bounce at the
/// outer bounds, then expire stale targets. The caller skips this entirely
/// during the spawn-pause window, so a paused scene freezes in place.
pub fn step(registry: &mut TargetRegistry, dt: f32, now: f64) {
    for target in registry.iter_mut() {
        target.pos.x += target.vel_x * dt;
        target.rotation += SPIN_RATE * dt;

        // Reversal requires outward motion, so a fresh bounce cannot
        // reverse again until the target reaches the opposite bound.
        if (target.vel_x > 0.0 && target.pos.x > BOUNCE_BOUND)
            || (target.vel_x < 0.0 && target.pos.x < -BOUNCE_BOUND)
        {
            target.vel_x = -target.vel_x;
        }
    }

    registry.retain(|t| t.age(now) <= MAX_TARGET_AGE);
}
