use crate::api::game::EngineContext;
use crate::components::target::LetterTarget;
use crate::core::rng::Rng;
use glam::Vec3;
use serde::Serialize;

/// The spawnable alphabet.
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of horizontal lanes targets travel in.
pub const ROW_COUNT: usize = 3;

/// Lane heights, top to bottom.
pub const LANE_YS: [f32; ROW_COUNT] = [5.0, 2.0, -1.0];

/// Targets enter from either outer edge.
pub const SPAWN_X: f32 = 15.0;

/// Fixed depth targets travel at.
pub const TARGET_DEPTH: f32 = -10.0;

/// Horizontal speed in units/s, always directed toward center.
pub const LETTER_SPEED: f32 = 1.2;

/// Which edge a target entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// What the spawner just produced, surfaced to the HUD during the
/// readability pause.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpawnInfo {
    pub letter: char,
    pub row: usize,
    pub side: Side,
}

/// Create one letter target with a random letter, lane, and side, and
/// insert it into the registry. The starting x sits at the outer bound of
/// the chosen side; velocity points toward center.
pub fn spawn(ctx: &mut EngineContext, rng: &mut Rng) -> SpawnInfo {
    let letter = LETTERS[rng.next_int(LETTERS.len() as u32) as usize] as char;
    let row = rng.next_int(ROW_COUNT as u32) as usize;
    let side = if rng.next_bool() { Side::Right } else { Side::Left };

    let (x, vel_x) = match side {
        Side::Right => (SPAWN_X, -LETTER_SPEED),
        Side::Left => (-SPAWN_X, LETTER_SPEED),
    };

    let id = ctx.next_id();
    let now = ctx.now();
    ctx.registry.spawn(
        LetterTarget::new(id, letter)
            .with_row(row)
            .with_pos(Vec3::new(x, LANE_YS[row], TARGET_DEPTH))
            .with_vel_x(vel_x)
            .with_spawned_at(now),
    );

    SpawnInfo { letter, row, side }
}
