use bytemuck::{Pod, Zeroable};

/// Unique identifier for a letter target in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// A sound event emitted by the game logic.
/// The numeric value maps to a game-defined sound in the TypeScript SoundManager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A letter of the target word was shot in order.
pub const SOUND_CORRECT: SoundEvent = SoundEvent(1);
/// A letter outside the spelling order was shot.
pub const SOUND_WRONG: SoundEvent = SoundEvent(2);
/// A new target word was announced.
pub const SOUND_ANNOUNCEMENT: SoundEvent = SoundEvent(3);

/// A game event communicated from Rust to TypeScript via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}
