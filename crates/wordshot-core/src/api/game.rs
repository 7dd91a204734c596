use crate::api::types::{GameEvent, SoundEvent, TargetId};
use crate::core::registry::TargetRegistry;
use crate::input::queue::InputQueue;

/// Fixed logic timestep in seconds. The browser animation frame is
/// accumulated into steps of this size.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 8).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 8).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: FIXED_DT,
            max_instances: 64,
            max_sounds: 8,
            max_events: 8,
        }
    }
}

/// The core contract the game fulfills.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state. Called once after construction.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick, invoked once per fixed step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
/// Every timer-driven mutation flows through one exclusive borrow of this
/// struct, so the single-threaded cooperative model needs no locking.
pub struct EngineContext {
    pub registry: TargetRegistry,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    next_id: u32,
    /// Game clock in seconds since session start. Advanced once per fixed
    /// step; all target ages and deferred deadlines are measured against it.
    clock: f64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            registry: TargetRegistry::new(),
            sounds: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            clock: 0.0,
        }
    }

    /// Generate the next unique target ID.
    pub fn next_id(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Current game clock in seconds.
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Advance the game clock by one step.
    pub fn advance_clock(&mut self, dt: f64) {
        self.clock += dt;
    }

    /// Emit a sound event to be forwarded to TypeScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
