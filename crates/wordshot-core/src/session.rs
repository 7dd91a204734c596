use crate::api::game::{EngineContext, Game, FIXED_DT};
use crate::api::types::{GameEvent, SoundEvent};
use crate::components::target::LetterTarget;
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::shooter::{HudSnapshot, WordShooter, EVENT_GAME_OVER};

/// Overall game phase. `Playing` owns live game state; the transition to
/// `GameOver` copies the final score out as immutable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    Playing,
    GameOver { final_score: u32 },
}

/// Owns the shooter, engine context, and input queue for one play-through
/// and drives them at a fixed timestep. All periodic work lives inside
/// `tick`, so dropping the playing state (restart or `end`) tears down
/// every pending deferred action at once; nothing can fire into a
/// destroyed session.
pub struct Session {
    phase: SessionPhase,
    shooter: Option<WordShooter>,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Start,
            shooter: None,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            timestep: FixedTimestep::new(FIXED_DT),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Final score once the session has ended, None before that.
    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            SessionPhase::GameOver { final_score } => Some(final_score),
            _ => None,
        }
    }

    /// Begin a fresh play-through (also restarts from `gameOver`).
    pub fn start(&mut self, seed: u64) {
        if self.phase == SessionPhase::Playing {
            log::warn!("session restarted while still playing");
        }
        self.ctx = EngineContext::new();
        self.input = InputQueue::new();
        self.timestep = FixedTimestep::new(FIXED_DT);

        let mut shooter = WordShooter::new(seed);
        shooter.init(&mut self.ctx);
        self.shooter = Some(shooter);
        self.phase = SessionPhase::Playing;
        log::info!("session started (seed {})", seed);
    }

    /// Tear down the playing state. Ending a session that is not playing
    /// is logged and otherwise a no-op.
    pub fn end(&mut self) {
        match self.phase {
            SessionPhase::Playing | SessionPhase::GameOver { .. } => {
                self.shooter = None;
                self.ctx = EngineContext::new();
                self.input = InputQueue::new();
                self.phase = SessionPhase::Start;
                log::info!("session ended");
            }
            SessionPhase::Start => {
                log::warn!("session_end: no active session");
            }
        }
    }

    /// Queue an input event for the next tick. Ignored outside `playing`.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.phase == SessionPhase::Playing {
            self.input.push(event);
        }
    }

    /// Update the camera aspect on viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(shooter) = self.shooter.as_mut() {
            shooter.camera_mut().resize(width, height);
        }
    }

    /// Run one frame: accumulate fixed steps, update the game, drain
    /// input, then promote a game-over handoff into the session phase.
    pub fn tick(&mut self, frame_dt: f32) {
        let shooter = match self.shooter.as_mut() {
            Some(s) => s,
            None => {
                // Keep last frame's events from being re-read forever.
                self.ctx.clear_frame_data();
                return;
            }
        };

        self.ctx.clear_frame_data();
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            shooter.update(&mut self.ctx, &self.input);
        }
        self.input.drain();

        // The handoff event stays in the frame buffer for the bridge to
        // forward; the playing state itself is released immediately.
        if let Some(score) = self
            .ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_GAME_OVER)
            .map(|e| e.a as u32)
        {
            self.phase = SessionPhase::GameOver { final_score: score };
            self.shooter = None;
            self.ctx.registry.clear();
            log::info!("session over, final score {}", score);
        }
    }

    /// HUD snapshot while playing, None otherwise.
    pub fn hud(&self) -> Option<HudSnapshot> {
        self.shooter.as_ref().map(|s| s.hud())
    }

    /// Live targets for the render pass.
    pub fn targets(&self) -> impl Iterator<Item = &LetterTarget> {
        self.ctx.registry.iter()
    }

    /// Game events emitted this frame.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Sound events emitted this frame.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn starts_into_playing() {
        let mut session = Session::new();
        assert_eq!(session.phase(), SessionPhase::Start);
        session.start(42);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert!(session.hud().is_some());
    }

    #[test]
    fn full_session_reaches_game_over_with_carried_score() {
        let mut session = Session::new();
        session.start(42);

        // 60 s countdown + 5 s terminal hold, with headroom.
        let mut over_frames = 0;
        for _ in 0..(70 * 60) {
            session.tick(FRAME);
            if session.events().iter().any(|e| e.kind == EVENT_GAME_OVER) {
                over_frames += 1;
            }
        }

        // No shots were fired, so the carried score is zero.
        assert_eq!(session.phase(), SessionPhase::GameOver { final_score: 0 });
        assert_eq!(session.final_score(), Some(0));
        // The handoff event is visible for exactly one frame.
        assert_eq!(over_frames, 1);
        assert!(session.hud().is_none());
    }

    #[test]
    fn restart_from_game_over_begins_fresh() {
        let mut session = Session::new();
        session.start(1);
        for _ in 0..(70 * 60) {
            session.tick(FRAME);
        }
        assert!(matches!(session.phase(), SessionPhase::GameOver { .. }));

        session.start(2);
        assert_eq!(session.phase(), SessionPhase::Playing);
        let hud = session.hud().unwrap();
        assert_eq!(hud.score, 0);
        assert_eq!(hud.time_left, 60);
    }

    #[test]
    fn end_releases_playing_state() {
        let mut session = Session::new();
        session.start(3);
        session.tick(FRAME);
        session.end();
        assert_eq!(session.phase(), SessionPhase::Start);
        assert!(session.hud().is_none());
        assert_eq!(session.targets().count(), 0);

        // Ending again is a logged no-op.
        session.end();
        assert_eq!(session.phase(), SessionPhase::Start);
    }

    #[test]
    fn input_outside_playing_is_dropped() {
        let mut session = Session::new();
        session.push_input(InputEvent::Pick { ndc_x: 0.0, ndc_y: 0.0 });
        session.tick(FRAME);
        assert_eq!(session.phase(), SessionPhase::Start);
    }

    #[test]
    fn targets_appear_after_the_first_spawn() {
        let mut session = Session::new();
        session.start(4);
        for _ in 0..90 {
            session.tick(FRAME);
        }
        assert_eq!(session.targets().count(), 1);
    }
}
