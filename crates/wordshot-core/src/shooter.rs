use std::fmt;

use serde::Serialize;

use crate::api::game::{EngineContext, Game, FIXED_DT};
use crate::api::types::{GameEvent, SOUND_ANNOUNCEMENT, SOUND_CORRECT, SOUND_WRONG};
use crate::core::rng::Rng;
use crate::core::time::IntervalTimer;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::Camera3D;
use crate::systems::spawner::{self, SpawnInfo};
use crate::systems::words::{ShotOutcome, WordProgress};
use crate::systems::{movement, picking};

// Pacing constants
pub const GAME_DURATION: u32 = 60; // seconds
pub const SPAWN_INTERVAL: f32 = 1.2;
pub const SPAWN_PAUSE: f64 = 5.0;
pub const WORD_ADVANCE_DELAY: f64 = 3.0;
pub const GAME_OVER_HOLD: f64 = 5.0;

// Scoring constants
pub const LETTER_POINTS: u32 = 100;
pub const WORD_BONUS: u32 = 500;
pub const WRONG_PENALTY: u32 = 20;

// Game event kinds (Rust -> TypeScript)
pub const EVENT_SCORE: f32 = 1.0;
pub const EVENT_WORD_STARTED: f32 = 2.0;
pub const EVENT_LETTER_SPAWNED: f32 = 3.0;
pub const EVENT_GAME_OVER: f32 = 4.0;

/// Feedback shown in the HUD, as a tagged variant rather than free text.
/// `Display` renders the text each variant shows the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMessage {
    GetReady,
    ShootWord(&'static str),
    NewLetter(char),
    GoodShot,
    WrongLetter,
    WordComplete,
    GameOver(u32),
}

impl StatusMessage {
    /// Stable tag for the presentation layer.
    pub fn kind(&self) -> &'static str {
        match self {
            StatusMessage::GetReady => "ready",
            StatusMessage::ShootWord(_) => "announce",
            StatusMessage::NewLetter(_) => "new-letter",
            StatusMessage::GoodShot => "correct",
            StatusMessage::WrongLetter => "wrong",
            StatusMessage::WordComplete => "complete",
            StatusMessage::GameOver(_) => "game-over",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::GetReady => write!(f, "Get Ready!"),
            StatusMessage::ShootWord(word) => write!(f, "Shoot: {}!", word),
            StatusMessage::NewLetter(letter) => write!(f, "New Letter: {}", letter),
            StatusMessage::GoodShot => write!(f, "Good shot!"),
            StatusMessage::WrongLetter => write!(f, "Wrong letter!"),
            StatusMessage::WordComplete => write!(f, "Great job! +{} points!", WORD_BONUS),
            StatusMessage::GameOver(score) => write!(f, "Game Over! Final Score: {}", score),
        }
    }
}

/// One line of HUD status: stable tag + display text.
#[derive(Debug, Clone, Serialize)]
pub struct StatusLine {
    pub kind: &'static str,
    pub text: String,
}

/// Read-only per-frame snapshot for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub time_left: u32,
    pub target_word: &'static str,
    pub progress: String,
    pub status: StatusLine,
    pub new_letter: Option<SpawnInfo>,
}

/// The word-shooter game: spawning, movement, hit resolution, and the
/// word-progress state machine, driven by one fixed-step update.
pub struct WordShooter {
    rng: Rng,
    progress: WordProgress,
    score: u32,
    time_left: u32,
    status: StatusMessage,
    camera: Camera3D,
    spawn_timer: IntervalTimer,
    countdown: IntervalTimer,
    /// Readability pause: movement and spawning freeze until this
    /// game-clock deadline. The countdown runs through it.
    spawn_pause_until: Option<f64>,
    /// Deferred next-word transition after completing a word.
    word_advance_at: Option<f64>,
    /// Deferred end-of-game handoff after the countdown reaches zero.
    game_over_at: Option<f64>,
    over_reported: bool,
    ended: bool,
    new_letter: Option<SpawnInfo>,
}

impl WordShooter {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let progress = WordProgress::random(&mut rng);
        Self {
            rng,
            progress,
            score: 0,
            time_left: GAME_DURATION,
            status: StatusMessage::GetReady,
            camera: Camera3D::new(),
            spawn_timer: IntervalTimer::new(SPAWN_INTERVAL),
            countdown: IntervalTimer::new(1.0),
            spawn_pause_until: None,
            word_advance_at: None,
            game_over_at: None,
            over_reported: false,
            ended: false,
            new_letter: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn camera_mut(&mut self) -> &mut Camera3D {
        &mut self.camera
    }

    /// Snapshot the HUD-facing state.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            time_left: self.time_left,
            target_word: self.progress.word(),
            progress: self.progress.display(),
            status: StatusLine {
                kind: self.status.kind(),
                text: self.status.to_string(),
            },
            new_letter: self.new_letter,
        }
    }

    fn announce_word(&mut self, ctx: &mut EngineContext) {
        self.status = StatusMessage::ShootWord(self.progress.word());
        ctx.emit_sound(SOUND_ANNOUNCEMENT);
        ctx.emit_event(GameEvent {
            kind: EVENT_WORD_STARTED,
            a: self.progress.word().len() as f32,
            ..GameEvent::default()
        });
    }

    fn emit_score(&self, ctx: &mut EngineContext, delta: f32) {
        ctx.emit_event(GameEvent {
            kind: EVENT_SCORE,
            a: self.score as f32,
            b: delta,
            ..GameEvent::default()
        });
    }

    /// Feed a hit letter into the word-progress state machine.
    fn handle_letter_hit(&mut self, ctx: &mut EngineContext, letter: char) {
        let now = ctx.now();
        match self.progress.apply_shot(letter) {
            ShotOutcome::Correct => {
                self.score += LETTER_POINTS;
                self.status = StatusMessage::GoodShot;
                ctx.emit_sound(SOUND_CORRECT);
                self.emit_score(ctx, LETTER_POINTS as f32);
            }
            ShotOutcome::Completed => {
                self.score += LETTER_POINTS;
                self.status = StatusMessage::WordComplete;
                ctx.emit_sound(SOUND_CORRECT);
                self.emit_score(ctx, LETTER_POINTS as f32);
                // Hold the celebration before the bonus lands and the
                // next word is announced.
                self.word_advance_at = Some(now + WORD_ADVANCE_DELAY);
            }
            ShotOutcome::Wrong => {
                // Score never goes negative.
                self.score = self.score.saturating_sub(WRONG_PENALTY);
                self.status = StatusMessage::WrongLetter;
                ctx.emit_sound(SOUND_WRONG);
                self.emit_score(ctx, -(WRONG_PENALTY as f32));
            }
        }
    }

    fn spawn_target(&mut self, ctx: &mut EngineContext) {
        let now = ctx.now();
        let info = spawner::spawn(ctx, &mut self.rng);
        self.spawn_pause_until = Some(now + SPAWN_PAUSE);
        self.new_letter = Some(info);
        self.status = StatusMessage::NewLetter(info.letter);
        ctx.emit_event(GameEvent {
            kind: EVENT_LETTER_SPAWNED,
            a: (info.letter as u32 - 'A' as u32) as f32,
            b: info.row as f32,
            c: matches!(info.side, spawner::Side::Right) as u32 as f32,
        });
    }

    fn end_game(&mut self, now: f64) {
        self.ended = true;
        self.status = StatusMessage::GameOver(self.score);
        self.word_advance_at = None;
        self.game_over_at = Some(now + GAME_OVER_HOLD);
        log::info!("countdown finished, final score {}", self.score);
    }
}

impl Game for WordShooter {
    fn init(&mut self, ctx: &mut EngineContext) {
        self.announce_word(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = FIXED_DT;
        ctx.advance_clock(dt as f64);
        let now = ctx.now();

        // Countdown runs through pauses; reaching zero ends the game.
        if !self.ended {
            let ticks = self.countdown.advance(dt);
            for _ in 0..ticks {
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    self.end_game(now);
                    break;
                }
            }
        }

        // Lift the readability pause once its window closes.
        if let Some(deadline) = self.spawn_pause_until {
            if now >= deadline {
                self.spawn_pause_until = None;
                self.new_letter = None;
                if !self.ended {
                    self.status = StatusMessage::ShootWord(self.progress.word());
                }
            }
        }

        // Resolve queued picks. Shots are accepted during the spawn pause
        // but dropped after game end (the terminal hold is read-only).
        if !self.ended {
            for event in input.iter() {
                if let InputEvent::Pick { ndc_x, ndc_y } = *event {
                    let ray = self.camera.pick_ray(ndc_x, ndc_y);
                    if let Some(id) = picking::resolve_pick(&ctx.registry, &ray) {
                        if let Some(target) = ctx.registry.despawn(id) {
                            self.handle_letter_hit(ctx, target.letter);
                        }
                    }
                }
            }
        }

        // Deferred next-word transition: the completion bonus lands here.
        if !self.ended {
            if let Some(deadline) = self.word_advance_at {
                if now >= deadline {
                    self.word_advance_at = None;
                    self.score += WORD_BONUS;
                    self.emit_score(ctx, WORD_BONUS as f32);
                    self.progress = WordProgress::random(&mut self.rng);
                    self.announce_word(ctx);
                }
            }
        }

        // Spawn timer: ticks landing in a pause or after game end are
        // dropped, not queued.
        let spawn_ticks = self.spawn_timer.advance(dt);
        for _ in 0..spawn_ticks {
            if !self.ended && self.spawn_pause_until.is_none() {
                self.spawn_target(ctx);
            }
        }

        // Movement freezes during the spawn pause and after game end.
        if !self.ended && self.spawn_pause_until.is_none() {
            movement::step(&mut ctx.registry, dt, now);
        }

        // End-of-game handoff, exactly once per session.
        if let Some(deadline) = self.game_over_at {
            if now >= deadline && !self.over_reported {
                self.over_reported = true;
                ctx.emit_event(GameEvent {
                    kind: EVENT_GAME_OVER,
                    a: self.score as f32,
                    ..GameEvent::default()
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::TargetId;
    use crate::components::target::LetterTarget;
    use crate::systems::words::TARGET_WORDS;
    use glam::Vec3;

    fn new_game(seed: u64) -> (WordShooter, EngineContext) {
        let mut shooter = WordShooter::new(seed);
        let mut ctx = EngineContext::new();
        shooter.init(&mut ctx);
        (shooter, ctx)
    }

    fn run_steps(shooter: &mut WordShooter, ctx: &mut EngineContext, steps: u32) {
        let input = InputQueue::new();
        for _ in 0..steps {
            shooter.update(ctx, &input);
        }
    }

    fn seconds(s: f32) -> u32 {
        (s / FIXED_DT).ceil() as u32
    }

    #[test]
    fn cat_scenario_scores_and_advances() {
        let (mut shooter, mut ctx) = new_game(1);
        shooter.progress = WordProgress::new("CAT");
        shooter.status = StatusMessage::ShootWord("CAT");

        shooter.handle_letter_hit(&mut ctx, 'C');
        assert_eq!(shooter.score(), 100);
        assert_eq!(shooter.progress.display(), "C__");
        assert_eq!(shooter.status(), &StatusMessage::GoodShot);

        // 'T' is in the word but out of order.
        shooter.handle_letter_hit(&mut ctx, 'T');
        assert_eq!(shooter.score(), 80);
        assert_eq!(shooter.progress.display(), "C__");
        assert_eq!(shooter.status(), &StatusMessage::WrongLetter);

        shooter.handle_letter_hit(&mut ctx, 'A');
        assert_eq!(shooter.score(), 180);
        assert_eq!(shooter.progress.display(), "CA_");

        shooter.handle_letter_hit(&mut ctx, 'T');
        assert_eq!(shooter.score(), 280);
        assert_eq!(shooter.status(), &StatusMessage::WordComplete);
        assert!(shooter.word_advance_at.is_some());

        // The +500 bonus and the next word land after the hold.
        run_steps(&mut shooter, &mut ctx, seconds(3.1));
        assert_eq!(shooter.score(), 780);
        assert!(TARGET_WORDS.contains(&shooter.progress.word()));
        assert!(shooter.progress.display().chars().all(|c| c == '_'));
    }

    #[test]
    fn score_never_goes_negative() {
        let (mut shooter, mut ctx) = new_game(2);
        shooter.progress = WordProgress::new("CAT");
        shooter.handle_letter_hit(&mut ctx, 'X');
        assert_eq!(shooter.score(), 0);
        assert_eq!(shooter.status(), &StatusMessage::WrongLetter);
    }

    #[test]
    fn pick_against_empty_registry_changes_nothing() {
        let (mut shooter, mut ctx) = new_game(3);
        let mut input = InputQueue::new();
        input.push(InputEvent::Pick { ndc_x: 0.0, ndc_y: 0.0 });
        shooter.update(&mut ctx, &input);

        assert_eq!(shooter.score(), 0);
        assert!(ctx.registry.is_empty());
        assert_eq!(shooter.progress.display().len(), shooter.progress.word().len());
    }

    #[test]
    fn pick_removes_hit_target_and_scores() {
        let (mut shooter, mut ctx) = new_game(4);
        shooter.progress = WordProgress::new("CAT");

        let pos = Vec3::new(0.0, 2.0, -10.0);
        let id = ctx.next_id();
        ctx.registry.spawn(LetterTarget::new(id, 'C').with_pos(pos));

        let ndc = shooter.camera.view_projection().project_point3(pos);
        let mut input = InputQueue::new();
        input.push(InputEvent::Pick { ndc_x: ndc.x, ndc_y: ndc.y });
        shooter.update(&mut ctx, &input);

        assert!(ctx.registry.is_empty());
        assert_eq!(shooter.score(), 100);
        assert_eq!(shooter.progress.display(), "C__");
    }

    #[test]
    fn countdown_emits_game_over_exactly_once() {
        let (mut shooter, mut ctx) = new_game(5);
        shooter.time_left = 1;

        run_steps(&mut shooter, &mut ctx, seconds(1.1));
        assert!(shooter.ended());
        assert_eq!(shooter.status(), &StatusMessage::GameOver(shooter.score()));

        // Run well past the display hold; events accumulate because no
        // frame clear happens in this test.
        run_steps(&mut shooter, &mut ctx, seconds(8.0));
        let over_events = ctx
            .events
            .iter()
            .filter(|e| e.kind == EVENT_GAME_OVER)
            .count();
        assert_eq!(over_events, 1);
    }

    #[test]
    fn ended_game_ignores_picks_and_stops_spawning() {
        let (mut shooter, mut ctx) = new_game(6);
        shooter.time_left = 1;
        run_steps(&mut shooter, &mut ctx, seconds(1.1));
        assert!(shooter.ended());

        let pos = Vec3::new(0.0, 2.0, -10.0);
        let id = ctx.next_id();
        ctx.registry.spawn(LetterTarget::new(id, 'Z').with_pos(pos));
        let before = shooter.score();

        let ndc = shooter.camera.view_projection().project_point3(pos);
        let mut input = InputQueue::new();
        input.push(InputEvent::Pick { ndc_x: ndc.x, ndc_y: ndc.y });
        shooter.update(&mut ctx, &input);

        assert_eq!(ctx.registry.len(), 1);
        assert_eq!(shooter.score(), before);

        // No spawns either, however long the hold runs.
        run_steps(&mut shooter, &mut ctx, seconds(5.0));
        assert_eq!(ctx.registry.len(), 1);
    }

    #[test]
    fn spawn_pause_freezes_motion_but_not_countdown() {
        let (mut shooter, mut ctx) = new_game(7);

        // First spawn fires at 1.2 s and opens the pause window.
        run_steps(&mut shooter, &mut ctx, seconds(1.25));
        assert_eq!(ctx.registry.len(), 1);
        assert!(shooter.spawn_pause_until.is_some());
        assert!(shooter.new_letter.is_some());
        assert!(matches!(shooter.status(), StatusMessage::NewLetter(_)));

        let frozen_x = ctx.registry.iter().next().unwrap().pos.x;
        let time_before = shooter.time_left();

        run_steps(&mut shooter, &mut ctx, seconds(2.0));
        assert_eq!(ctx.registry.iter().next().unwrap().pos.x, frozen_x);
        assert!(shooter.time_left() < time_before);
    }

    #[test]
    fn spawn_pause_lifts_after_window() {
        let (mut shooter, mut ctx) = new_game(8);

        // Pause opens at 1.2 s and closes at 6.2 s; sample at 6.5 s,
        // before the next spawn at 7.2 s re-opens it.
        run_steps(&mut shooter, &mut ctx, seconds(6.5));
        assert!(shooter.spawn_pause_until.is_none());
        assert!(shooter.new_letter.is_none());
        assert!(matches!(shooter.status(), StatusMessage::ShootWord(_)));

        // Motion resumed.
        let x0 = ctx.registry.iter().next().unwrap().pos.x;
        run_steps(&mut shooter, &mut ctx, seconds(0.2));
        assert_ne!(ctx.registry.iter().next().unwrap().pos.x, x0);
    }

    #[test]
    fn hud_reflects_game_state() {
        let (shooter, _ctx) = new_game(9);
        let hud = shooter.hud();
        assert!(TARGET_WORDS.contains(&hud.target_word));
        assert_eq!(hud.progress, "_".repeat(hud.target_word.len()));
        assert_eq!(hud.score, 0);
        assert_eq!(hud.time_left, GAME_DURATION);
        assert_eq!(hud.status.kind, "announce");
        assert_eq!(hud.status.text, format!("Shoot: {}!", hud.target_word));
    }
}
