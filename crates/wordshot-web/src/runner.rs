use wordshot_core::{
    build_render_buffer, GameConfig, InputEvent, RenderBuffer, Session, SessionPhase,
};

use crate::protocol::ProtocolLayout;

/// Drives the session once per animation frame and repacks its output
/// into the flat buffers TypeScript reads over SharedArrayBuffer.
pub struct GameRunner {
    session: Session,
    config: GameConfig,
    layout: ProtocolLayout,
    render_buffer: RenderBuffer,
    /// Flat buffer of sound event IDs for SharedArrayBuffer reads.
    sound_buffer: Vec<u8>,
}

impl GameRunner {
    pub fn new() -> Self {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            session: Session::new(),
            config,
            layout,
            render_buffer,
            sound_buffer,
        }
    }

    /// Begin a play-through. Restarting from `gameOver` is the same call.
    pub fn start(&mut self, seed: u32) {
        self.session.start(seed as u64);
    }

    /// Tear down the playing state.
    pub fn end(&mut self) {
        self.session.end();
    }

    /// Queue a pick at a normalized device coordinate.
    pub fn push_pick(&mut self, ndc_x: f32, ndc_y: f32) {
        self.session.push_input(InputEvent::Pick { ndc_x, ndc_y });
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    /// Run one frame tick: update the session, rebuild the render buffer,
    /// pack sound events.
    pub fn tick(&mut self, dt: f32) {
        self.session.tick(dt);

        build_render_buffer(self.session.targets(), &mut self.render_buffer);

        self.sound_buffer.clear();
        for sound in self.session.sounds() {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// HUD snapshot as JSON for the React overlay, `{}` outside playing.
    pub fn hud_json(&self) -> String {
        match self.session.hud() {
            Some(hud) => match serde_json::to_string(&hud) {
                Ok(json) => json,
                Err(err) => {
                    log::error!("failed to serialize HUD snapshot: {}", err);
                    String::from("{}")
                }
            },
            None => String::from("{}"),
        }
    }

    /// Session phase as a protocol code: 0 start, 1 playing, 2 gameOver.
    pub fn phase_code(&self) -> u32 {
        match self.session.phase() {
            SessionPhase::Start => 0,
            SessionPhase::Playing => 1,
            SessionPhase::GameOver { .. } => 2,
        }
    }

    /// Final score once the session ended, -1 before that.
    pub fn final_score(&self) -> i32 {
        self.session
            .final_score()
            .map(|s| s as i32)
            .unwrap_or(-1)
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.session.events().as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.session.events().len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn idle_runner_ticks_without_a_session() {
        let mut runner = GameRunner::new();
        runner.tick(FRAME);
        assert_eq!(runner.phase_code(), 0);
        assert_eq!(runner.instance_count(), 0);
        assert_eq!(runner.hud_json(), "{}");
        assert_eq!(runner.final_score(), -1);
    }

    #[test]
    fn started_runner_exposes_hud_and_instances() {
        let mut runner = GameRunner::new();
        runner.start(42);
        assert_eq!(runner.phase_code(), 1);

        // Run past the first spawn at 1.2 s.
        for _ in 0..90 {
            runner.tick(FRAME);
        }
        assert_eq!(runner.instance_count(), 1);

        let hud = runner.hud_json();
        assert!(hud.contains("\"score\""));
        assert!(hud.contains("\"target_word\""));
        assert!(hud.contains("\"new_letter\""));
    }

    #[test]
    fn game_over_surfaces_phase_and_score() {
        let mut runner = GameRunner::new();
        runner.start(7);
        for _ in 0..(70 * 60) {
            runner.tick(FRAME);
        }
        assert_eq!(runner.phase_code(), 2);
        assert_eq!(runner.final_score(), 0);
        // Render buffer drains once the playing state is gone.
        assert_eq!(runner.instance_count(), 0);
    }
}
