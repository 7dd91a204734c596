pub mod protocol;
pub mod runner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::runner::GameRunner;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn try_with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// One-time module init: panic hook, console logger, runner slot.
#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(GameRunner::new());
    });
    log::info!("wordshot: initialized");
}

/// start -> playing (also restarts from gameOver). Fails if `game_init`
/// was never called; the session does not start in that case.
#[wasm_bindgen]
pub fn session_start(seed: u32) -> Result<(), JsValue> {
    try_with_runner(|r| r.start(seed))
        .ok_or_else(|| JsValue::from_str("game_init() must be called before session_start()"))
}

/// Tear down the playing state. Safe to call when nothing is running.
#[wasm_bindgen]
pub fn session_end() {
    if try_with_runner(|r| r.end()).is_none() {
        log::warn!("session_end called before game_init");
    }
}

/// Session phase: 0 start, 1 playing, 2 gameOver.
#[wasm_bindgen]
pub fn session_phase() -> u32 {
    with_runner(|r| r.phase_code())
}

/// Final score once the session ended, -1 before that.
#[wasm_bindgen]
pub fn final_score() -> i32 {
    with_runner(|r| r.final_score())
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// A pick at a normalized device coordinate (x right, y up, [-1, 1]).
#[wasm_bindgen]
pub fn game_pick(ndc_x: f32, ndc_y: f32) {
    with_runner(|r| r.push_pick(ndc_x, ndc_y));
}

#[wasm_bindgen]
pub fn game_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

/// HUD snapshot as a JSON string, `{}` outside playing.
#[wasm_bindgen]
pub fn hud_json() -> String {
    with_runner(|r| r.hud_json())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

#[wasm_bindgen]
pub fn get_fixed_dt() -> f32 {
    with_runner(|r| r.fixed_dt())
}
