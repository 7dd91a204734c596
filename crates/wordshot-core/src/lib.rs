pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod session;
pub mod shooter;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, FIXED_DT};
pub use api::types::{GameEvent, SoundEvent, TargetId};
pub use components::target::LetterTarget;
pub use core::registry::TargetRegistry;
pub use core::rng::Rng;
pub use core::time::{FixedTimestep, IntervalTimer};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::Camera3D;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use session::{Session, SessionPhase};
pub use shooter::{HudSnapshot, StatusMessage, WordShooter};
pub use systems::picking::{resolve_pick, Ray};
pub use systems::render::build_render_buffer;
pub use systems::spawner::{Side, SpawnInfo};
pub use systems::words::{ShotOutcome, WordProgress, TARGET_WORDS};
