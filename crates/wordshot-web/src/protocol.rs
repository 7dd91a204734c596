//! SharedArrayBuffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Instances: max_instances x 8 floats]
//! [Sounds: max_sounds x 1 float]
//! [Events: max_events x 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use wordshot_core::{GameConfig, GameEvent, RenderInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_MAX_SOUNDS: usize = 3;
pub const HEADER_SOUND_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_PROTOCOL_VERSION: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Floats per game event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum sound events per frame.
    pub max_sounds: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_sounds: usize, max_events: usize) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let sound_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let event_data_offset = sound_data_offset + max_sounds;

        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_sounds,
            max_events,
            instance_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_sounds, config.max_events)
    }
}
