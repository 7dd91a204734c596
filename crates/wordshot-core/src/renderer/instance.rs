use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to SharedArrayBuffer for the
/// TypeScript renderer. Must match the TypeScript protocol:
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in scene space.
    pub x: f32,
    /// Y position in scene space.
    pub y: f32,
    /// Z position in scene space.
    pub z: f32,
    /// Y-axis spin in radians.
    pub rotation: f32,
    /// Rendered size in scene units (edge length of the letter slab).
    pub scale: f32,
    /// Column of the letter in the glyph atlas.
    pub glyph_col: f32,
    /// Row of the letter in the glyph atlas.
    pub glyph_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all target instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
