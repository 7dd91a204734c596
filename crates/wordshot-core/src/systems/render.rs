use crate::components::target::LetterTarget;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Columns in the A-Z glyph atlas (8 x 4 grid, last row partly empty).
pub const GLYPH_ATLAS_COLS: u32 = 8;

/// Atlas cell (col, row) for an uppercase letter.
pub fn glyph_cell(letter: char) -> (f32, f32) {
    let idx = (letter as u32).saturating_sub('A' as u32).min(25);
    ((idx % GLYPH_ATLAS_COLS) as f32, (idx / GLYPH_ATLAS_COLS) as f32)
}

/// Build the render buffer from the live targets.
pub fn build_render_buffer<'a>(
    targets: impl Iterator<Item = &'a LetterTarget>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for target in targets {
        let (glyph_col, glyph_row) = glyph_cell(target.letter);
        buffer.push(RenderInstance {
            x: target.pos.x,
            y: target.pos.y,
            z: target.pos.z,
            rotation: target.rotation,
            scale: target.half_extents.x * 2.0,
            glyph_col,
            glyph_row,
            alpha: 1.0,
        });
    }
}
