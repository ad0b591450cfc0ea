use crate::global_constants::{
    RENDER_LEFT_MARGIN_PX, RENDER_LINE_HEIGHT_PX, RENDER_TOP_OFFSET_PX,
};

/// Measured layout for one rasterization pass. Computed fresh for every
/// export, never mutated afterwards, and discarded once the bitmap exists.
#[derive(Debug, Clone)]
pub struct RenderSpec {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<String>,
}

impl RenderSpec {
    /// X coordinate where every line starts.
    pub fn line_origin_x(&self) -> f32 {
        RENDER_LEFT_MARGIN_PX
    }

    /// Baseline Y of the line at `index`: fixed top offset plus fixed line
    /// height per preceding line.
    pub fn line_baseline_y(&self, index: usize) -> f32 {
        RENDER_TOP_OFFSET_PX + index as f32 * RENDER_LINE_HEIGHT_PX
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
