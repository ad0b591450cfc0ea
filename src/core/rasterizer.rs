use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Wrap};
use tiny_skia::Pixmap;

use crate::core::errors::ExportError;
use crate::core::models::{ExportArtifact, RenderSpec};
use crate::global_constants::{
    LOG_TAG_RASTERIZER, RENDER_FONT_SIZE_PX, RENDER_LINE_HEIGHT_PX, RENDER_MAX_BITMAP_WIDTH_PX,
    RENDER_OUTER_PADDING_PX,
};

/// Converts pasted text into a PNG bitmap.
///
/// Two passes, mirroring the original canvas renderer: an off-screen
/// measurement pass wrapped at the width cap sizes the bitmap, then each
/// source line (split on `\n`) is drawn without any wrapping. A single line
/// longer than the cap therefore overflows the bitmap; that is accepted
/// behavior, not corrected here.
pub struct TextRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRasterizer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing text rasterizer", LOG_TAG_RASTERIZER);
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    pub fn rasterize_text(&mut self, text: &str) -> Result<ExportArtifact, ExportError> {
        if text.is_empty() {
            return Err(ExportError::EmptyContent);
        }

        let render_spec = self.measure_render_spec(text);
        log::info!(
            "{} measured {} line(s) into {}x{} bitmap",
            LOG_TAG_RASTERIZER,
            render_spec.line_count(),
            render_spec.width,
            render_spec.height
        );

        let pixmap = self.draw_render_spec(&render_spec)?;
        let png_bytes = encode_pixmap_as_png(&pixmap)?;

        Ok(ExportArtifact::build_png(png_bytes))
    }

    /// Off-screen measurement pass: lay the whole text out wrapped at the
    /// width cap and derive the bitmap size from the wrapped layout. The
    /// wrapped line count is floored at the source line count so the bitmap
    /// never comes out shorter than the text it has to hold.
    pub fn measure_render_spec(&mut self, text: &str) -> RenderSpec {
        let wrap_limit = RENDER_MAX_BITMAP_WIDTH_PX - RENDER_OUTER_PADDING_PX;

        let mut buffer = Buffer::new(
            &mut self.font_system,
            Metrics::new(RENDER_FONT_SIZE_PX, RENDER_LINE_HEIGHT_PX),
        );
        buffer.set_size(&mut self.font_system, Some(wrap_limit), None);
        buffer.set_wrap(&mut self.font_system, Wrap::WordOrGlyph);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::Monospace),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut measured_width: f32 = 0.0;
        let mut wrapped_line_count = 0usize;
        for run in buffer.layout_runs() {
            measured_width = measured_width.max(run.line_w);
            wrapped_line_count += 1;
        }

        let source_lines: Vec<String> = text.split('\n').map(|line| line.to_string()).collect();
        let wrapped_line_count = wrapped_line_count.max(source_lines.len());

        let width = RENDER_MAX_BITMAP_WIDTH_PX
            .min(measured_width.ceil() + RENDER_OUTER_PADDING_PX)
            .max(RENDER_OUTER_PADDING_PX) as u32;
        let height =
            (wrapped_line_count as f32 * RENDER_LINE_HEIGHT_PX + RENDER_OUTER_PADDING_PX) as u32;

        RenderSpec {
            width,
            height,
            lines: source_lines,
        }
    }

    /// Drawing pass: white background, then every source line in black
    /// monospace at its fixed baseline. Lines are laid out one buffer at a
    /// time with no width limit, so no wrapping happens here.
    fn draw_render_spec(&mut self, render_spec: &RenderSpec) -> Result<Pixmap, ExportError> {
        let mut pixmap = Pixmap::new(render_spec.width, render_spec.height).ok_or_else(|| {
            ExportError::Render(format!(
                "invalid bitmap dimensions {}x{}",
                render_spec.width, render_spec.height
            ))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let origin_x = render_spec.line_origin_x();
        for (line_index, line) in render_spec.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let mut buffer = Buffer::new(
                &mut self.font_system,
                Metrics::new(RENDER_FONT_SIZE_PX, RENDER_LINE_HEIGHT_PX),
            );
            buffer.set_size(&mut self.font_system, None, None);
            buffer.set_text(
                &mut self.font_system,
                line,
                Attrs::new().family(Family::Monospace),
                Shaping::Advanced,
            );
            buffer.shape_until_scroll(&mut self.font_system, false);

            // The draw callback emits pixels relative to the buffer's own
            // top-left, with the run baseline at `line_y`. Shift so the
            // baseline lands exactly at the render spec's fixed position.
            let run_baseline = buffer
                .layout_runs()
                .next()
                .map(|run| run.line_y)
                .unwrap_or(RENDER_FONT_SIZE_PX * 0.8);
            let origin_y = render_spec.line_baseline_y(line_index) - run_baseline;

            let pixmap_width = pixmap.width();
            let pixmap_height = pixmap.height();
            let pixel_data = pixmap.data_mut();

            buffer.draw(
                &mut self.font_system,
                &mut self.swash_cache,
                Color::rgb(0, 0, 0),
                |x, y, w, h, color| {
                    blend_rect_into_rgba(
                        pixel_data,
                        pixmap_width,
                        pixmap_height,
                        x + origin_x as i32,
                        y + origin_y as i32,
                        w,
                        h,
                        color,
                    );
                },
            );
        }

        Ok(pixmap)
    }
}

/// Alpha-blend a solid rectangle of glyph coverage into an RGBA pixel
/// buffer. Pixels outside the bitmap are dropped; drawing never grows the
/// bitmap, which is how overlong lines end up clipped.
#[allow(clippy::too_many_arguments)]
fn blend_rect_into_rgba(
    pixel_data: &mut [u8],
    buffer_width: u32,
    buffer_height: u32,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
) {
    let alpha = color.a() as u32;
    if alpha == 0 {
        return;
    }

    for row_offset in 0..h as i32 {
        let row = y + row_offset;
        if row < 0 || row >= buffer_height as i32 {
            continue;
        }
        for col_offset in 0..w as i32 {
            let col = x + col_offset;
            if col < 0 || col >= buffer_width as i32 {
                continue;
            }

            let index = ((row as u32 * buffer_width + col as u32) * 4) as usize;
            for (channel, component) in [color.r(), color.g(), color.b()].into_iter().enumerate() {
                let background = pixel_data[index + channel] as u32;
                let blended = (component as u32 * alpha + background * (255 - alpha)) / 255;
                pixel_data[index + channel] = blended as u8;
            }
            pixel_data[index + 3] = 255;
        }
    }
}

/// Encode a pixmap as a PNG byte stream. The pixmap holds premultiplied
/// alpha; everything drawn here is opaque, so demultiplication only matters
/// for the degenerate all-transparent case.
fn encode_pixmap_as_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::Render(format!("png header: {}", e)))?;

        let mut straight_alpha_data = pixmap.data().to_vec();
        for pixel in straight_alpha_data.chunks_exact_mut(4) {
            let alpha = pixel[3];
            if alpha != 0 && alpha != 255 {
                let alpha_factor = alpha as f32 / 255.0;
                pixel[0] = (pixel[0] as f32 / alpha_factor).min(255.0) as u8;
                pixel[1] = (pixel[1] as f32 / alpha_factor).min(255.0) as u8;
                pixel[2] = (pixel[2] as f32 / alpha_factor).min(255.0) as u8;
            }
        }

        writer
            .write_image_data(&straight_alpha_data)
            .map_err(|e| ExportError::Render(format!("png encode: {}", e)))?;
    }
    Ok(output)
}
