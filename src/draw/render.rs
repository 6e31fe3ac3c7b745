//! Cairo-based stroke rendering and rasterization.

use super::color::Color;
use super::stroke::{Point, Stroke};
use cairo::{Context, Format, ImageSurface};
use thiserror::Error;

/// Export raster width in pixels (portrait HD).
pub const EXPORT_WIDTH: u32 = 1080;
/// Export raster height in pixels (portrait HD).
pub const EXPORT_HEIGHT: u32 = 1920;

/// Un-premultiplied RGBA pixel value.
pub type Rgba = [u8; 4];

/// Errors that can occur while rasterizing or encoding a drawing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to access surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// A rendered drawing held as an owned ARGB32 pixel buffer.
///
/// The buffer uses Cairo's layout (native-endian, premultiplied alpha) so it
/// can be handed back to Cairo for PNG encoding without conversion.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the un-premultiplied RGBA value at (`x`, `y`), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes: [u8; 4] = self.data.get(offset..offset + 4)?.try_into().ok()?;
        let word = u32::from_ne_bytes(bytes);

        let a = (word >> 24) as u8;
        if a == 0 {
            return Some([0, 0, 0, 0]);
        }
        let unpremultiply = |c: u32| ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8;
        Some([
            unpremultiply((word >> 16) & 0xff),
            unpremultiply((word >> 8) & 0xff),
            unpremultiply(word & 0xff),
            a,
        ])
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|byte| *byte == 0)
    }

    /// Counts pixels with any coverage (alpha > 0).
    pub fn painted_pixel_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y).is_some_and(|px| px[3] > 0))
            .count()
    }

    /// Encodes the raster as a lossless PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let (width, height) = surface_size(self.width, self.height)?;
        let surface = ImageSurface::create_for_data(
            self.data.clone(),
            Format::ARgb32,
            width,
            height,
            self.stride as i32,
        )?;

        let mut buffer = Vec::new();
        surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

/// Rasterizes `strokes` onto a fully transparent `width` x `height` image.
///
/// Strokes are drawn in slice order, so later strokes cover earlier ones.
/// No scaling is applied: stroke coordinates are used as raster pixels.
pub fn rasterize(strokes: &[Stroke], width: u32, height: u32) -> Result<Raster, RenderError> {
    rasterize_with_background(strokes, width, height, None)
}

/// Like [`rasterize`], but paints an opaque `background` first when one is given.
pub fn rasterize_with_background(
    strokes: &[Stroke],
    width: u32,
    height: u32,
    background: Option<Color>,
) -> Result<Raster, RenderError> {
    let (surface_width, surface_height) = surface_size(width, height)?;
    let mut surface = ImageSurface::create(Format::ARgb32, surface_width, surface_height)?;

    {
        let ctx = Context::new(&surface)?;
        if let Some(color) = background {
            let (r, g, b) = color.to_unit();
            ctx.set_source_rgb(r, g, b);
            ctx.paint()?;
        }
        render_strokes(&ctx, strokes);
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let data = surface.data()?.to_vec();

    log::debug!(
        "Rasterized {} strokes into {}x{} image",
        strokes.len(),
        width,
        height
    );

    Ok(Raster {
        width,
        height,
        stride,
        data,
    })
}

/// Renders all strokes in order to a Cairo context.
pub fn render_strokes(ctx: &Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders one stroke: a round-jointed polyline, then a disc on every point.
pub fn render_stroke(ctx: &Context, stroke: &Stroke) {
    render_polyline(ctx, stroke.points(), stroke.color(), stroke.width());
    render_point_discs(ctx, stroke.points(), stroke.color(), stroke.width());
}

/// Render a polyline through `points` with round caps and joins.
///
/// Single-point input draws nothing here; its disc comes from [`render_point_discs`].
pub fn render_polyline(ctx: &Context, points: &[Point], color: Color, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let (r, g, b) = color.to_unit();
    ctx.set_source_rgb(r, g, b);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}

/// Fill a disc of radius `width / 2` centered on each point.
pub fn render_point_discs(ctx: &Context, points: &[Point], color: Color, width: f64) {
    if points.is_empty() {
        return;
    }

    let (r, g, b) = color.to_unit();
    ctx.set_source_rgb(r, g, b);

    let radius = width / 2.0;
    for point in points {
        ctx.new_sub_path();
        ctx.arc(point.x, point.y, radius, 0.0, std::f64::consts::PI * 2.0);
    }

    let _ = ctx.fill();
}

fn surface_size(width: u32, height: u32) -> Result<(i32, i32), RenderError> {
    let invalid = RenderError::InvalidSize { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(invalid),
    }
}
