use std::path::Path;

use crate::foundation::core::{CanvasSize, PixelCoord, Point};
use crate::foundation::error::InklingResult;
use crate::raster::brush::BrushMask;
use crate::raster::buffer::PixelBuffer;
use crate::raster::display::{DisplaySurface, UpdateRegion};
use crate::stroke::model::{Painting, Stroke};

/// Brush radius used until [`RasterCanvas::initialize_brush`] is called.
pub const DEFAULT_BRUSH_RADIUS: u32 = 10;

/// Drawing surface for one player: pixels, brush, the stroke being captured and the painting
/// accumulated this round.
///
/// Every operation runs on the caller's thread; the canvas owns all of its state and only
/// lends the painting out by reference for export.
pub struct RasterCanvas<S: DisplaySurface> {
    buffer: PixelBuffer,
    region: UpdateRegion,
    brush: BrushMask,
    surface: S,

    previous: Option<Point>,
    stroke: Stroke,
    painting: Painting,
}

impl<S: DisplaySurface> RasterCanvas<S> {
    /// Allocate a `width x height` canvas, clear it and push the blank buffer to `surface`.
    pub fn new(width: u32, height: u32, surface: S) -> InklingResult<Self> {
        let size = CanvasSize::new(width, height)?;
        let mut canvas = Self {
            buffer: PixelBuffer::new(size),
            region: UpdateRegion::full(size),
            brush: BrushMask::new(DEFAULT_BRUSH_RADIUS)?,
            surface,
            previous: None,
            stroke: Stroke::new(),
            painting: Painting::new(),
        };
        canvas.clear_canvas()?;
        Ok(canvas)
    }

    /// Replace the brush stamp. Pixels already drawn keep their shape.
    pub fn initialize_brush(&mut self, radius: u32) -> InklingResult<()> {
        self.brush = BrushMask::new(radius)?;
        Ok(())
    }

    /// Stamp the brush centred on `(x, y)` and push the canvas to the display.
    ///
    /// Cells landing outside the canvas are clipped. Returns the number of pixels written.
    pub fn draw_dot(&mut self, x: i32, y: i32) -> InklingResult<usize> {
        let written = self.stamp(x, y);
        self.present()?;
        Ok(written)
    }

    /// Record a pointer sample at `at` while a stroke is being drawn.
    ///
    /// When the previous sample is still valid the gap to it is filled with dots spaced at most
    /// half a brush radius apart, so fast motion leaves no holes. Returns how many interpolated
    /// dots were stamped before the dot at `at` itself.
    ///
    /// Both ends must lie on the canvas for the gap to be filled. An off-canvas sample gets its
    /// own (clipped) dot only, which also bounds the step count by the canvas diagonal.
    pub fn draw(&mut self, at: PixelCoord) -> InklingResult<usize> {
        let target = at.to_point();
        let size = self.buffer.size();
        let mut steps = 0usize;

        if let Some(prev) = self
            .previous
            .filter(|p| size.contains_point(*p) && size.contains(at))
        {
            let distance = prev.distance(target);
            let spacing = f64::from(self.brush.radius()) / 2.0;
            steps = (distance / spacing).floor() as usize;
            for i in 0..steps {
                let dot = prev.lerp(target, i as f64 / steps as f64);
                let dot = PixelCoord::from_point_trunc(dot);
                self.draw_dot(dot.x, dot.y)?;
            }
        }

        self.draw_dot(at.x, at.y)?;
        self.previous = Some(target);
        self.stroke.add_point(target);
        Ok(steps)
    }

    /// No usable sample this frame (pointer left the canvas, hit test failed).
    ///
    /// The next [`RasterCanvas::draw`] starts without interpolation.
    pub fn miss(&mut self) {
        self.previous = None;
    }

    /// Begin a new stroke. Any uncommitted samples are discarded.
    pub fn start_drawing(&mut self) {
        self.stroke = Stroke::new();
    }

    /// Finish the current stroke and commit it to the painting. Empty strokes are dropped.
    /// Returns whether a stroke was committed.
    pub fn stop_drawing(&mut self) -> bool {
        self.previous = None;
        self.painting.add_stroke(std::mem::take(&mut self.stroke))
    }

    /// Reset every pixel to blank, push it, and start a fresh painting.
    ///
    /// Committed strokes are discarded. A stroke in progress and the interpolation anchor are
    /// left alone, so the next sample still joins up with the previous one.
    pub fn clear_canvas(&mut self) -> InklingResult<()> {
        self.buffer.clear();
        self.present()?;
        self.painting = Painting::new();
        Ok(())
    }

    pub fn painting(&self) -> &Painting {
        &self.painting
    }

    pub fn painting_mut(&mut self) -> &mut Painting {
        &mut self.painting
    }

    /// Move the painting out, leaving an empty one in its place. Pixels are untouched.
    pub fn take_painting(&mut self) -> Painting {
        std::mem::take(&mut self.painting)
    }

    pub fn current_stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    pub fn size(&self) -> CanvasSize {
        self.buffer.size()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn brush(&self) -> &BrushMask {
        &self.brush
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn save_png(&self, path: &Path) -> InklingResult<()> {
        self.buffer.save_png(path)
    }

    fn stamp(&mut self, x: i32, y: i32) -> usize {
        let mut written = 0;
        for (px, py, colour) in self.brush.opaque_cells() {
            let target = PixelCoord::new(x.saturating_add(px), y.saturating_add(py));
            if self.buffer.put_pixel(target, colour) {
                written += 1;
            }
        }
        written
    }

    fn present(&mut self) -> InklingResult<()> {
        self.surface
            .update_region(&self.region, self.buffer.bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
