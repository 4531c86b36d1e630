use crate::foundation::core::CanvasSize;
use crate::foundation::error::{InklingError, InklingResult};
use crate::raster::buffer::BYTES_PER_PIXEL;

/// Rectangle of the canvas being pushed, plus the layout of the accompanying bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateRegion {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
    /// Bytes between the starts of consecutive rows.
    pub pitch: usize,
    /// Always 4 (B, G, R, A).
    pub bytes_per_pixel: usize,
}

impl UpdateRegion {
    /// The whole canvas, origin at `(0, 0)`.
    pub fn full(size: CanvasSize) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
            pitch: size.width as usize * BYTES_PER_PIXEL,
            bytes_per_pixel: BYTES_PER_PIXEL,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.pitch * self.height as usize
    }
}

/// Destination that displays the canvas bytes (a texture, a window, a test recorder).
///
/// Called after every pixel mutation that should become visible.
pub trait DisplaySurface {
    /// Display `data`, laid out as described by `region`.
    fn update_region(&mut self, region: &UpdateRegion, data: &[u8]) -> InklingResult<()>;
}

/// Discards every push. For headless runs that only need the stroke data.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn update_region(&mut self, _region: &UpdateRegion, _data: &[u8]) -> InklingResult<()> {
        Ok(())
    }
}

/// Keeps a copy of the latest push and counts pushes; for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct InMemorySurface {
    pushes: usize,
    region: Option<UpdateRegion>,
    frame: Vec<u8>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn region(&self) -> Option<UpdateRegion> {
        self.region
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }
}

impl DisplaySurface for InMemorySurface {
    fn update_region(&mut self, region: &UpdateRegion, data: &[u8]) -> InklingResult<()> {
        if region.bytes_per_pixel != BYTES_PER_PIXEL {
            return Err(InklingError::validation(format!(
                "display push expects {BYTES_PER_PIXEL} bytes per pixel, got {}",
                region.bytes_per_pixel
            )));
        }
        if data.len() < region.byte_len() {
            return Err(InklingError::validation(format!(
                "display push has {} bytes, region needs {}",
                data.len(),
                region.byte_len()
            )));
        }
        self.pushes += 1;
        self.region = Some(*region);
        self.frame.clear();
        self.frame.extend_from_slice(&data[..region.byte_len()]);
        Ok(())
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn update_region(&mut self, region: &UpdateRegion, data: &[u8]) -> InklingResult<()> {
        (**self).update_region(region, data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/display.rs"]
mod tests;
