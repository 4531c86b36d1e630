use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Bgra8, CanvasSize, PixelCoord};
use crate::foundation::error::InklingResult;

/// Bytes per canvas pixel (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major BGRA8 pixels, `pitch = width * 4`. Dimensions are fixed for the buffer's lifetime;
/// a different size means a new buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: CanvasSize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer already cleared to [`Bgra8::BLANK`].
    pub fn new(size: CanvasSize) -> Self {
        let mut buffer = Self {
            size,
            data: vec![0u8; size.pixel_count() * BYTES_PER_PIXEL],
        };
        buffer.clear();
        buffer
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn pitch(&self) -> usize {
        self.size.width as usize * BYTES_PER_PIXEL
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        let blank = Bgra8::BLANK.to_bytes();
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&blank);
        }
    }

    pub fn pixel(&self, at: PixelCoord) -> Option<Bgra8> {
        let i = self.offset(at)?;
        let mut px = [0u8; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.data[i..i + BYTES_PER_PIXEL]);
        Some(Bgra8::from_bytes(px))
    }

    /// Overwrites one pixel. Out-of-bounds writes are dropped; returns whether the write landed.
    pub(crate) fn put_pixel(&mut self, at: PixelCoord, px: Bgra8) -> bool {
        let Some(i) = self.offset(at) else {
            return false;
        };
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px.to_bytes());
        true
    }

    pub fn count_pixels(&self, px: Bgra8) -> usize {
        let needle = px.to_bytes();
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|p| *p == needle)
            .count()
    }

    /// Straight-alpha RGBA8 copy of the buffer, the byte order image encoders expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(BYTES_PER_PIXEL) {
            out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> InklingResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.size.width,
            self.size.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn offset(&self, at: PixelCoord) -> Option<usize> {
        if !self.size.contains(at) {
            return None;
        }
        Some((at.x as usize + at.y as usize * self.size.width as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
