use crate::foundation::core::Bgra8;
use crate::foundation::error::{InklingError, InklingResult};
use crate::raster::buffer::BYTES_PER_PIXEL;

/// Square stamp of side `2 * radius` covering offsets `[-radius, radius)` on both axes.
///
/// A cell is opaque ink when its offset lies strictly inside the disk (`px² + py² < r²`) and
/// fully transparent otherwise. The mask is immutable; a new radius means a new mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrushMask {
    radius: i32,
    cells: Vec<u8>,
}

impl BrushMask {
    pub fn new(radius: u32) -> InklingResult<Self> {
        let radius = i32::try_from(radius)
            .ok()
            .filter(|&r| r >= 1)
            .ok_or_else(|| InklingError::validation("brush radius must be in 1..=i32::MAX"))?;

        let side = 2 * radius as usize;
        let mut cells = vec![0u8; side * side * BYTES_PER_PIXEL];
        let r2 = i64::from(radius) * i64::from(radius);
        for py in -radius..radius {
            for px in -radius..radius {
                let inside = i64::from(px) * i64::from(px) + i64::from(py) * i64::from(py) < r2;
                let cell = if inside { Bgra8::INK } else { Bgra8::TRANSPARENT };
                let i = Self::index(radius, px, py);
                cells[i..i + BYTES_PER_PIXEL].copy_from_slice(&cell.to_bytes());
            }
        }

        Ok(Self { radius, cells })
    }

    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    pub fn side(&self) -> usize {
        2 * self.radius as usize
    }

    /// Cell at offset `(px, py)` from the stamp centre; `None` outside `[-r, r)`.
    pub fn cell(&self, px: i32, py: i32) -> Option<Bgra8> {
        let r = self.radius;
        if px < -r || px >= r || py < -r || py >= r {
            return None;
        }
        let i = Self::index(r, px, py);
        let mut out = [0u8; BYTES_PER_PIXEL];
        out.copy_from_slice(&self.cells[i..i + BYTES_PER_PIXEL]);
        Some(Bgra8::from_bytes(out))
    }

    /// Opaque cells as `(px, py, colour)` offsets from the stamp centre.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (i32, i32, Bgra8)> + '_ {
        let r = self.radius;
        (-r..r)
            .flat_map(move |py| (-r..r).map(move |px| (px, py)))
            .filter_map(move |(px, py)| {
                self.cell(px, py)
                    .filter(|c| c.is_opaque())
                    .map(|c| (px, py, c))
            })
    }

    pub fn opaque_count(&self) -> usize {
        self.cells
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|c| c[3] == 255)
            .count()
    }

    fn index(radius: i32, px: i32, py: i32) -> usize {
        let side = 2 * radius as usize;
        let tx = (px + radius) as usize;
        let ty = (py + radius) as usize;
        (tx + ty * side) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/brush.rs"]
mod tests;
