use crate::foundation::error::{InklingError, InklingResult};

pub use kurbo::{Point, Vec2};

/// Integer pixel coordinate on the canvas. May lie outside the canvas bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Truncates toward zero, the same way the brush stamp addresses pixels.
    pub fn from_point_trunc(p: Point) -> Self {
        Self {
            x: p.x as i32,
            y: p.y as i32,
        }
    }
}

/// Fixed canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> InklingResult<Self> {
        if width == 0 || height == 0 {
            return Err(InklingError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }

    pub fn contains(self, c: PixelCoord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    pub fn contains_point(self, p: Point) -> bool {
        p.x >= 0.0
            && p.y >= 0.0
            && p.x < f64::from(self.width)
            && p.y < f64::from(self.height)
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// One canvas pixel in buffer byte order (B, G, R, A), straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bgra8 {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra8 {
    /// Value every pixel takes after a clear: white with zero alpha.
    pub const BLANK: Self = Self::from_rgba(255, 255, 255, 0);
    /// Opaque black, the colour of the brush interior.
    pub const INK: Self = Self::from_rgba(0, 0, 0, 255);
    /// Fully transparent black, the brush exterior.
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    pub const fn from_bytes(px: [u8; 4]) -> Self {
        Self {
            b: px[0],
            g: px[1],
            r: px[2],
            a: px[3],
        }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
