//! Raster canvas: a fixed-size BGRA8 pixel buffer, a circular brush stamp, and the drawing
//! operations that composite the stamp into the buffer and push it to a display surface.

/// Owned BGRA8 pixel storage.
pub mod buffer;
/// Disk-shaped brush stamp.
pub mod brush;
/// Canvas drawing operations and stroke capture.
pub mod canvas;
/// Display push boundary.
pub mod display;
