//! Stroke capture and polyline simplification.

/// Stroke and painting containers plus their wire serialization.
pub mod model;
/// Ramer–Douglas–Peucker kept-mask computation.
pub mod simplify;
