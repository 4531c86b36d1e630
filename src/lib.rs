//! Inkling is the core of a drawing-guessing game.
//!
//! A player is given a word and draws it with a round brush. Strokes are captured as pointer
//! samples, simplified with Ramer-Douglas-Peucker, written out as one ndjson record and handed to
//! an external classifier that guesses what was drawn.
//!
//! - Paint on a [`RasterCanvas`] and push its BGRA buffer to a [`DisplaySurface`]
//! - Simplify the captured [`Painting`] and export it with [`export_painting`]
//! - Run a [`ClassifierCommand`] on the exported file, or let a [`RoundDriver`] do all of it
#![forbid(unsafe_code)]

mod foundation;

pub mod classify;
pub mod config;
pub mod export;
pub mod raster;
pub mod session;
pub mod stroke;

pub use crate::foundation::core::{Bgra8, CanvasSize, PixelCoord, Point, Vec2};
pub use crate::foundation::error::{InklingError, InklingResult};

pub use crate::classify::job::ClassifierJob;
pub use crate::classify::process::{ClassifierCommand, ClassifierOutput};
pub use crate::config::GameConfig;
pub use crate::export::ndjson::{DrawingRecord, export_painting, read_ndjson, write_ndjson};
pub use crate::raster::brush::BrushMask;
pub use crate::raster::buffer::PixelBuffer;
pub use crate::raster::canvas::{DEFAULT_BRUSH_RADIUS, RasterCanvas};
pub use crate::raster::display::{DisplaySurface, InMemorySurface, NullSurface, UpdateRegion};
pub use crate::session::round::{DrawingState, RoundDriver, RoundOutcome};
pub use crate::session::words::WordPicker;
pub use crate::stroke::model::{Painting, Stroke, StrokeArrays};
