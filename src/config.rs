//! Game configuration loaded from JSON. Every field has a default, so `{}` is a valid config.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::classify::process::ClassifierCommand;
use crate::foundation::error::{InklingError, InklingResult};
use crate::raster::canvas::DEFAULT_BRUSH_RADIUS;

pub const DEFAULT_CANVAS_SIZE: u32 = 1024;
pub const DEFAULT_SIMPLIFY_EPSILON: f64 = 2.0;
pub const DEFAULT_OUTPUT_PATH: &str = "PaintingHistory/Painting_0.ndjson";
pub const DEFAULT_WORD_SEED: u32 = 0x9E37_79B9;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_radius: u32,
    /// Simplification tolerance in pixels, applied to every stroke before export.
    pub simplify_epsilon: f64,
    /// Words a round can ask for. The classifier is expected to know the same labels.
    pub classes: Vec<String>,
    pub output_path: PathBuf,
    pub word_seed: u32,
    pub classifier: ClassifierCommand,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            simplify_epsilon: DEFAULT_SIMPLIFY_EPSILON,
            classes: ["airplane", "ant", "axe", "bed"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            word_seed: DEFAULT_WORD_SEED,
            classifier: ClassifierCommand::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> InklingResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| InklingError::serde(format!("config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> InklingResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| InklingError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> InklingResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(InklingError::validation(
                "canvas_width and canvas_height must be non-zero",
            ));
        }
        if self.brush_radius == 0 {
            return Err(InklingError::validation("brush_radius must be at least 1"));
        }
        if !self.simplify_epsilon.is_finite() || self.simplify_epsilon < 0.0 {
            return Err(InklingError::validation(
                "simplify_epsilon must be finite and >= 0",
            ));
        }
        if self.classes.is_empty() {
            return Err(InklingError::validation("classes must not be empty"));
        }
        if let Some(i) = self.classes.iter().position(|c| c.trim().is_empty()) {
            return Err(InklingError::validation(format!("classes[{i}] is blank")));
        }
        self.classifier.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
