/// Result of any fallible canvas, export, classifier or config operation.
pub type InklingResult<T> = Result<T, InklingError>;

/// Everything that can go wrong in a round.
///
/// Drawing off the canvas, empty strokes and empty paintings are not errors; they are clipped
/// or skipped silently.
#[derive(thiserror::Error, Debug)]
pub enum InklingError {
    /// Rejected input: zero canvas size, brush radius 0, stroke arrays of unequal length, or a
    /// config value out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// The classifier could not be launched, its thread died, or it exited non-zero.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A drawing record or config file that is not the expected JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// File IO or PNG encoding, with the path attached as context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InklingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
