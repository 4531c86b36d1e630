use crate::classify::job::ClassifierJob;
use crate::classify::process::ClassifierOutput;
use crate::config::GameConfig;
use crate::export::ndjson::export_painting;
use crate::foundation::core::PixelCoord;
use crate::foundation::error::{InklingError, InklingResult};
use crate::raster::canvas::RasterCanvas;
use crate::raster::display::DisplaySurface;
use crate::session::words::WordPicker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawingState {
    WaitingForStart,
    Drawing,
    Evaluating,
    RoundEnded,
}

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The classifier exited cleanly and printed `label`.
    Predicted { word: String, label: String },
    /// The classifier could not run, exited non-zero, or printed nothing.
    /// `exit_code` is `None` when there was no process exit to report.
    Failed {
        word: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl RoundOutcome {
    pub fn word(&self) -> &str {
        match self {
            Self::Predicted { word, .. } | Self::Failed { word, .. } => word,
        }
    }

    /// Whether the classifier guessed the word the player was asked to draw.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Predicted { word, label } if word == label)
    }

    fn from_result(word: String, result: InklingResult<ClassifierOutput>) -> Self {
        match result {
            Ok(out) if out.succeeded() => match out.predicted_label() {
                Some(label) => Self::Predicted {
                    label: label.to_string(),
                    word,
                },
                None => Self::Failed {
                    word,
                    exit_code: Some(out.exit_code),
                    stderr: "classifier printed no prediction".to_string(),
                },
            },
            Ok(out) => Self::Failed {
                word,
                exit_code: Some(out.exit_code),
                stderr: out.stderr,
            },
            Err(e) => Self::Failed {
                word,
                exit_code: None,
                stderr: e.to_string(),
            },
        }
    }
}

/// Drives one player's rounds: `WaitingForStart -> Drawing -> Evaluating -> RoundEnded`.
///
/// Input handlers only reach the canvas while a round is `Drawing`; in every other state they
/// are ignored. The classifier runs on its own thread and the owner collects the result with
/// [`RoundDriver::poll`] from its frame loop.
pub struct RoundDriver<S: DisplaySurface> {
    config: GameConfig,
    canvas: RasterCanvas<S>,
    words: WordPicker,
    state: DrawingState,
    word: Option<String>,
    job: Option<ClassifierJob>,
    pending: Option<RoundOutcome>,
}

impl<S: DisplaySurface> RoundDriver<S> {
    pub fn new(config: GameConfig, surface: S) -> InklingResult<Self> {
        config.validate()?;
        let mut canvas = RasterCanvas::new(config.canvas_width, config.canvas_height, surface)?;
        canvas.initialize_brush(config.brush_radius)?;
        Ok(Self {
            words: WordPicker::new(config.word_seed),
            config,
            canvas,
            state: DrawingState::WaitingForStart,
            word: None,
            job: None,
            pending: None,
        })
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// Word of the current (or last) round.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas(&self) -> &RasterCanvas<S> {
        &self.canvas
    }

    /// The confirm button: starts a round, submits a drawing, or does nothing while evaluating.
    pub fn confirm(&mut self) -> InklingResult<DrawingState> {
        match self.state {
            DrawingState::WaitingForStart | DrawingState::RoundEnded => self.begin_round()?,
            DrawingState::Drawing => self.submit()?,
            DrawingState::Evaluating => tracing::debug!("confirm ignored while evaluating"),
        }
        Ok(self.state)
    }

    pub fn reset(&mut self) -> InklingResult<()> {
        if self.state == DrawingState::Drawing {
            self.canvas.clear_canvas()?;
        }
        Ok(())
    }

    pub fn start_drawing(&mut self) {
        if self.state == DrawingState::Drawing {
            self.canvas.start_drawing();
        }
    }

    /// Forward a pointer sample; `None` is a miss. Returns the interpolated step count.
    pub fn draw(&mut self, at: Option<PixelCoord>) -> InklingResult<usize> {
        if self.state != DrawingState::Drawing {
            return Ok(0);
        }
        match at {
            Some(at) => self.canvas.draw(at),
            None => {
                self.canvas.miss();
                Ok(0)
            }
        }
    }

    pub fn stop_drawing(&mut self) -> bool {
        self.state == DrawingState::Drawing && self.canvas.stop_drawing()
    }

    /// Non-blocking: returns the outcome once, on the transition to `RoundEnded`.
    pub fn poll(&mut self) -> Option<RoundOutcome> {
        if self.state != DrawingState::Evaluating {
            return None;
        }
        let outcome = match self.pending.take() {
            Some(outcome) => outcome,
            None => {
                let result = self.job.as_mut()?.poll()?;
                self.job = None;
                RoundOutcome::from_result(self.word.clone().unwrap_or_default(), result)
            }
        };
        Some(self.end_round(outcome))
    }

    /// Block until the classifier reports. `None` unless a round is being evaluated.
    pub fn wait(&mut self) -> Option<RoundOutcome> {
        if self.state != DrawingState::Evaluating {
            return None;
        }
        let outcome = match (self.pending.take(), self.job.take()) {
            (Some(outcome), _) => outcome,
            (None, Some(job)) => {
                RoundOutcome::from_result(self.word.clone().unwrap_or_default(), job.wait())
            }
            (None, None) => return None,
        };
        Some(self.end_round(outcome))
    }

    fn begin_round(&mut self) -> InklingResult<()> {
        let word = self
            .words
            .pick(&self.config.classes)
            .ok_or_else(|| InklingError::validation("no words to pick from"))?
            .to_string();
        self.canvas.clear_canvas()?;
        tracing::info!(word = %word, "round started");
        self.word = Some(word);
        self.state = DrawingState::Drawing;
        Ok(())
    }

    fn submit(&mut self) -> InklingResult<()> {
        // Only committed strokes go out; a stroke still held down is not part of the painting.
        let word = self.word.clone().unwrap_or_default();
        self.canvas
            .painting_mut()
            .simplify(self.config.simplify_epsilon);
        export_painting(&self.config.output_path, &word, self.canvas.painting())?;

        match ClassifierJob::spawn(self.config.classifier.clone(), self.config.output_path.clone())
        {
            Ok(job) => self.job = Some(job),
            Err(e) => {
                tracing::warn!(error = %e, "classifier could not be started");
                self.pending = Some(RoundOutcome::Failed {
                    word,
                    exit_code: None,
                    stderr: e.to_string(),
                });
            }
        }
        self.state = DrawingState::Evaluating;
        Ok(())
    }

    fn end_round(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        match &outcome {
            RoundOutcome::Predicted { word, label } => {
                tracing::info!(word = %word, label = %label, "round ended");
            }
            RoundOutcome::Failed { exit_code, stderr, .. } => {
                tracing::warn!(?exit_code, stderr = %stderr.trim(), "classifier failed");
            }
        }
        self.state = DrawingState::RoundEnded;
        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/round.rs"]
mod tests;
