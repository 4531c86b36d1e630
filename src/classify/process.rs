use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::foundation::error::{InklingError, InklingResult};

/// How to launch the classifier. The input file path is appended as the last argument.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifierCommand {
    /// Executable name or path.
    pub program: String,
    /// Arguments placed before the input path.
    #[serde(default)]
    pub args: Vec<String>,
    /// Working directory for the child process; inherited when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for ClassifierCommand {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["PaintingRater.py".to_string()],
            working_dir: None,
        }
    }
}

impl ClassifierCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn validate(&self) -> InklingResult<()> {
        if self.program.trim().is_empty() {
            return Err(InklingError::validation(
                "classifier program must be non-empty",
            ));
        }
        Ok(())
    }

    /// Run the classifier on `input` and wait for it to exit.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`ClassifierOutput::exit_code`]. Only failing to launch or collect the process is.
    #[tracing::instrument(skip(self), fields(program = %self.program))]
    pub fn run(&self, input: &Path) -> InklingResult<ClassifierOutput> {
        self.validate()?;
        // The child may run in another directory, so hand it an absolute path.
        let input = std::path::absolute(input)
            .with_context(|| format!("failed to resolve '{}'", input.display()))?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(&input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            InklingError::evaluation(format!(
                "failed to run classifier '{}': {e}",
                self.program
            ))
        })?;

        let out = ClassifierOutput {
            // Killed by a signal: there is no exit code to report.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::info!(exit_code = out.exit_code, "classifier finished");
        Ok(out)
    }
}

/// Everything the classifier process reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifierOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ClassifierOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Last non-empty stdout line, trimmed.
    pub fn predicted_label(&self) -> Option<&str> {
        self.stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
    }

    /// The predicted label of a successful run, or an evaluation error describing the failure.
    pub fn into_label(self) -> InklingResult<String> {
        if !self.succeeded() {
            return Err(InklingError::evaluation(format!(
                "classifier exited with status {}: {}",
                self.exit_code,
                self.stderr.trim()
            )));
        }
        self.predicted_label()
            .map(str::to_string)
            .ok_or_else(|| InklingError::evaluation("classifier printed no prediction"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/process.rs"]
mod tests;
