use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::JoinHandle;

use anyhow::Context as _;

use super::process::{ClassifierCommand, ClassifierOutput};
use crate::foundation::error::{InklingError, InklingResult};

type JobResult = InklingResult<ClassifierOutput>;

/// A classifier run on a background thread.
///
/// The worker publishes exactly one result into a single-slot channel. The owner polls from its
/// own loop; [`ClassifierJob::poll`] yields the result once and `None` forever after.
#[derive(Debug)]
pub struct ClassifierJob {
    rx: Receiver<JobResult>,
    worker: Option<JoinHandle<()>>,
    collected: bool,
}

impl ClassifierJob {
    #[tracing::instrument(skip(command), fields(program = %command.program))]
    pub fn spawn(command: ClassifierCommand, input: PathBuf) -> InklingResult<Self> {
        command.validate()?;
        let (tx, rx) = mpsc::sync_channel::<JobResult>(1);
        let worker = std::thread::Builder::new()
            .name("inkling-classifier".to_string())
            .spawn(move || {
                let result = command.run(&input);
                // The owner may have dropped the job; nobody is left to tell.
                let _ = tx.send(result);
            })
            .context("failed to spawn classifier thread")?;
        tracing::debug!("classifier job started");
        Ok(Self {
            rx,
            worker: Some(worker),
            collected: false,
        })
    }

    /// Non-blocking check for the result.
    pub fn poll(&mut self) -> Option<JobResult> {
        if self.collected {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => Some(self.finish(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.finish(Err(InklingError::evaluation(
                "classifier thread exited without a result",
            )))),
        }
    }

    /// Block until the worker reports.
    pub fn wait(mut self) -> JobResult {
        if self.collected {
            return Err(InklingError::evaluation(
                "classifier result was already collected",
            ));
        }
        let result = self.rx.recv().unwrap_or_else(|_| {
            Err(InklingError::evaluation(
                "classifier thread exited without a result",
            ))
        });
        self.finish(result)
    }

    /// True once the result has been handed out.
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    fn finish(&mut self, result: JobResult) -> JobResult {
        self.collected = true;
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            return Err(InklingError::evaluation("classifier thread panicked"));
        }
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/job.rs"]
mod tests;
