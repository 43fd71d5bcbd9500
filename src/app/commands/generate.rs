use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, Datasets, GeneratedEmail, GenerationError, GenerationOutcome, GenerationRequest,
};
use crate::ports::{GenerationClient, TableSource};

use super::prompt;

/// Validate the instructions and build the request for `person`.
///
/// Blank instructions are rejected before any lookup or network call.
pub fn prepare<S: TableSource>(
    ctx: &AppContext<S>,
    datasets: &Datasets,
    person: &str,
    instructions: &str,
) -> Result<GenerationRequest, AppError> {
    if instructions.trim().is_empty() {
        return Err(AppError::EmptyInstructions);
    }
    let prompt = prompt::execute(ctx, datasets, person, instructions)?;
    debug!(person, prompt_chars = prompt.len(), "assembled prompt");
    Ok(GenerationRequest::new(prompt))
}

/// A generation request running on its own thread.
///
/// The outcome arrives over a channel; the caller stays free to report
/// progress while it waits.
pub struct GenerationTask {
    receiver: Receiver<GenerationOutcome>,
    handle: JoinHandle<()>,
}

impl GenerationTask {
    pub fn spawn<C>(client: Arc<C>, request: GenerationRequest) -> Result<Self, AppError>
    where
        C: GenerationClient + Send + Sync + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new().name("generation".into()).spawn(move || {
            let outcome = GenerationOutcome::from(client.generate(&request));
            // The receiver may be gone if the caller stopped waiting.
            let _ = sender.send(outcome);
        })?;
        Ok(Self { receiver, handle })
    }

    /// Block until the request completes.
    pub fn wait(self) -> GenerationOutcome {
        let outcome = self
            .receiver
            .recv()
            .unwrap_or(GenerationOutcome::Failure(GenerationError::WorkerLost));
        let _ = self.handle.join();
        outcome
    }

    /// Block until the request completes, calling `tick` every `interval`.
    pub fn wait_with_progress(self, interval: Duration, mut tick: impl FnMut()) -> GenerationOutcome {
        let outcome = loop {
            match self.receiver.recv_timeout(interval) {
                Ok(outcome) => break outcome,
                Err(RecvTimeoutError::Timeout) => tick(),
                Err(RecvTimeoutError::Disconnected) => {
                    break GenerationOutcome::Failure(GenerationError::WorkerLost);
                }
            }
        };
        let _ = self.handle.join();
        outcome
    }
}

/// Run one generation for `person` and fold the outcome into display text.
///
/// Lookup and input errors are returned; model and transport failures
/// come back as a `GeneratedEmail` carrying the error message.
pub fn execute<S, C>(
    ctx: &AppContext<S>,
    client: Arc<C>,
    datasets: &Datasets,
    person: &str,
    instructions: &str,
) -> Result<GeneratedEmail, AppError>
where
    S: TableSource,
    C: GenerationClient + Send + Sync + 'static,
{
    let request = prepare(ctx, datasets, person, instructions)?;
    let outcome = GenerationTask::spawn(client, request)?.wait();
    info!(person, success = outcome.is_success(), "generation finished");
    Ok(outcome.render())
}
