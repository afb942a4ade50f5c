//! Events posted from backend workers to the UI thread.

use print_core::{RunId, RunOutcome, StatusReport};

#[derive(Debug, Clone)]
pub enum UiEvent {
    StatusReported(StatusReport),
    RunFinished { run: RunId, outcome: RunOutcome },
    WorkerFailed(String),
}
