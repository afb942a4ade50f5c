//! Display state for the kiosk labels and the event reducer that drives it.

use std::collections::BTreeSet;

use print_core::{RunId, RunOutcome, Status};

use crate::controller::events::UiEvent;

pub const HEADER_TEXT: &str = "Print Queue Dashboard";
pub const INITIAL_STATUS_TEXT: &str = "Current Status: Waiting for Orders";
pub const FOOTER_TEXT: &str = "Powered by Print System";
pub const START_BUTTON_TEXT: &str = "Start Processing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub current_status: String,
    pub progress: String,
    pub notice: Option<String>,
    active_runs: BTreeSet<RunId>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            current_status: INITIAL_STATUS_TEXT.to_string(),
            progress: Status::first().label().to_string(),
            notice: None,
            active_runs: BTreeSet::new(),
        }
    }
}

impl DisplayState {
    pub fn render_status(&mut self, status: Status) {
        self.current_status = format!("Current Status: {status}");
        self.progress = status.label().to_string();
    }

    /// Applies one worker event; returns true when visible text changed.
    pub fn apply(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::StatusReported(report) => {
                if self.active_runs.insert(report.run) && self.active_runs.len() > 1 {
                    tracing::warn!(
                        run = %report.run,
                        active = self.active_runs.len(),
                        "overlapping order runs; labels show the latest report"
                    );
                }
                self.render_status(report.status);
                true
            }
            UiEvent::RunFinished { run, outcome } => {
                self.active_runs.remove(&run);
                match outcome {
                    RunOutcome::Completed => tracing::info!(%run, "order run completed"),
                    RunOutcome::Abandoned { last_reported } => {
                        tracing::warn!(%run, ?last_reported, "order run abandoned")
                    }
                }
                false
            }
            UiEvent::WorkerFailed(reason) => {
                self.notice = Some(format!("Could not start processing: {reason}"));
                true
            }
        }
    }
}
