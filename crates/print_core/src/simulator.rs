//! Order simulator: walks the fixed status sequence with simulated work delays.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    error::{SimulatorError, SinkClosed},
    status::{RunId, Status, StatusReport},
};

/// Receives status transitions from simulator workers.
///
/// Implementations are called from worker threads and must hand the report off
/// to whoever owns rendered state rather than mutate it in place.
pub trait StatusSink: Send + Sync + 'static {
    fn report(&self, report: StatusReport) -> Result<(), SinkClosed>;

    /// Called once per run after its last report (or after the sink closed).
    fn finished(&self, _run: RunId, _outcome: RunOutcome) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorTimings {
    /// Wait after "Fetching Data..." before "Printing...".
    pub fetch: Duration,
    /// Wait after "Printing..." before "Printing Complete...".
    pub print: Duration,
    /// Wait after "Printing Complete..." before "Order Completed!".
    pub collect: Duration,
}

impl Default for SimulatorTimings {
    fn default() -> Self {
        Self {
            fetch: Duration::from_secs(2),
            print: Duration::from_secs(3),
            collect: Duration::from_secs(2),
        }
    }
}

impl SimulatorTimings {
    pub fn from_millis(fetch: u64, print: u64, collect: u64) -> Self {
        Self {
            fetch: Duration::from_millis(fetch),
            print: Duration::from_millis(print),
            collect: Duration::from_millis(collect),
        }
    }

    /// Delay that follows reporting `status`; `None` once the run is done.
    pub fn delay_after(&self, status: Status) -> Option<Duration> {
        match status {
            Status::FetchingData => Some(self.fetch),
            Status::Printing => Some(self.print),
            Status::PrintingComplete => Some(self.collect),
            Status::OrderCompleted => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The sink closed before the last status was delivered.
    Abandoned { last_reported: Option<Status> },
}

pub struct OrderSimulator<S: StatusSink> {
    sink: Arc<S>,
    timings: SimulatorTimings,
    next_run: AtomicU64,
}

impl<S: StatusSink> OrderSimulator<S> {
    pub fn new(sink: S, timings: SimulatorTimings) -> Self {
        Self::with_shared_sink(Arc::new(sink), timings)
    }

    pub fn with_shared_sink(sink: Arc<S>, timings: SimulatorTimings) -> Self {
        Self {
            sink,
            timings,
            next_run: AtomicU64::new(1),
        }
    }

    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    fn allocate_run(&self) -> RunId {
        RunId(self.next_run.fetch_add(1, Ordering::Relaxed))
    }

    /// Runs one order to completion on the calling thread.
    pub fn run(&self, run: RunId) -> RunOutcome {
        tracing::info!(%run, "order simulation started");
        let outcome = self.walk(run);
        self.sink.finished(run, outcome);
        outcome
    }

    fn walk(&self, run: RunId) -> RunOutcome {
        let mut current = Some(Status::first());
        let mut last_reported = None;

        while let Some(status) = current {
            if self.sink.report(StatusReport::now(run, status)).is_err() {
                tracing::warn!(%run, %status, "status sink closed; abandoning run");
                return RunOutcome::Abandoned { last_reported };
            }
            tracing::debug!(%run, %status, "reported status");
            last_reported = Some(status);

            if let Some(delay) = self.timings.delay_after(status) {
                thread::sleep(delay);
            }
            current = status.next();
        }

        tracing::info!(%run, "order simulation finished");
        RunOutcome::Completed
    }

    /// Starts an independent run on its own worker thread.
    ///
    /// Calls are never de-duplicated: two spawns produce two interleaving runs.
    pub fn spawn(self: &Arc<Self>) -> Result<(RunId, JoinHandle<RunOutcome>), SimulatorError> {
        let run = self.allocate_run();
        let simulator = Arc::clone(self);
        let handle = thread::Builder::new()
            .name(format!("order-sim-{}", run.0))
            .spawn(move || simulator.run(run))?;
        Ok((run, handle))
    }
}

#[cfg(test)]
#[path = "tests/simulator_tests.rs"]
mod tests;
