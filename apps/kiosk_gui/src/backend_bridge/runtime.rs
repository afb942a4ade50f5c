//! Runtime bridge between UI command queue and simulator workers.

use std::{
    io,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use print_core::{
    OrderSimulator, RunId, RunOutcome, SimulatorTimings, SinkClosed, StatusReport, StatusSink,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Posts worker reports onto the UI event queue and wakes the event loop.
pub struct UiEventSink {
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
}

impl UiEventSink {
    pub fn new(ui_tx: Sender<UiEvent>, repaint: egui::Context) -> Self {
        Self { ui_tx, repaint }
    }
}

impl StatusSink for UiEventSink {
    fn report(&self, report: StatusReport) -> Result<(), SinkClosed> {
        // Blocks only the worker when the queue is full.
        self.ui_tx
            .send(UiEvent::StatusReported(report))
            .map_err(|_| SinkClosed)?;
        self.repaint.request_repaint();
        Ok(())
    }

    fn finished(&self, run: RunId, outcome: RunOutcome) {
        if self
            .ui_tx
            .send(UiEvent::RunFinished { run, outcome })
            .is_ok()
        {
            self.repaint.request_repaint();
        }
    }
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
    timings: SimulatorTimings,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("kiosk-backend".to_string())
        .spawn(move || run_bridge(cmd_rx, ui_tx, repaint, timings))
}

fn run_bridge(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: egui::Context,
    timings: SimulatorTimings,
) {
    let sink = UiEventSink::new(ui_tx.clone(), repaint.clone());
    let simulator = Arc::new(OrderSimulator::new(sink, timings));
    tracing::info!(?timings, "backend bridge ready");

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::StartProcessing => match simulator.spawn() {
                Ok((run, _worker)) => {
                    tracing::info!(%run, "spawned order simulator worker");
                }
                Err(err) => {
                    tracing::error!("failed to start order processing: {err}");
                    if ui_tx.try_send(UiEvent::WorkerFailed(err.to_string())).is_ok() {
                        repaint.request_repaint();
                    }
                }
            },
        }
    }

    tracing::info!("ui command queue closed; backend bridge exiting");
}
