use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use print_core::qr::QrRgba;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        orchestration::dispatch_backend_command,
        reducer::{DisplayState, FOOTER_TEXT, HEADER_TEXT, START_BUTTON_TEXT},
    },
    ui::theme::{self, KioskPalette},
};

/// Display controller: owns every visible widget and is the only writer of
/// label state. Workers reach it exclusively through `ui_rx`.
pub struct KioskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    qr_texture: egui::TextureHandle,
    qr_size: egui::Vec2,
    palette: KioskPalette,
    display: DisplayState,
}

impl KioskApp {
    pub fn new(
        ctx: &egui::Context,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        qr: QrRgba,
    ) -> Self {
        let palette = KioskPalette::default();
        theme::apply(ctx, palette);

        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([qr.width, qr.height], &qr.rgba);
        let qr_texture = ctx.load_texture("qr-code", color_image, egui::TextureOptions::LINEAR);

        let mut app = Self {
            cmd_tx,
            ui_rx,
            qr_texture,
            qr_size: egui::vec2(qr.width as f32, qr.height as f32),
            palette,
            display: DisplayState::default(),
        };
        app.start();
        app
    }

    /// Queues one independent order simulation. Repeated calls are not merged.
    pub fn start(&mut self) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::StartProcessing,
            &mut self.display.notice,
        );
    }

    /// Drains worker events on the UI thread; label changes trigger an
    /// immediate repaint rather than waiting for the next input event.
    fn process_ui_events(&mut self, ctx: &egui::Context) {
        let mut changed = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            if let UiEvent::StatusReported(report) = &event {
                tracing::debug!(run = %report.run, status = %report.status, "rendering status");
            }
            changed |= self.display.apply(event);
        }
        if changed {
            ctx.request_repaint();
        }
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::NONE.fill(self.palette.background))
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new(FOOTER_TEXT)
                            .size(theme::FOOTER_SIZE)
                            .color(self.palette.label),
                    );
                    ui.add_space(20.0);
                });
            });
    }

    fn show_dashboard(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.background))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(30.0);
                    ui.add(egui::Image::new(&self.qr_texture).fit_to_exact_size(self.qr_size));
                    ui.add_space(30.0);

                    ui.label(
                        egui::RichText::new(HEADER_TEXT)
                            .size(theme::HEADER_SIZE)
                            .strong()
                            .color(self.palette.header),
                    );
                    ui.add_space(20.0);

                    ui.label(
                        egui::RichText::new(&self.display.current_status)
                            .size(theme::STATUS_SIZE)
                            .color(self.palette.label),
                    );
                    ui.add_space(20.0);

                    ui.label(
                        egui::RichText::new(&self.display.progress)
                            .size(theme::PROGRESS_SIZE)
                            .color(self.palette.progress),
                    );
                    ui.add_space(40.0);

                    let button = egui::Button::new(
                        egui::RichText::new(START_BUTTON_TEXT)
                            .size(theme::BUTTON_SIZE)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(self.palette.button)
                    .min_size(egui::vec2(240.0, 56.0));
                    if ui.add(button).clicked() {
                        self.start();
                    }

                    if let Some(notice) = &self.display.notice {
                        ui.add_space(10.0);
                        ui.small(egui::RichText::new(notice).color(self.palette.progress));
                    }
                });
            });
    }
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.show_footer(ctx);
        self.show_dashboard(ctx);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use print_core::{RunId, Status, StatusReport};

    use super::*;

    fn tiny_qr() -> QrRgba {
        QrRgba {
            width: 2,
            height: 2,
            rgba: vec![255; 2 * 2 * 4],
        }
    }

    #[test]
    fn new_auto_starts_once_and_each_start_queues_another_run() {
        let ctx = egui::Context::default();
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);

        let mut app = KioskApp::new(&ctx, cmd_tx, ui_rx, tiny_qr());
        assert_eq!(cmd_rx.len(), 1);

        app.start();
        app.start();
        assert_eq!(cmd_rx.len(), 3);
        assert!(cmd_rx
            .try_iter()
            .all(|cmd| cmd == BackendCommand::StartProcessing));
        assert_eq!(app.display.notice, None);
    }

    #[test]
    fn start_on_full_queue_shows_notice() {
        let ctx = egui::Context::default();
        let (cmd_tx, _cmd_rx) = bounded(1);
        let (_ui_tx, ui_rx) = bounded(8);

        let mut app = KioskApp::new(&ctx, cmd_tx, ui_rx, tiny_qr());
        app.start();

        assert_eq!(
            app.display.notice.as_deref(),
            Some("Processing queue is full; please retry")
        );
    }

    #[test]
    fn drained_status_reports_update_labels() {
        let ctx = egui::Context::default();
        let (cmd_tx, _cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let mut app = KioskApp::new(&ctx, cmd_tx, ui_rx, tiny_qr());

        ui_tx
            .send(UiEvent::StatusReported(StatusReport::now(
                RunId(1),
                Status::FetchingData,
            )))
            .expect("queue report");
        ui_tx
            .send(UiEvent::StatusReported(StatusReport::now(
                RunId(1),
                Status::Printing,
            )))
            .expect("queue report");
        assert_eq!(app.display.current_status, "Current Status: Waiting for Orders");

        app.process_ui_events(&ctx);

        assert_eq!(app.display.progress, "Printing...");
        assert_eq!(app.display.current_status, "Current Status: Printing...");
        assert!(ui_tx.is_empty());
    }
}
