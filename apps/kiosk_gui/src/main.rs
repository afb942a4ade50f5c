use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use print_core::{config::DEFAULT_SETTINGS_FILE, load_settings, qr};
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    controller::events::UiEvent,
    ui::KioskApp,
};

const WINDOW_TITLE: &str = "Print Server";

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Open a normal window instead of going full screen.
    #[arg(long)]
    windowed: bool,
    #[arg(long)]
    qr_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)
        .with_context(|| format!("failed to load settings from '{}'", args.config.display()))?;
    if let Some(url) = args.qr_url {
        settings.qr_url = url;
    }
    if args.windowed {
        settings.fullscreen = false;
    }
    settings
        .validate_display()
        .context("invalid kiosk display settings")?;

    let qr_path = PathBuf::from(&settings.qr_image_path);
    qr::write_qr_png(&settings.qr_url, &qr_path).context("failed to generate qr code")?;
    let qr_image = qr::load_qr_rgba(&qr_path, settings.qr_display_size)
        .context("failed to load qr code image")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let timings = settings.timings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_fullscreen(settings.fullscreen)
            .with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            runtime::launch(cmd_rx, ui_tx, cc.egui_ctx.clone(), timings)?;
            Ok(Box::new(KioskApp::new(&cc.egui_ctx, cmd_tx, ui_rx, qr_image)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("print server window failed: {err}"))
}
