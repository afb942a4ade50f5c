use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use print_core::{
    config::{self, DEFAULT_SETTINGS_FILE},
    load_settings, qr, ConnectivityProbe, MongoProbe, OrderSimulator, RunId, RunOutcome,
    SinkClosed, StatusReport, StatusSink,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the order store answers an existence query.
    ProbeStore {
        #[arg(long)]
        uri: Option<String>,
    },
    /// Write the QR code image the kiosk displays.
    GenerateQr {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run one order simulation without a window.
    Simulate {
        #[arg(long)]
        json: bool,
    },
}

struct StdoutSink {
    json: bool,
    out: Mutex<io::Stdout>,
}

impl StatusSink for StdoutSink {
    fn report(&self, report: StatusReport) -> Result<(), SinkClosed> {
        let line = if self.json {
            serde_json::to_string(&report).map_err(|_| SinkClosed)?
        } else {
            format!(
                "{} {} {}",
                report.at.format("%H:%M:%S%.3f"),
                report.run,
                report.status
            )
        };
        let mut out = self.out.lock().map_err(|_| SinkClosed)?;
        writeln!(out, "{line}").map_err(|_| SinkClosed)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)
        .with_context(|| format!("failed to load settings from '{}'", cli.config.display()))?;

    match cli.command {
        Command::ProbeStore { uri } => {
            let mut probe = MongoProbe::from_settings(&settings);
            if let Some(uri) = uri {
                probe.uri = uri;
            }
            match probe.probe().await {
                Ok(_handles) => {
                    println!(
                        "connected: {} ({}.{})",
                        probe.uri, probe.database, probe.collection
                    );
                }
                Err(err) => {
                    println!("not connected: {err}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::GenerateQr { url, out } => {
            let url = url.unwrap_or(settings.qr_url);
            config::parse_qr_url(&url)?;
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.qr_image_path));
            qr::write_qr_png(&url, &out)?;
            println!("wrote {} for {url}", out.display());
        }
        Command::Simulate { json } => {
            let sink = StdoutSink {
                json,
                out: Mutex::new(io::stdout()),
            };
            let simulator = OrderSimulator::new(sink, settings.timings());
            let outcome = tokio::task::spawn_blocking(move || simulator.run(RunId(1)))
                .await
                .context("order simulator worker panicked")?;
            if outcome != RunOutcome::Completed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
