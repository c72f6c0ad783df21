#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use list_pad_core::history::RedoPolicy;

/// A double-ended list editor with undo and redo, built with egui.
#[derive(Parser, Debug)]
#[command(name = "list-pad", version, about)]
struct Cli {
    /// Elements appended to the list on startup.
    items: Vec<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the full undo log and never discard redo states.
    #[arg(long = "legacy-redo")]
    legacy_redo: bool,
}

impl Cli {
    fn into_startup_args(self) -> list_pad_ui::StartupArgs {
        list_pad_ui::StartupArgs {
            items: self.items,
            config_path: self.config,
            redo_policy: self.legacy_redo.then_some(RedoPolicy::Legacy),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting list-pad");

    let startup_args = cli.into_startup_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 520.0])
            .with_min_inner_size([560.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "list-pad",
        native_options,
        Box::new(move |cc| Ok(Box::new(list_pad_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
