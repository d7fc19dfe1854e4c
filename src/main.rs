//! Roster GUI - Main Entry Point

use roster_gui::app::application::run_app;
use roster_gui::helpers::{get_or_create_data_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, fmt::time::LocalTime, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "roster-gui.log";

/// Install stdout logging plus a daily log file when the data dir is usable
fn init_tracing() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let data_dir = get_or_create_data_dir();
    let (file_layer, guard) = match &data_dir {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(LocalTime::rfc_3339())
                        .with_writer(writer),
                ),
                Some(guard),
            )
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    match data_dir {
        Ok(dir) => tracing::info!(dir = ?dir, "Writing log files"),
        Err(e) => tracing::warn!(error = %e, "File logging disabled"),
    }

    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Roster GUI...");

    run_app();
}
