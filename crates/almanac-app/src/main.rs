use almanac_app::command::{Command, run};
use almanac_app::error::AppError;
use almanac_core::config::{Settings, load_config};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    // stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    if let Err(err) = execute(&config) {
        tracing::error!(error = %err, "Command failed");
        return Err(err);
    }

    Ok(())
}

fn execute(config: &Settings) -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let command: Command = args
        .next()
        .ok_or_else(|| AppError::UsageError("missing command".to_string()))?
        .parse()?;
    let path = args
        .next()
        .ok_or_else(|| AppError::UsageError("missing payload path".to_string()))?;

    tracing::info!(?command, path = %path, "Running command");

    let payload = std::fs::read_to_string(&path).map_err(AppError::from)?;
    let output = run(command, &payload, config)?;

    println!("{output}");

    Ok(())
}
