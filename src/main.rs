use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Target, WriteStyle};
use log::{error, LevelFilter};
use sysfs_monitor::config::{AppConfig, DEFAULT_CONFIG_FILE};

/// Terminal monitor for sysfs temperatures, battery and extra sensors.
#[derive(Parser, Debug)]
#[command(name = "sysfs-monitor", version, about)]
struct Cli {
    /// Path to the INI configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration first (without logging)
    let config = AppConfig::from_file(&cli.config).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        // Fall back to default configuration
        AppConfig::default()
    });

    // The display owns the terminal, so logs only go to a file
    let mut builder = Builder::new();
    builder.write_style(WriteStyle::Never).format_timestamp_secs();
    match config.log_file() {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .filter_level(config.get_log_level())
                .target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();

    if let Err(e) = sysfs_monitor::run(config).await {
        error!("Application error: {}", e);
        eprintln!("{e:#}");
        return Err(e);
    }
    Ok(())
}
