//! One-shot dump of what the monitor would read from sysfs.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target, WriteStyle};
use log::debug;
use sysfs_monitor::config::{AppConfig, DEFAULT_CONFIG_FILE};
use sysfs_monitor::models::{BatteryRecord, TemperatureRecord};
use sysfs_monitor::{DataSource, SysfsSource};

#[derive(Parser, Debug)]
#[command(name = "sysfs-check", version, about = "Print sysfs temperatures and battery status")]
struct Cli {
    /// Path to the INI configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print the readings as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_file(&cli.config).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        AppConfig::default()
    });

    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Auto)
        .target(Target::Stderr)
        .format_timestamp_secs()
        .init();

    if let Some(path) = cli.write_config {
        return config.save(&path);
    }

    let source = SysfsSource::new(config.sysfs.paths());
    debug!("Reading from {:?}", source.paths());
    let temperatures = source.read_temperatures();
    let battery = source.read_battery();

    if cli.json {
        let report = serde_json::json!({
            "temperatures": temperatures,
            "battery": battery,
        });
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize readings")?;
        println!("{text}");
    } else {
        println!("Testing sysfs monitoring...");
        print_temperatures(&temperatures);
        println!();
        print_battery(&battery);
    }
    Ok(())
}

fn print_temperatures(temperatures: &[TemperatureRecord]) {
    println!("Found {} temperature sensors:", temperatures.len());
    for t in temperatures {
        println!(
            "  {}: {:.1}°C (high {:.1}, critical {:.1})",
            t.name, t.value, t.high, t.critical
        );
    }
}

fn print_battery(battery: &BatteryRecord) {
    println!("Battery status:");
    if !battery.is_present() {
        println!("  No battery information");
        return;
    }

    println!("  Capacity: {}%", battery.capacity);
    println!("  Status: {}", battery.status);
    if battery.voltage > 0.0 {
        println!("  Voltage: {:.2}V", battery.voltage);
    }
    if battery.current != 0.0 {
        println!("  Current: {:.2}A", battery.current);
    }
    if battery.power > 0.0 {
        println!("  Power: {:.2}W", battery.power);
    }
    if !battery.health.is_empty() {
        println!("  Health: {}", battery.health);
    }
    if battery.temperature > 0.0 {
        println!("  Temperature: {:.1}°C", battery.temperature);
    }
    if battery.energy > 0.0 {
        println!("  Energy: {:.2} Wh", battery.energy);
    }
    if !battery.capacity_level.is_empty() {
        println!("  Capacity Level: {}", battery.capacity_level);
    }
}
