pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod renderer;
pub mod sensors;
pub mod terminal;

mod utils;

use crate::collectors::{fan_group, supply_group};
use crate::config::AppConfig;
use crate::monitor::{Event, Monitor};
use crate::renderer::full;
use crate::terminal::Terminal;
use anyhow::Context;
use chrono::Local;
use log::{debug, error, info, log_enabled, trace, Level};
use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

pub use crate::collectors::{DataSource, SysfsPaths, SysfsSource};
pub use crate::monitor::{MonitorState, ScheduledTick};
pub use crate::renderer::render;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting application");

    tokio::select! {
        result = main_loop(config) => {
            match result {
                Ok(_) => info!("Application completed successfully"),
                Err(e) => {
                    error!("Application error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e).context("Application failed to run");
                }
            }
        }
    }

    Ok(())
}

/// Builds the monitor described by `config`, extra groups included.
pub fn build_monitor(config: &AppConfig) -> Monitor {
    let paths = config.sysfs.paths();
    let mut monitor = Monitor::new(
        Box::new(SysfsSource::new(paths.clone())),
        config.monitor.interval(),
    );

    if config.groups.fans {
        let group = fan_group(&paths.hwmon);
        if !group.is_empty() {
            monitor.register_group(group);
        }
    }
    if config.groups.supplies {
        let group = supply_group(&paths.power_supply);
        if !group.is_empty() {
            monitor.register_group(group);
        }
    }

    monitor
}

async fn main_loop(config: AppConfig) -> anyhow::Result<()> {
    debug!("Refresh interval: {:?}", config.monitor.interval());
    let mut monitor = build_monitor(&config);

    let mut term = Terminal::enter().context("Failed to set up terminal")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    terminal::spawn_input_reader(tx)?;

    monitor.update(term.size()?);

    let tick = sleep(monitor.init().after);
    tokio::pin!(tick);
    let mut armed = true;

    loop {
        term.draw(&monitor.view()).context("Failed to draw frame")?;

        tokio::select! {
            () = &mut tick, if armed => {
                armed = false;
                if let Some(next) = monitor.update(Event::Tick(Local::now())) {
                    tick.as_mut().reset(Instant::now() + next.after);
                    armed = true;
                }
                if log_enabled!(Level::Trace) {
                    for line in full::summary(monitor.state()) {
                        trace!("{line}");
                    }
                }
            }
            event = rx.recv() => {
                let Some(event) = event else {
                    info!("Input closed, exiting");
                    return Ok(());
                };
                if let Event::Key(key) = &event {
                    if terminal::is_quit(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                if let Some(next) = monitor.update(event) {
                    tick.as_mut().reset(Instant::now() + next.after);
                    armed = true;
                }
            }
        }
    }
}
