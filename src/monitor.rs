//! Monitor state and the refresh cycle.
//!
//! The host delivers events one at a time to [`Monitor::update`]; that is
//! the only place state changes. [`Monitor::view`] only reads.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use log::{debug, warn};

use crate::collectors::DataSource;
use crate::models::{BatteryRecord, TemperatureRecord};
use crate::renderer;
use crate::sensors::SensorGroup;

/// Default delay between two refresh cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

/// Events delivered by the host runtime.
#[derive(Debug, Clone)]
pub enum Event {
    Resize { width: u16, height: u16 },
    Tick(DateTime<Local>),
    Key(KeyEvent),
}

/// Request to deliver one [`Event::Tick`] after `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub after: Duration,
}

/// Everything the renderer needs.
#[derive(Debug)]
pub struct MonitorState {
    pub temperatures: Vec<TemperatureRecord>,
    pub battery: BatteryRecord,
    pub extra_groups: Vec<SensorGroup<'static>>,
    pub last_update: DateTime<Local>,
}

impl MonitorState {
    pub fn new(last_update: DateTime<Local>) -> Self {
        Self {
            temperatures: Vec::new(),
            battery: BatteryRecord::default(),
            extra_groups: Vec::new(),
            last_update,
        }
    }
}

pub struct Monitor {
    source: Box<dyn DataSource>,
    interval: Duration,
    state: MonitorState,
    width: u16,
    height: u16,
}

impl Monitor {
    pub fn new(source: Box<dyn DataSource>, interval: Duration) -> Self {
        Self {
            source,
            interval,
            state: MonitorState::new(Local::now()),
            width: 0,
            height: 0,
        }
    }

    /// Adds a group of extra sensors, refreshed on every tick.
    pub fn register_group(&mut self, group: SensorGroup<'static>) {
        debug!("Registering sensor group {} ({} sensors)", group.name, group.len());
        self.state.extra_groups.push(group);
    }

    /// Schedules the first refresh, due immediately.
    pub fn init(&self) -> ScheduledTick {
        ScheduledTick {
            after: Duration::ZERO,
        }
    }

    pub fn update(&mut self, event: Event) -> Option<ScheduledTick> {
        match event {
            Event::Resize { width, height } => {
                self.width = width;
                self.height = height;
                None
            }
            Event::Tick(now) => {
                self.refresh(now);
                Some(ScheduledTick {
                    after: self.interval,
                })
            }
            Event::Key(_) => None,
        }
    }

    pub fn view(&self) -> String {
        renderer::render(&self.state, self.width, self.height)
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn refresh(&mut self, now: DateTime<Local>) {
        let start = Instant::now();

        self.state.temperatures = self.source.read_temperatures();
        self.state.battery = self.source.read_battery();

        let mut failures = 0;
        for group in self.state.extra_groups.iter_mut() {
            failures += group.refresh_all();
        }
        if failures > 0 {
            warn!("{failures} sensors failed to refresh");
        }

        self.state.last_update = now;
        debug!("refresh took: {} µs", start.elapsed().as_micros());
    }
}
