//! Sensors and sensor groups.
//!
//! A [`Sensor`] is anything that can be shown as a name, a display value
//! and a warning/critical state. Temperature and battery records are
//! viewed through borrowed adapters built for each frame; free-form
//! sensors ([`GenericSensor`]) own a refresh callback and live in the
//! monitor's extra groups.

mod adapters;
mod generic;

use log::warn;

use crate::error::SensorError;
use crate::models::{BatteryRecord, TemperatureRecord};

pub use adapters::{BatterySensor, TemperatureSensor};
pub use generic::{GenericSensor, Reading};

pub trait Sensor: Send {
    /// Human-readable identifier.
    fn name(&self) -> &str;
    /// Current reading formatted for display.
    fn value(&self) -> String;
    fn warning(&self) -> bool;
    fn critical(&self) -> bool;
    /// Updates the reading. On error the previous reading is kept.
    fn refresh(&mut self) -> Result<(), SensorError>;
}

/// Ordered, named bundle of sensors shown as one section.
pub struct SensorGroup<'a> {
    pub name: String,
    pub sensors: Vec<Box<dyn Sensor + 'a>>,
}

impl<'a> SensorGroup<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sensors: Vec::new(),
        }
    }

    pub fn with_sensor(mut self, sensor: impl Sensor + 'a) -> Self {
        self.push(sensor);
        self
    }

    pub fn push(&mut self, sensor: impl Sensor + 'a) {
        self.sensors.push(Box::new(sensor));
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Refreshes every sensor, returning how many failed.
    pub fn refresh_all(&mut self) -> usize {
        let mut failures = 0;
        for sensor in self.sensors.iter_mut() {
            if let Err(e) = sensor.refresh() {
                warn!("{}/{}: refresh failed: {}", self.name, sensor.name(), e);
                failures += 1;
            }
        }
        failures
    }
}

impl std::fmt::Debug for SensorGroup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorGroup")
            .field("name", &self.name)
            .field("sensors", &self.sensors.len())
            .finish()
    }
}

/// Builds the "Temperatures" and "Battery" groups from the current records.
///
/// Empty temperature lists and the absent battery produce no group. The
/// renderers lay these sections out themselves; the groups back the
/// per-sensor listing in [`crate::renderer::full::summary`].
pub fn sensor_groups<'a>(
    temperatures: &'a [TemperatureRecord],
    battery: &'a BatteryRecord,
) -> Vec<SensorGroup<'a>> {
    let mut groups = Vec::new();

    if !temperatures.is_empty() {
        let mut group = SensorGroup::new("Temperatures");
        for record in temperatures {
            group.push(TemperatureSensor::new(record));
        }
        groups.push(group);
    }

    if battery.is_present() {
        groups.push(SensorGroup::new("Battery").with_sensor(BatterySensor::new(battery)));
    }

    groups
}

/// Colour class of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Classifies a record through its [`TemperatureSensor`] view, so the
    /// renderers and sensor listings agree on the inclusive thresholds.
    pub fn of_temperature(record: &TemperatureRecord) -> Self {
        Self::of_sensor(&TemperatureSensor::new(record))
    }

    /// Display colour of a battery charge: red below 20%, orange below 50%.
    pub fn of_capacity(capacity: i32) -> Self {
        if capacity < 20 {
            Severity::Critical
        } else if capacity < 50 {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Critical wins over warning.
    pub fn of_sensor(sensor: &dyn Sensor) -> Self {
        if sensor.critical() {
            Severity::Critical
        } else if sensor.warning() {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }
}
