use crate::error::SensorError;
use crate::models::{BatteryRecord, TemperatureRecord};
use crate::sensors::Sensor;

/// Views a [`TemperatureRecord`] as a [`Sensor`].
///
/// Records are replaced wholesale on every refresh cycle, so the adapter
/// borrows the current one and is rebuilt for each frame.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureSensor<'a> {
    record: &'a TemperatureRecord,
}

impl<'a> TemperatureSensor<'a> {
    pub fn new(record: &'a TemperatureRecord) -> Self {
        Self { record }
    }
}

impl Sensor for TemperatureSensor<'_> {
    fn name(&self) -> &str {
        &self.record.name
    }

    fn value(&self) -> String {
        format!("{:.1}°C", self.record.value)
    }

    fn warning(&self) -> bool {
        self.record.is_warning()
    }

    fn critical(&self) -> bool {
        self.record.is_critical()
    }

    // Temperatures are re-read in batch by the monitor.
    fn refresh(&mut self) -> Result<(), SensorError> {
        Ok(())
    }
}

/// Views the [`BatteryRecord`] as a [`Sensor`].
#[derive(Debug, Clone, Copy)]
pub struct BatterySensor<'a> {
    record: &'a BatteryRecord,
}

impl<'a> BatterySensor<'a> {
    pub fn new(record: &'a BatteryRecord) -> Self {
        Self { record }
    }
}

impl Sensor for BatterySensor<'_> {
    fn name(&self) -> &str {
        "Battery"
    }

    fn value(&self) -> String {
        format!("{}%", self.record.capacity)
    }

    fn warning(&self) -> bool {
        self.record.capacity < 20
    }

    fn critical(&self) -> bool {
        self.record.capacity < 10
    }

    fn refresh(&mut self) -> Result<(), SensorError> {
        Ok(())
    }
}
