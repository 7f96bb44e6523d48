//! Data sources backed by the kernel's sysfs.
//!
//! Reads never fail: missing paths and unparsable values surface as an
//! empty temperature list or the "no battery" record.

pub(crate) mod battery;
pub(crate) mod groups;
pub(crate) mod thermal;

use std::path::PathBuf;
use std::time::Instant;

use log::debug;

use crate::models::{BatteryRecord, TemperatureRecord};

pub use groups::{fan_group, supply_group};

/// Supplier of fresh temperature and battery snapshots.
pub trait DataSource: Send {
    fn read_temperatures(&self) -> Vec<TemperatureRecord>;
    fn read_battery(&self) -> BatteryRecord;
}

/// Roots of the sysfs classes read by [`SysfsSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPaths {
    pub thermal: PathBuf,
    pub hwmon: PathBuf,
    pub power_supply: PathBuf,
}

impl Default for SysfsPaths {
    fn default() -> Self {
        Self {
            thermal: PathBuf::from("/sys/class/thermal"),
            hwmon: PathBuf::from("/sys/class/hwmon"),
            power_supply: PathBuf::from("/sys/class/power_supply"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SysfsSource {
    paths: SysfsPaths,
}

impl SysfsSource {
    pub fn new(paths: SysfsPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SysfsPaths {
        &self.paths
    }
}

impl DataSource for SysfsSource {
    fn read_temperatures(&self) -> Vec<TemperatureRecord> {
        let start = Instant::now();
        let result = thermal::read_temperatures(&self.paths.thermal, &self.paths.hwmon);
        debug!(
            "read_temperatures found {} sensors in {} µs",
            result.len(),
            start.elapsed().as_micros()
        );
        result
    }

    fn read_battery(&self) -> BatteryRecord {
        let start = Instant::now();
        let result = battery::read_battery(&self.paths.power_supply);
        debug!("read_battery took: {} µs", start.elapsed().as_micros());
        result
    }
}
