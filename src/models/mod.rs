pub(crate) mod battery;
pub(crate) mod temperature;

pub use battery::BatteryRecord;
pub use temperature::{TemperatureRecord, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_HIGH_THRESHOLD};
