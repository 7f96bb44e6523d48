use serde::Serialize;

/// High threshold used when the source reports no usable one.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 80.0;
/// Critical threshold used when the source reports no usable one.
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 100.0;

/// One temperature reading, from a thermal zone or a hwmon `tempN_input`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    pub name: String,
    /// Degrees Celsius.
    pub value: f64,
    pub high: f64,
    pub critical: f64,
    /// sysfs path the value was read from.
    pub path: String,
}

impl TemperatureRecord {
    pub fn new(name: impl Into<String>, value: f64, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            high: DEFAULT_HIGH_THRESHOLD,
            critical: DEFAULT_CRITICAL_THRESHOLD,
            path: path.into(),
        }
    }

    pub fn with_thresholds(mut self, high: f64, critical: f64) -> Self {
        self.high = high;
        self.critical = critical;
        self
    }

    pub fn is_warning(&self) -> bool {
        self.value >= self.high
    }

    pub fn is_critical(&self) -> bool {
        self.value >= self.critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let record = TemperatureRecord::new("acpitz", 42.0, "/sys/class/thermal/thermal_zone0");
        assert_eq!(record.high, 80.0);
        assert_eq!(record.critical, 100.0);
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive() {
        let at_high = TemperatureRecord::new("cpu", 80.0, "").with_thresholds(80.0, 100.0);
        assert!(at_high.is_warning());
        assert!(!at_high.is_critical());

        let at_critical = TemperatureRecord::new("cpu", 100.0, "").with_thresholds(80.0, 100.0);
        assert!(at_critical.is_warning());
        assert!(at_critical.is_critical());

        let below = TemperatureRecord::new("cpu", 79.9, "").with_thresholds(80.0, 100.0);
        assert!(!below.is_warning());
    }
}
