use crate::error::SensorError;
use crate::sensors::Sensor;

/// Result of a generic sensor's refresh callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading {
    pub value: String,
    pub warning: bool,
    pub critical: bool,
}

impl Reading {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            warning: false,
            critical: false,
        }
    }

    pub fn warning(mut self) -> Self {
        self.warning = true;
        self
    }

    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    pub fn with_state(mut self, warning: bool, critical: bool) -> Self {
        self.warning = warning;
        self.critical = critical;
        self
    }
}

type RefreshFn = Box<dyn FnMut() -> Result<Reading, SensorError> + Send>;

/// Free-form sensor driven by a user supplied refresh callback.
pub struct GenericSensor {
    name: String,
    reading: Reading,
    refresh_fn: RefreshFn,
}

impl GenericSensor {
    pub fn new<F>(name: impl Into<String>, refresh_fn: F) -> Self
    where
        F: FnMut() -> Result<Reading, SensorError> + Send + 'static,
    {
        Self {
            name: name.into(),
            reading: Reading::default(),
            refresh_fn: Box::new(refresh_fn),
        }
    }
}

impl Sensor for GenericSensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.reading.value.clone()
    }

    fn warning(&self) -> bool {
        self.reading.warning
    }

    fn critical(&self) -> bool {
        self.reading.critical
    }

    fn refresh(&mut self) -> Result<(), SensorError> {
        self.reading = (self.refresh_fn)()?;
        Ok(())
    }
}

impl std::fmt::Debug for GenericSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericSensor")
            .field("name", &self.name)
            .field("reading", &self.reading)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let sensor = GenericSensor::new("Load", || Ok(Reading::new("0.5")));
        assert_eq!(sensor.name(), "Load");
        assert_eq!(sensor.value(), "");
        assert!(!sensor.warning());
        assert!(!sensor.critical());
    }

    #[test]
    fn test_refresh_replaces_reading() {
        let mut calls = 0;
        let mut sensor = GenericSensor::new("Counter", move || {
            calls += 1;
            Ok(Reading::new(calls.to_string()).with_state(calls > 1, false))
        });

        sensor.refresh().unwrap();
        assert_eq!(sensor.value(), "1");
        assert!(!sensor.warning());

        sensor.refresh().unwrap();
        assert_eq!(sensor.value(), "2");
        assert!(sensor.warning());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_reading() {
        let mut first = true;
        let mut sensor = GenericSensor::new("Flaky", move || {
            if first {
                first = false;
                Ok(Reading::new("OK").warning())
            } else {
                Err(SensorError::NotAvailable {
                    path: "/sys/class/hwmon/hwmon9".into(),
                })
            }
        });

        sensor.refresh().unwrap();
        assert!(sensor.refresh().is_err());
        assert_eq!(sensor.value(), "OK");
        assert!(sensor.warning());
    }
}
