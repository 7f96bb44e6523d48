use serde::Serialize;

/// State of the first system battery found under `power_supply`.
///
/// The default value (capacity 0, empty status) means "no battery".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryRecord {
    /// Percentage.
    pub capacity: i32,
    /// Charging, Discharging, Full, Not charging, Unknown.
    pub status: String,
    /// Volts.
    pub voltage: f64,
    /// Amperes.
    pub current: f64,
    /// Watts.
    pub power: f64,
    pub health: String,
    /// Celsius.
    pub temperature: f64,
    /// Watt-hours.
    pub energy: f64,
    /// Full, Normal, Low, Critical, Unknown.
    pub capacity_level: String,
}

impl Default for BatteryRecord {
    fn default() -> Self {
        Self {
            capacity: 0,
            status: String::new(),
            voltage: 0.0,
            current: 0.0,
            power: 0.0,
            health: String::new(),
            temperature: 0.0,
            energy: 0.0,
            capacity_level: String::new(),
        }
    }
}

impl BatteryRecord {
    pub fn new(capacity: i32, status: impl Into<String>) -> Self {
        Self {
            capacity,
            status: status.into(),
            ..Self::default()
        }
    }

    /// `false` for the "no battery" sentinel.
    pub fn is_present(&self) -> bool {
        self.capacity != 0 || !self.status.is_empty()
    }

    /// Fills `power` from voltage and current when the supply does not
    /// report `power_now` itself.
    ///
    /// Discharging batteries report a negative `current_now`; the derived
    /// power is the magnitude, like a reported `power_now`.
    pub fn derive_power(&mut self) {
        if self.power == 0.0 && self.voltage > 0.0 && self.current != 0.0 {
            self.power = (self.voltage * self.current).abs();
        }
    }
}
