use std::path::{Path, PathBuf};

use crate::models::BatteryRecord;
use crate::utils::sysfs::{get_file_line, read_micro_units, read_number_from_file, sorted_children};

/// Reads the first system battery under `power_supply_root`.
///
/// Returns the "no battery" sentinel when none is found. Attributes that
/// are missing or unparsable stay at their zero value.
pub fn read_battery(power_supply_root: &Path) -> BatteryRecord {
    let Some(folder) = find_battery(power_supply_root) else {
        return BatteryRecord::default();
    };

    let mut battery = BatteryRecord {
        capacity: read_number_from_file(&folder.join("capacity")).unwrap_or(0),
        status: read_text(&folder, "status"),
        voltage: read_micro_units(&folder.join("voltage_now")).unwrap_or(0.0),
        current: read_micro_units(&folder.join("current_now")).unwrap_or(0.0),
        power: read_micro_units(&folder.join("power_now")).unwrap_or(0.0),
        health: read_text(&folder, "health"),
        // Tenths of a degree.
        temperature: read_number_from_file::<i64>(&folder.join("temp"))
            .map(|t| t as f64 / 10.0)
            .unwrap_or(0.0),
        energy: read_micro_units(&folder.join("energy_now")).unwrap_or(0.0),
        capacity_level: read_text(&folder, "capacity_level"),
    };
    battery.derive_power();
    battery
}

/// Finds the first supply of type `Battery` that powers the system.
///
/// Supplies with `scope` set to `Device` belong to peripherals (wireless
/// mice, keyboards) and are skipped.
pub fn find_battery(power_supply_root: &Path) -> Option<PathBuf> {
    sorted_children(power_supply_root).into_iter().find(|folder| {
        get_file_line(&folder.join("type"), 16).as_deref() == Some("Battery")
            && get_file_line(&folder.join("scope"), 16).as_deref() != Some("Device")
    })
}

fn read_text(folder: &Path, attribute: &str) -> String {
    get_file_line(&folder.join(attribute), 16).unwrap_or_default()
}
