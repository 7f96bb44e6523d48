use std::path::Path;

use log::debug;

use crate::models::{TemperatureRecord, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_HIGH_THRESHOLD};
use crate::utils::sysfs::{
    get_file_line, get_temperature_from_file, numbered_attributes, numbered_entries,
};

/// Reads every thermal zone, then every hwmon temperature input.
///
/// Missing roots yield an empty list; unreadable zones or inputs are
/// skipped, so the result may be partial.
pub fn read_temperatures(thermal_root: &Path, hwmon_root: &Path) -> Vec<TemperatureRecord> {
    let mut records = Vec::new();

    for (_, zone) in numbered_entries(thermal_root, "thermal_zone") {
        match read_thermal_zone(&zone) {
            Some(record) => records.push(record),
            None => debug!("Skipping unreadable thermal zone {}", zone.display()),
        }
    }

    for (_, folder) in numbered_entries(hwmon_root, "hwmon") {
        from_hwmon(&mut records, &folder);
    }

    records
}

/// Reads one `thermal_zoneN` directory.
///
/// ## What is read:
///
/// - Mandatory: `temp` in mili-celsius. The zone is dropped if missing.
/// - Optional: `type`, used as the name (falls back to the directory name).
/// - Optional: trip points. High is the first `passive`/`hot` trip point,
///   critical the `critical` one. Without typed trip points, trip point 0
///   and 1 are used.
fn read_thermal_zone(zone: &Path) -> Option<TemperatureRecord> {
    let value = get_temperature_from_file(&zone.join("temp"))?;
    let name = get_file_line(&zone.join("type"), 32).unwrap_or_else(|| {
        zone.file_name()
            .and_then(|x| x.to_str())
            .unwrap_or("")
            .to_string()
    });

    let trips: Vec<(String, Option<f64>)> = numbered_attributes(zone, "trip_point_", "temp")
        .into_iter()
        .map(|id| {
            let kind = get_file_line(&zone.join(format!("trip_point_{id}_type")), 16)
                .unwrap_or_default();
            let temp = threshold(&zone.join(format!("trip_point_{id}_temp")));
            (kind, temp)
        })
        .collect();
    let typed = |kinds: &[&str]| {
        trips
            .iter()
            .find(|(kind, temp)| kinds.contains(&kind.as_str()) && temp.is_some())
            .and_then(|(_, temp)| *temp)
    };

    let high = typed(&["passive", "hot"])
        .or_else(|| threshold(&zone.join("trip_point_0_temp")))
        .unwrap_or(DEFAULT_HIGH_THRESHOLD);
    let critical = typed(&["critical"])
        .or_else(|| threshold(&zone.join("trip_point_1_temp")))
        .unwrap_or(DEFAULT_CRITICAL_THRESHOLD);

    Some(
        TemperatureRecord::new(name, value, zone.to_str().unwrap_or(""))
            .with_thresholds(high, critical),
    )
}

/// Read out `hwmon` info (hardware monitor) from `folder` into `records`.
///
/// ## What is read:
///
/// - Mandatory: `name` the name of the `hwmon`.
/// - Mandatory: `tempN_input` Drop the reading if missing or unparsable.
/// - Optional: sensor `label`, content of `tempN_label`, otherwise
///   `<name>_tempN`.
/// - Optional: high threshold value defined in `tempN_max`
/// - Optional: critical threshold value defined in `tempN_crit`
///
/// Kernel hwmon API: https://www.kernel.org/doc/html/latest/hwmon/sysfs-interface.html
pub fn from_hwmon(records: &mut Vec<TemperatureRecord>, folder: &Path) -> Option<()> {
    let hwmon_name = get_file_line(&folder.join("name"), 16)?;

    for id in numbered_attributes(folder, "temp", "input") {
        let input = folder.join(format!("temp{id}_input"));
        let Some(value) = get_temperature_from_file(&input) else {
            continue;
        };

        let name = get_file_line(&folder.join(format!("temp{id}_label")), 16)
            .unwrap_or_else(|| format!("{hwmon_name}_temp{id}"));
        let high = threshold(&folder.join(format!("temp{id}_max")))
            .unwrap_or(DEFAULT_HIGH_THRESHOLD);
        let critical = threshold(&folder.join(format!("temp{id}_crit")))
            .unwrap_or(DEFAULT_CRITICAL_THRESHOLD);

        records.push(
            TemperatureRecord::new(name, value, input.to_str().unwrap_or(""))
                .with_thresholds(high, critical),
        );
    }

    Some(())
}

// Thresholds of zero or below mean "not configured".
fn threshold(file: &Path) -> Option<f64> {
    get_temperature_from_file(file).filter(|t| *t > 0.0)
}
