//! Extra sensor groups discovered from sysfs at startup.

use std::path::Path;

use log::debug;

use crate::sensors::{GenericSensor, Reading, SensorGroup};
use crate::utils::sysfs::{
    get_file_line, numbered_attributes, numbered_entries, read_attribute, read_number_from_file,
    sorted_children,
};

/// One sensor per hwmon `fanN_input`.
///
/// A fan is in warning below its `fanN_min`, critical when `fanN_alarm` is set.
pub fn fan_group(hwmon_root: &Path) -> SensorGroup<'static> {
    let mut group = SensorGroup::new("Fans");

    for (_, folder) in numbered_entries(hwmon_root, "hwmon") {
        let hwmon_name = get_file_line(&folder.join("name"), 16).unwrap_or_default();

        for id in numbered_attributes(&folder, "fan", "input") {
            let name = get_file_line(&folder.join(format!("fan{id}_label")), 16)
                .unwrap_or_else(|| format!("{hwmon_name} fan{id}"));
            let input = folder.join(format!("fan{id}_input"));
            let min_path = folder.join(format!("fan{id}_min"));
            let alarm_path = folder.join(format!("fan{id}_alarm"));

            group.push(GenericSensor::new(name, move || {
                let rpm: u64 = read_attribute(&input)?;
                let min = read_number_from_file::<u64>(&min_path).unwrap_or(0);
                let alarm = read_number_from_file::<u8>(&alarm_path).unwrap_or(0) == 1;
                Ok(Reading::new(format!("{rpm} RPM")).with_state(min > 0 && rpm < min, alarm))
            }));
        }
    }

    debug!("Found {} fans", group.len());
    group
}

/// One sensor per external supply (`Mains` or `USB`) showing whether it is online.
pub fn supply_group(power_supply_root: &Path) -> SensorGroup<'static> {
    let mut group = SensorGroup::new("Power Supplies");

    for folder in sorted_children(power_supply_root) {
        let kind = get_file_line(&folder.join("type"), 16).unwrap_or_default();
        if kind != "Mains" && kind != "USB" {
            continue;
        }

        let name = folder
            .file_name()
            .and_then(|x| x.to_str())
            .unwrap_or("")
            .to_string();
        let online = folder.join("online");

        group.push(GenericSensor::new(name, move || {
            let state = match read_attribute::<u8>(&online)? {
                0 => "offline",
                _ => "online",
            };
            Ok(Reading::new(state))
        }));
    }

    debug!("Found {} external power supplies", group.len());
    group
}
