use crate::models::BatteryRecord;
use crate::monitor::MonitorState;
use crate::renderer::colours::{paint, Colours};
use crate::renderer::text;
use crate::sensors::{sensor_groups, SensorGroup, Severity};

const TITLE: &str = "System Status Monitor";

/// Spaces between the temperature and battery columns.
const GUTTER: usize = 4;

/// Multi-section view used when the pane is tall enough.
pub fn render(state: &MonitorState, width: u16) -> String {
    let colours = Colours::default();
    let mut lines = vec![paint(TITLE, colours.title), String::new()];

    let temperatures = temperature_section(state, &colours);
    let battery = battery_section(&state.battery, &colours);
    lines.extend(text::columns(&temperatures, &battery, width as usize, GUTTER));

    for group in &state.extra_groups {
        lines.push(String::new());
        lines.extend(group_section(group, &colours));
    }

    lines.push(String::new());
    let footer = format!(
        "Last updated: {} | Press 'q' to quit",
        state.last_update.format("%H:%M:%S")
    );
    lines.push(paint(&footer, colours.footer));

    lines.join("\n")
}

fn temperature_section(state: &MonitorState, colours: &Colours) -> Vec<String> {
    let mut lines = vec![paint("Temperatures", colours.heading)];

    if state.temperatures.is_empty() {
        lines.push("  No temperature sensors found".to_string());
        return lines;
    }

    for record in &state.temperatures {
        let style = colours.severity(Severity::of_temperature(record));
        let value = paint(&format!("{:6.1}°C", record.value), style);
        lines.push(format!("  {}  {}", value, record.path));
    }
    lines
}

fn battery_section(battery: &BatteryRecord, colours: &Colours) -> Vec<String> {
    let mut lines = vec![paint("Battery", colours.heading)];

    if !battery.is_present() {
        lines.push("  No battery information".to_string());
        return lines;
    }

    let capacity_style = colours.severity(Severity::of_capacity(battery.capacity));
    lines.push(format!(
        "  Capacity: {}",
        paint(&format!("{}%", battery.capacity), capacity_style)
    ));
    lines.push(format!("  Status: {}", battery.status));

    if battery.voltage > 0.0 {
        lines.push(format!("  Voltage: {:.2}V", battery.voltage));
    }
    if battery.current != 0.0 {
        lines.push(format!("  Current: {:.2}A", battery.current));
    }
    if battery.power > 0.0 {
        lines.push(format!("  Power: {:.2}W", battery.power));
    }
    if !battery.health.is_empty() {
        lines.push(format!("  Health: {}", battery.health));
    }
    if battery.temperature > 0.0 {
        lines.push(format!("  Temperature: {:.1}°C", battery.temperature));
    }
    if battery.energy > 0.0 {
        lines.push(format!("  Energy: {:.2} Wh", battery.energy));
    }
    if !battery.capacity_level.is_empty() {
        lines.push(format!("  Capacity Level: {}", battery.capacity_level));
    }
    lines
}

fn group_section(group: &SensorGroup<'_>, colours: &Colours) -> Vec<String> {
    let mut lines = vec![paint(&group.name, colours.heading)];

    if group.is_empty() {
        lines.push("  No sensors".to_string());
        return lines;
    }

    for sensor in &group.sensors {
        let style = colours.severity(Severity::of_sensor(sensor.as_ref()));
        lines.push(format!("  {:<20}: {}", sensor.name(), paint(&sensor.value(), style)));
    }
    lines
}

/// Debug listing of every sensor as `group/name = value`, used by logging.
pub fn summary(state: &MonitorState) -> Vec<String> {
    fn list(lines: &mut Vec<String>, group: &SensorGroup<'_>) {
        for sensor in &group.sensors {
            lines.push(format!("{}/{} = {}", group.name, sensor.name(), sensor.value()));
        }
    }

    let mut lines = Vec::new();
    for group in &sensor_groups(&state.temperatures, &state.battery) {
        list(&mut lines, group);
    }
    for group in &state.extra_groups {
        list(&mut lines, group);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemperatureRecord;
    use crate::renderer::text::strip_ansi;
    use crate::sensors::{GenericSensor, Reading, Sensor};
    use chrono::{Local, TimeZone};

    fn state() -> MonitorState {
        MonitorState::new(Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 7).unwrap())
    }

    fn plain_lines(output: &str) -> Vec<String> {
        output.lines().map(strip_ansi).collect()
    }

    #[test]
    fn test_empty_state_notices() {
        let output = strip_ansi(&render(&state(), 120));
        assert!(output.starts_with("System Status Monitor\n"));
        assert!(output.contains("No temperature sensors found"));
        assert!(output.contains("No battery information"));
        assert!(output.ends_with("Last updated: 14:03:07 | Press 'q' to quit"));
        assert!(!output.contains("0%"));
    }

    #[test]
    fn test_battery_fields_omitted_when_unset() {
        let mut state = state();
        state.battery = BatteryRecord {
            capacity: 80,
            status: "Charging".into(),
            voltage: 12.6,
            health: "Good".into(),
            ..BatteryRecord::default()
        };

        let lines = plain_lines(&render(&state, 40));
        assert!(lines.contains(&"  Capacity: 80%".to_string()));
        assert!(lines.contains(&"  Status: Charging".to_string()));
        assert!(lines.contains(&"  Voltage: 12.60V".to_string()));
        assert!(lines.contains(&"  Health: Good".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Current:")));
        assert!(!lines.iter().any(|l| l.contains("Power:")));
        assert!(!lines.iter().any(|l| l.contains("Energy:")));
        assert!(!lines.iter().any(|l| l.contains("Capacity Level:")));
    }

    #[test]
    fn test_all_battery_fields() {
        let mut state = state();
        state.battery = BatteryRecord {
            capacity: 15,
            status: "Discharging".into(),
            voltage: 11.1,
            current: -1.5,
            power: 16.65,
            health: "Good".into(),
            temperature: 30.5,
            energy: 12.0,
            capacity_level: "Low".into(),
        };

        let output = strip_ansi(&render(&state, 40));
        for expected in [
            "Current: -1.50A",
            "Power: 16.65W",
            "Temperature: 30.5°C",
            "Energy: 12.00 Wh",
            "Capacity Level: Low",
        ] {
            assert!(output.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_two_columns_when_wide() {
        let mut state = state();
        state.temperatures = vec![TemperatureRecord::new("CPU", 65.0, "thermal_zone0")];
        state.battery = BatteryRecord::new(55, "Full");

        let lines = plain_lines(&render(&state, 120));
        assert!(lines.iter().any(|l| l.starts_with("Temperatures") && l.contains("Battery")));
        assert!(lines.iter().any(|l| l.contains("thermal_zone0") && l.contains("Capacity: 55%")));
    }

    #[test]
    fn test_stacked_when_narrow_keeps_every_line() {
        let mut state = state();
        state.temperatures = vec![
            TemperatureRecord::new("CPU", 65.0, "/sys/class/hwmon/hwmon3/temp1_input"),
            TemperatureRecord::new("GPU", 91.0, "/sys/class/hwmon/hwmon4/temp1_input"),
        ];
        state.battery = BatteryRecord::new(55, "Full");

        let wide = plain_lines(&render(&state, 200));
        let narrow = plain_lines(&render(&state, 30));

        assert!(!narrow.iter().any(|l| l.contains("temp1_input") && l.contains("Capacity")));
        for needle in ["Temperatures", "Battery", "hwmon3", "hwmon4", "Capacity: 55%", "Status: Full"] {
            assert_eq!(wide.iter().filter(|l| l.contains(needle)).count(), 1, "{needle}");
            assert_eq!(narrow.iter().filter(|l| l.contains(needle)).count(), 1, "{needle}");
        }
    }

    #[test]
    fn test_extra_groups() {
        let mut state = state();
        let mut sensor = GenericSensor::new("Link", || Ok(Reading::new("up")));
        sensor.refresh().unwrap();
        state.extra_groups.push(SensorGroup::new("Network").with_sensor(sensor));
        state.extra_groups.push(SensorGroup::new("Empty"));

        let lines = plain_lines(&render(&state, 100));
        let network = lines.iter().position(|l| l == "Network").unwrap();
        assert_eq!(lines[network + 1], format!("  {:<20}: up", "Link"));
        let empty = lines.iter().position(|l| l == "Empty").unwrap();
        assert_eq!(lines[empty + 1], "  No sensors");
    }

    #[test]
    fn test_derived_power_shown_while_discharging() {
        let mut state = state();
        state.battery = BatteryRecord {
            capacity: 60,
            status: "Discharging".into(),
            voltage: 11.0,
            current: -1.5,
            ..BatteryRecord::default()
        };
        state.battery.derive_power();

        let lines = plain_lines(&render(&state, 40));
        assert!(lines.contains(&"  Current: -1.50A".to_string()));
        assert!(lines.contains(&"  Power: 16.50W".to_string()));
    }

    #[test]
    fn test_temperature_colour_follows_thresholds() {
        let colours = Colours::default();
        let mut state = state();
        state.temperatures = vec![TemperatureRecord::new("hot", 100.0, "zone").with_thresholds(80.0, 100.0)];

        let output = render(&state, 100);
        assert!(output.contains(&paint(" 100.0°C", colours.critical)));
    }

    #[test]
    fn test_summary_lists_every_sensor() {
        let mut state = state();
        state.temperatures = vec![TemperatureRecord::new("CPU", 65.0, "thermal_zone0")];
        state.battery = BatteryRecord::new(55, "Full");
        state.extra_groups.push(
            SensorGroup::new("Fans").with_sensor(GenericSensor::new("fan1", || Ok(Reading::new("1200 RPM")))),
        );

        assert_eq!(
            summary(&state),
            vec!["Temperatures/CPU = 65.0°C", "Battery/Battery = 55%", "Fans/fan1 = "]
        );
    }
}
