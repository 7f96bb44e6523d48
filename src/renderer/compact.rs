use crate::monitor::MonitorState;
use crate::renderer::colours::{paint, Colours};
use crate::sensors::Severity;

/// The compact view never exceeds this many lines.
pub const MAX_LINES: usize = 3;

/// Minimal view for short panes:
///
/// 1. temperatures and battery, if either is known
/// 2. a summary of the extra groups, if any
/// 3. the refresh time
pub fn render(state: &MonitorState) -> String {
    let colours = Colours::default();
    let mut lines = Vec::with_capacity(MAX_LINES);

    let mut first_line = Vec::new();
    if !state.temperatures.is_empty() {
        let readings: Vec<String> = state
            .temperatures
            .iter()
            .map(|record| {
                let style = colours.severity(Severity::of_temperature(record));
                paint(&format!("{:.1}°C", record.value), style)
            })
            .collect();
        first_line.push(format!("🌡 {}", readings.join(" ")));
    }

    let battery = &state.battery;
    if battery.is_present() {
        let style = colours.severity(Severity::of_capacity(battery.capacity));
        let mut part = format!("🔋 {}", paint(&format!("{}%", battery.capacity), style));
        if !battery.status.is_empty() {
            part.push(' ');
            part.push_str(&battery.status);
        }
        if battery.voltage > 0.0 {
            part.push_str(&format!(" {:.2}V", battery.voltage));
        }
        first_line.push(part);
    }

    if !first_line.is_empty() {
        lines.push(first_line.join(" | "));
    }

    if !state.extra_groups.is_empty() {
        lines.push(extra_summary(state, &colours));
    }

    let footer = format!("Updated: {}", state.last_update.format("%H:%M:%S"));
    lines.push(paint(&footer, colours.footer));

    lines.truncate(MAX_LINES);
    lines.join("\n")
}

fn extra_summary(state: &MonitorState, colours: &Colours) -> String {
    let mut sensors = 0;
    let mut warnings = 0;
    let mut criticals = 0;
    for sensor in state.extra_groups.iter().flat_map(|group| group.sensors.iter()) {
        sensors += 1;
        match Severity::of_sensor(sensor.as_ref()) {
            Severity::Critical => criticals += 1,
            Severity::Warning => warnings += 1,
            Severity::Normal => {}
        }
    }

    let mut summary = format!("Extra: {} groups, {} sensors", state.extra_groups.len(), sensors);

    let mut counts = Vec::new();
    if warnings > 0 {
        counts.push(format!("{warnings} warning"));
    }
    if criticals > 0 {
        counts.push(format!("{criticals} critical"));
    }
    if !counts.is_empty() {
        summary.push_str(&format!(" ({})", counts.join(", ")));
    }

    let severity = if criticals > 0 {
        Severity::Critical
    } else if warnings > 0 {
        Severity::Warning
    } else {
        Severity::Normal
    };
    paint(&summary, colours.severity(severity))
}
