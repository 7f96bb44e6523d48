use owo_colors::{OwoColorize, Style};

use crate::sensors::Severity;

pub(crate) struct Colours {
    pub title: Style,
    pub heading: Style,
    pub normal: Style,
    pub warning: Style,
    pub critical: Style,
    pub footer: Style,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            title: Style::new().bold().truecolor(95, 95, 255), // Slate blue - for the title
            heading: Style::new().bold(),                      // Plain bold - for section headers
            normal: Style::new().truecolor(0, 215, 135),       // Spring green - for normal readings
            warning: Style::new().truecolor(255, 175, 0),      // Orange - for warning readings
            critical: Style::new().bright_red(),               // Red - for critical readings
            footer: Style::new().dimmed(),                     // Faint - for the footer
        }
    }
}

impl Colours {
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Normal => self.normal,
            Severity::Warning => self.warning,
            Severity::Critical => self.critical,
        }
    }
}

pub(crate) fn paint(text: &str, style: Style) -> String {
    text.style(style).to_string()
}
