use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::collectors::SysfsPaths;

pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    /// Seconds between two refresh cycles.
    #[serde(default = "default_interval")]
    pub interval: u64,
}

fn default_interval() -> u64 {
    2
}

#[derive(Debug, Deserialize, Clone)]
pub struct SysfsConfig {
    #[serde(default = "default_thermal")]
    pub thermal: String,
    #[serde(default = "default_hwmon")]
    pub hwmon: String,
    #[serde(default = "default_power_supply")]
    pub power_supply: String,
}

fn default_thermal() -> String {
    "/sys/class/thermal".to_string()
}

fn default_hwmon() -> String {
    "/sys/class/hwmon".to_string()
}

fn default_power_supply() -> String {
    "/sys/class/power_supply".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct GroupsConfig {
    #[serde(default = "default_true")]
    pub fans: bool,
    #[serde(default = "default_true")]
    pub supplies: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; empty disables logging while the display owns the terminal.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub sysfs: SysfsConfig,
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            thermal: default_thermal(),
            hwmon: default_hwmon(),
            power_supply: default_power_supply(),
        }
    }
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            fans: true,
            supplies: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            sysfs: SysfsConfig::default(),
            groups: GroupsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Refresh interval; zero is raised to one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval.max(1))
    }
}

impl SysfsConfig {
    pub fn paths(&self) -> SysfsPaths {
        SysfsPaths {
            thermal: PathBuf::from(&self.thermal),
            hwmon: PathBuf::from(&self.hwmon),
            power_supply: PathBuf::from(&self.power_supply),
        }
    }
}

impl AppConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    /// Log file path, if one is configured.
    pub fn log_file(&self) -> Option<&Path> {
        let file = self.logging.file.trim();
        (!file.is_empty()).then(|| Path::new(file))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(config::FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config.try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!("[monitor]\ninterval = {}\n\n", self.monitor.interval));

        config_str.push_str(&format!(
            "[sysfs]\nthermal = {}\nhwmon = {}\npower_supply = {}\n\n",
            self.sysfs.thermal, self.sysfs.hwmon, self.sysfs.power_supply
        ));

        config_str.push_str(&format!(
            "[groups]\nfans = {}\nsupplies = {}\n\n",
            self.groups.fans, self.groups.supplies
        ));

        config_str.push_str(&format!(
            "[logging]\nlevel = {}\nfile = {}\n",
            self.logging.level, self.logging.file
        ));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn ini_file() -> NamedTempFile {
        Builder::new().suffix(".ini").tempfile().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.monitor.interval, 2);
        assert_eq!(config.monitor.interval(), Duration::from_secs(2));
        assert_eq!(config.sysfs.thermal, "/sys/class/thermal");
        assert_eq!(config.sysfs.hwmon, "/sys/class/hwmon");
        assert_eq!(config.sysfs.power_supply, "/sys/class/power_supply");
        assert!(config.groups.fans);
        assert!(config.groups.supplies);
        assert_eq!(config.get_log_level(), LevelFilter::Info);
        assert_eq!(config.log_file(), None);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = ini_file();
        let config_content = "[monitor]\ninterval = 5\n\n[sysfs]\nthermal = /tmp/thermal\n\n[groups]\nfans = false\n\n[logging]\nlevel = debug\nfile = /tmp/monitor.log\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config_path = temp_file.path();

        let config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(config.monitor.interval(), Duration::from_secs(5));
        assert_eq!(config.sysfs.thermal, "/tmp/thermal");
        assert_eq!(config.sysfs.hwmon, "/sys/class/hwmon");
        assert!(!config.groups.fans);
        assert!(config.groups.supplies);
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
        assert_eq!(config.log_file(), Some(Path::new("/tmp/monitor.log")));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut temp_file = ini_file();
        temp_file.write_all(b"[logging]\nlevel = nonsense\n").unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.monitor.interval, 2);
        assert_eq!(config.sysfs.paths(), SysfsPaths::default());
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let mut config = AppConfig::default();
        config.monitor.interval = 0;
        assert_eq!(config.monitor.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::from_file("/nonexistent/config.ini").is_err());
    }

    #[test]
    fn test_save_config() {
        let mut config = AppConfig::default();
        config.monitor.interval = 7;
        config.sysfs.power_supply = "/tmp/power_supply".to_string();
        config.groups.supplies = false;
        config.logging.level = "warn".to_string();
        config.logging.file = "/tmp/sysfs-monitor.log".to_string();

        let temp_file = ini_file();
        let config_path = temp_file.path();

        config.save(config_path).unwrap();

        let loaded_config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(loaded_config.monitor.interval, 7);
        assert_eq!(loaded_config.sysfs.power_supply, "/tmp/power_supply");
        assert_eq!(loaded_config.sysfs.thermal, "/sys/class/thermal");
        assert!(loaded_config.groups.fans);
        assert!(!loaded_config.groups.supplies);
        assert_eq!(loaded_config.get_log_level(), LevelFilter::Warn);
        assert_eq!(loaded_config.logging.file, "/tmp/sysfs-monitor.log");
    }
}
