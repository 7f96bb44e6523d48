use std::fs::{read_dir, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::SensorError;

// Read arbitrary string data, trailing whitespace removed.
pub fn get_file_line(file: &Path, capacity: usize) -> Option<String> {
    let mut reader = String::with_capacity(capacity);
    let mut f = File::open(file).ok()?;
    f.read_to_string(&mut reader).ok()?;
    reader.truncate(reader.trim_end().len());
    Some(reader)
}

/// Designed at first for reading an `i64` aka `c_long`
/// from a `/sys/class/*` sysfs attribute.
pub fn read_number_from_file<N>(file: &Path) -> Option<N>
where
    N: std::str::FromStr,
{
    let mut reader = [0u8; 32];
    let mut f = File::open(file).ok()?;
    let n = f.read(&mut reader).ok()?;
    // parse and trim would complain about `\0`.
    let number = &reader[..n];
    let number = std::str::from_utf8(number).ok()?;
    number.trim().parse().ok()
}

/// Reads and parses an attribute that a sensor cannot do without.
///
/// Unlike the `Option` helpers this keeps the reason of the failure, so a
/// refresh callback can report it.
pub fn read_attribute<N>(file: &Path) -> Result<N, SensorError>
where
    N: std::str::FromStr,
{
    let path = file.display().to_string();
    let content = std::fs::read_to_string(file).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SensorError::NotAvailable { path: path.clone() },
        _ => SensorError::ReadError {
            path: path.clone(),
            source: e,
        },
    })?;
    let content = content.trim();
    content.parse().map_err(|_| SensorError::ParseError {
        path,
        detail: format!("unexpected content '{content}'"),
    })
}

// Read a value stored in millionths (µV, µA, µW, µWh) and scale it to units.
#[inline]
pub fn read_micro_units(file: &Path) -> Option<f64> {
    read_number_from_file::<i64>(file).map(|n| n as f64 / 1_000_000.0)
}

/// Reads a temperature from a `temp`, `tempN_*` or `trip_point_N_temp`
/// attribute. The kernel reports mili-celsius; the result is celsius.
///
/// Don't call it on `label`, `name` or `type` file.
#[inline]
pub fn get_temperature_from_file(file: &Path) -> Option<f64> {
    read_number_from_file::<i64>(file).map(|n| n as f64 / 1000.0)
}

/// Lists the entries of `folder` whose name is `prefix` followed by a
/// number, sorted by that number (`thermal_zone2` before `thermal_zone10`).
pub fn numbered_entries(folder: &Path, prefix: &str) -> Vec<(u32, PathBuf)> {
    let Ok(dir) = read_dir(folder) else {
        return Vec::new();
    };

    let mut entries: Vec<(u32, PathBuf)> = dir
        .flatten()
        .filter_map(|entry| {
            let filename = entry.file_name();
            let id = filename.to_str()?.strip_prefix(prefix)?.parse::<u32>().ok()?;
            Some((id, entry.path()))
        })
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    entries
}

/// Lists the `<prefix>N_<suffix>` attributes of a hwmon `folder`, sorted by `N`.
///
/// For `temp1_input` the prefix is `temp` and the suffix `input`.
pub fn numbered_attributes(folder: &Path, prefix: &str, suffix: &str) -> Vec<u32> {
    let Ok(dir) = read_dir(folder) else {
        return Vec::new();
    };

    let mut ids: Vec<u32> = dir
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|file_type| !file_type.is_dir()))
        .filter_map(|entry| {
            let filename = entry.file_name();
            let (id, item) = filename
                .to_str()?
                .strip_prefix(prefix)?
                .split_once('_')?;
            if item != suffix {
                return None;
            }
            id.parse::<u32>().ok()
        })
        .collect();
    ids.sort_unstable();
    ids
}

/// Lists the entries of `folder` sorted by name.
pub fn sorted_children(folder: &Path) -> Vec<PathBuf> {
    let Ok(dir) = read_dir(folder) else {
        return Vec::new();
    };

    let mut children: Vec<PathBuf> = dir.flatten().map(|entry| entry.path()).collect();
    children.sort();
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_get_file_line_trims() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("type");
        fs::write(&path, "x86_pkg_temp\n").unwrap();
        assert_eq!(get_file_line(&path, 16).as_deref(), Some("x86_pkg_temp"));
        assert_eq!(get_file_line(&dir.path().join("missing"), 16), None);
    }

    #[test]
    fn test_read_numbers() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp");
        fs::write(&temp, "54321\n").unwrap();
        assert!((get_temperature_from_file(&temp).unwrap() - 54.321).abs() < 1e-9);

        let voltage = dir.path().join("voltage_now");
        fs::write(&voltage, "12000000\n").unwrap();
        assert!((read_micro_units(&voltage).unwrap() - 12.0).abs() < 1e-9);

        let garbage = dir.path().join("garbage");
        fs::write(&garbage, "N/A").unwrap();
        assert_eq!(read_number_from_file::<i64>(&garbage), None);
    }

    #[test]
    fn test_read_attribute_errors() {
        let dir = tempdir().unwrap();
        let missing = read_attribute::<u64>(&dir.path().join("fan1_input"));
        assert!(matches!(missing, Err(SensorError::NotAvailable { .. })));

        let path = dir.path().join("online");
        fs::write(&path, "yes\n").unwrap();
        assert!(matches!(
            read_attribute::<u8>(&path),
            Err(SensorError::ParseError { .. })
        ));

        fs::write(&path, "1\n").unwrap();
        assert_eq!(read_attribute::<u8>(&path).unwrap(), 1);
    }

    #[test]
    fn test_numbered_entries_sorted_numerically() {
        let dir = tempdir().unwrap();
        for name in ["thermal_zone10", "thermal_zone2", "cooling_device0", "thermal_zoneX"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let ids: Vec<u32> = numbered_entries(dir.path(), "thermal_zone")
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec![2, 10]);
    }

    #[test]
    fn test_numbered_attributes() {
        let dir = tempdir().unwrap();
        for name in ["temp3_input", "temp1_input", "temp1_label", "temp1_crit", "fan1_input"] {
            fs::write(dir.path().join(name), "0").unwrap();
        }
        assert_eq!(numbered_attributes(dir.path(), "temp", "input"), vec![1, 3]);
        assert_eq!(numbered_attributes(dir.path(), "fan", "input"), vec![1]);
        assert!(numbered_attributes(&dir.path().join("missing"), "temp", "input").is_empty());
    }
}
