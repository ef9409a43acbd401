//! City → data-file configuration.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maps lower-case city names to their trip CSV paths.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "data/chicago.csv",
///   "new york city": "data/new_york_city.csv"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CityData {
    entries: BTreeMap<String, PathBuf>,
}

impl CityData {
    /// The three cities the tool ships with, resolved relative to the
    /// working directory.
    pub fn bundled() -> Self {
        let entries = [
            ("chicago", "chicago.csv"),
            ("new york city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ]
        .into_iter()
        .map(|(city, path)| (city.to_string(), PathBuf::from(path)))
        .collect();

        Self { entries }
    }

    /// Loads the table from a JSON file at `path`. City names are
    /// normalized to lower case.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading city table {}", path.display()))?;
        let raw: BTreeMap<String, PathBuf> = serde_json::from_str(&content)
            .with_context(|| format!("parsing city table {}", path.display()))?;

        let entries = raw
            .into_iter()
            .map(|(city, csv_path)| (city.to_lowercase(), csv_path))
            .collect();
        Ok(Self { entries })
    }

    /// Returns the CSV path for `city`, if one is configured.
    pub fn path_for(&self, city: &str) -> Option<&Path> {
        self.entries.get(city).map(PathBuf::as_path)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.entries.contains_key(city)
    }

    /// Iterates over the configured city names in alphabetical order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_bundled_cities() {
        let cities = CityData::bundled();
        let names: Vec<&str> = cities.cities().collect();

        assert_eq!(names, vec!["chicago", "new york city", "washington"]);
        assert!(cities.contains("washington"));
        assert_eq!(
            cities.path_for("chicago"),
            Some(Path::new("chicago.csv"))
        );
    }

    #[test]
    fn test_unknown_city_has_no_path() {
        let cities = CityData::bundled();
        assert_eq!(cities.path_for("boston"), None);
        assert!(!cities.contains("boston"));
    }

    #[test]
    fn test_load_normalizes_city_names() {
        let path = temp_path("bikeshare_explorer_test_cities.json");
        fs::write(&path, r#"{"Chicago": "a.csv", "New York City": "b.csv"}"#).unwrap();

        let cities = CityData::load(&path).unwrap();
        assert!(cities.contains("chicago"));
        assert_eq!(
            cities.path_for("new york city"),
            Some(Path::new("b.csv"))
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = temp_path("bikeshare_explorer_test_no_such_cities.json");
        let _ = fs::remove_file(&path);

        assert!(CityData::load(&path).is_err());
    }
}
