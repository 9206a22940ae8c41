// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Engine configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_OVERUSED: usize = 4;
const DEFAULT_BALANCED_MIN: usize = 2;
const DEFAULT_REPORT_SHEET: &str = "Rotation Report";
const DEFAULT_WEEK_COUNT: u32 = 8;

/// Thresholds and sheet names driving one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frequency (distinct weeks) at or above which an exercise is overused
    pub overused: usize,
    /// Lowest frequency still considered balanced
    pub balanced_min: usize,
    /// Week sheets to process, in order
    pub week_sheets: Vec<String>,
    /// Name of the report destination
    pub report_sheet: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overused: DEFAULT_OVERUSED,
            balanced_min: DEFAULT_BALANCED_MIN,
            week_sheets: (1..=DEFAULT_WEEK_COUNT).map(|n| format!("Week {}", n)).collect(),
            report_sheet: DEFAULT_REPORT_SHEET.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a file, or from the environment when no file
    /// is given and `rotation_engine.toml` is absent
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new("rotation_engine.toml").exists() {
            return Self::load_from_file("rotation_engine.toml");
        }

        Ok(Self::from_env())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Read configuration from environment variables (`.env` supported):
    /// `OVERUSED`, `BALANCED_MIN`, `WEEK_SHEETS` (comma-separated),
    /// `REPORT_SHEET_NAME`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let overused = env::var("OVERUSED")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.overused);
        let balanced_min = env::var("BALANCED_MIN")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.balanced_min);
        let week_sheets = env::var("WEEK_SHEETS")
            .map(|value| {
                value
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.week_sheets);
        let report_sheet = env::var("REPORT_SHEET_NAME").unwrap_or(defaults.report_sheet);

        Self {
            overused,
            balanced_min,
            week_sheets,
            report_sheet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.overused, 4);
        assert_eq!(config.balanced_min, 2);
        assert_eq!(config.week_sheets.len(), 8);
        assert_eq!(config.week_sheets[0], "Week 1");
        assert_eq!(config.week_sheets[7], "Week 8");
        assert_eq!(config.report_sheet, "Rotation Report");
    }

    #[test]
    fn test_load_from_file() {
        let config_content = r#"
overused = 5
balanced_min = 3
week_sheets = ["Week 1", "Week 2"]
report_sheet = "Risk Report"
"#;
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, config_content).expect("Failed to write config");

        let config = EngineConfig::load_from_file(&config_path.to_string_lossy())
            .expect("Failed to load config");

        assert_eq!(config.overused, 5);
        assert_eq!(config.balanced_min, 3);
        assert_eq!(config.week_sheets, vec!["Week 1", "Week 2"]);
        assert_eq!(config.report_sheet, "Risk Report");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "overused = 6").expect("Failed to write config");

        let config = EngineConfig::load_from_file(&config_path.to_string_lossy())
            .expect("Failed to load config");

        assert_eq!(config.overused, 6);
        assert_eq!(config.balanced_min, 2);
        assert_eq!(config.week_sheets.len(), 8);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "this is not valid toml [[[").expect("Failed to write config");

        let result = EngineConfig::load_from_file(&config_path.to_string_lossy());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    fn test_week_sheet_env_parsing() {
        env::set_var("WEEK_SHEETS", "Week 1, Week 2 ,, Week 5");

        let config = EngineConfig::from_env();
        assert_eq!(config.week_sheets, vec!["Week 1", "Week 2", "Week 5"]);

        env::remove_var("WEEK_SHEETS");
    }
}
