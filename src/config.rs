use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level TMY configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TmyConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Selection settings.
    #[serde(default)]
    pub select: SelectToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// Directory holding `<year>/<STATION>.csv` input files.
    pub input: Option<PathBuf>,
    /// Directory for synthetic-year output.
    pub output: Option<PathBuf>,
    /// 0-based index of the temperature column in the input files.
    #[serde(default)]
    pub temp_column: usize,
    /// Station registry CSV for the inventory report.
    pub registry: Option<PathBuf>,
    /// Output path of the inventory report.
    pub inventory: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectToml {
    /// Minimum qualifying years a station must have.
    #[serde(default = "default_min_years")]
    pub min_years: usize,
}

impl Default for SelectToml {
    fn default() -> Self {
        Self {
            min_years: default_min_years(),
        }
    }
}

fn default_min_years() -> usize {
    10
}

/// Loads configuration from a TOML file. A missing file yields defaults, so
/// the CLI path overrides are enough to run without a config file.
pub fn load(path: &Path) -> Result<TmyConfig> {
    if !path.exists() {
        return Ok(TmyConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
