use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default location of the published catalog of valid (Spark, Hadoop) pairings.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/sparkget/catalog/master/spark_versions.json";

/// Cached catalog older than this many days is re-fetched.
pub const DEFAULT_CACHE_MAX_AGE_DAYS: u64 = 30;

/// Global configuration loaded from `~/.config/sparkget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkgetConfig {
    /// Where the version catalog is published.
    pub catalog_url: String,
    /// Staleness window for the cached catalog, in days.
    pub cache_max_age_days: u64,
    /// Optional connect timeout for catalog fetches, in seconds. Unset means
    /// libcurl's platform default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional whole-transfer timeout for catalog fetches, in seconds.
    /// Unset applies no overall limit.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for SparkgetConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            cache_max_age_days: DEFAULT_CACHE_MAX_AGE_DAYS,
            connect_timeout_secs: None,
            fetch_timeout_secs: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sparkget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SparkgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SparkgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SparkgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SparkgetConfig::default();
        assert_eq!(cfg.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(cfg.cache_max_age_days, 30);
        assert!(cfg.connect_timeout_secs.is_none());
        assert!(cfg.fetch_timeout_secs.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SparkgetConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SparkgetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.catalog_url, cfg.catalog_url);
        assert_eq!(parsed.cache_max_age_days, cfg.cache_max_age_days);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            catalog_url = "https://mirror.example.com/spark_versions.json"
            cache_max_age_days = 7
            fetch_timeout_secs = 120
        "#;
        let cfg: SparkgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.catalog_url, "https://mirror.example.com/spark_versions.json");
        assert_eq!(cfg.cache_max_age_days, 7);
        assert!(cfg.connect_timeout_secs.is_none());
        assert_eq!(cfg.fetch_timeout_secs, Some(120));
    }
}
