//! Configuration loading utilities
//!
//! Thin wrappers over figment so every crate loads declarative
//! configuration (sources, quality thresholds) the same way.

use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(String),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
}

/// Load configuration from the conventional file layout.
///
/// Priority (highest to lowest):
/// 1. Environment variables prefixed `<NAME>_`
/// 2. Local overrides (`config/local.*`, not committed)
/// 3. The named config file (`config/<name>.*`)
///
/// YAML, TOML, and JSON are all accepted at each layer.
pub fn load_config<T>(name: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let figment = Figment::new()
        .merge(Toml::file(format!("config/{}.toml", name)))
        .merge(Yaml::file(format!("config/{}.yaml", name)))
        .merge(Json::file(format!("config/{}.json", name)))
        .merge(Toml::file("config/local.toml"))
        .merge(Yaml::file("config/local.yaml"))
        .merge(Json::file("config/local.json"))
        .merge(Env::prefixed(&format!("{}_", name.to_uppercase())));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(format!("Failed to load configuration '{}': {}", name, e)))
}

/// Load configuration from a specific file, dispatching on extension.
pub fn load_config_from_file<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConfigError::Load("Config file must have an extension".to_string()))?;

    let figment = match extension {
        "toml" => Figment::new().merge(Toml::file(path)),
        "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
        "json" => Figment::new().merge(Json::file(path)),
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    figment.extract().map_err(|e| {
        ConfigError::Load(format!(
            "Failed to load configuration from {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        threshold: f64,
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: aruba\nthreshold: 1.1").unwrap();

        let sample: Sample = load_config_from_file(file.path()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "aruba".to_string(),
                threshold: 1.1
            }
        );
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"aruba\"\nthreshold = 1.1").unwrap();

        let sample: Sample = load_config_from_file(file.path()).unwrap();
        assert_eq!(sample.name, "aruba");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let result: Result<Sample, _> = load_config_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result: Result<Sample, _> = load_config_from_file(file.path());
        assert!(result.is_err());
    }
}
