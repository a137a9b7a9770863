use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SOURCE: &str = "http://localhost:8000/data";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Base URL or directory the page documents are read from.
    pub data_source: String,
    pub log_filter: String,
}

impl Settings {
    /// Defaults, then `cafe.toml` in the working directory, then `explicit`,
    /// then `CAFE_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::layered(Path::new("cafe"), explicit, "CAFE")
    }

    fn layered(local: &Path, explicit: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("data_source", DEFAULT_SOURCE)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(File::with_name(&local.to_string_lossy()).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::layered(&dir.path().join("cafe"), None, "CAFETEST_NONE").unwrap();
        assert_eq!(s.data_source, DEFAULT_SOURCE);
        assert_eq!(s.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn explicit_file_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cafe.toml"),
            "data_source = \"./local\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("prod.toml");
        std::fs::write(&explicit, "data_source = \"https://cafe.example/data\"\n").unwrap();

        let local_only = Settings::layered(&dir.path().join("cafe"), None, "CAFETEST_NONE").unwrap();
        assert_eq!(local_only.data_source, "./local");

        let s = Settings::layered(&dir.path().join("cafe"), Some(&explicit), "CAFETEST_NONE").unwrap();
        assert_eq!(s.data_source, "https://cafe.example/data");
        assert_eq!(s.log_filter, "debug");
    }

    #[test]
    fn environment_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cafe.toml"), "data_source = \"./local\"\n").unwrap();
        std::env::set_var("CAFETEST_ENV_DATA_SOURCE", "/srv/cafe/data");
        let s = Settings::layered(&dir.path().join("cafe"), None, "CAFETEST_ENV").unwrap();
        std::env::remove_var("CAFETEST_ENV_DATA_SOURCE");
        assert_eq!(s.data_source, "/srv/cafe/data");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::layered(&dir.path().join("cafe"), Some(&missing), "CAFETEST_NONE").is_err());
    }
}
