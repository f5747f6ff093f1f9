//! Layered configuration: defaults < config file < environment < CLI flags.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl ConfigSource {
    /// Precedence level; higher wins.
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value tagged with its source.
#[derive(Debug, Clone)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Replace the value only if the new source outranks the current one.
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Resolved orekeep configuration: where seed data is read from.
#[derive(Debug, Clone)]
pub struct OrekeepConfig {
    /// Directory holding the seed files.
    pub data_dir: ConfigValue<PathBuf>,
    /// Seed file names within `data_dir`.
    pub locations_file: ConfigValue<String>,
    pub minerals_file: ConfigValue<String>,
    pub workers_file: ConfigValue<String>,
}

/// Shape of `orekeep.toml`. Every key optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    locations_file: Option<String>,
    minerals_file: Option<String>,
    workers_file: Option<String>,
}

impl OrekeepConfig {
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from("data"), ConfigSource::Default),
            locations_file: ConfigValue::new("locations.txt".to_string(), ConfigSource::Default),
            minerals_file: ConfigValue::new("minerals.txt".to_string(), ConfigSource::Default),
            workers_file: ConfigValue::new("workers.txt".to_string(), ConfigSource::Default),
        }
    }

    /// Layer in values from a TOML file. Missing file is not an error; a file
    /// that exists but fails to parse is.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(self);
        }
        let content = fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&content).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{}: {e}", path.display()),
            )
        })?;
        if let Some(dir) = file.data_dir {
            self.data_dir.update(dir, ConfigSource::File);
        }
        if let Some(name) = file.locations_file {
            self.locations_file.update(name, ConfigSource::File);
        }
        if let Some(name) = file.minerals_file {
            self.minerals_file.update(name, ConfigSource::File);
        }
        if let Some(name) = file.workers_file {
            self.workers_file.update(name, ConfigSource::File);
        }
        Ok(self)
    }

    /// Layer in `OREKEEP_*` environment variables.
    pub fn load_from_env(mut self) -> Self {
        if let Ok(dir) = env::var("OREKEEP_DATA_DIR") {
            self.data_dir
                .update(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(name) = env::var("OREKEEP_LOCATIONS_FILE") {
            self.locations_file.update(name, ConfigSource::Environment);
        }
        if let Ok(name) = env::var("OREKEEP_MINERALS_FILE") {
            self.minerals_file.update(name, ConfigSource::Environment);
        }
        if let Ok(name) = env::var("OREKEEP_WORKERS_FILE") {
            self.workers_file.update(name, ConfigSource::Environment);
        }
        self
    }

    /// Layer in CLI overrides (highest precedence).
    pub fn apply_cli(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir.update(dir, ConfigSource::Cli);
        }
        self
    }

    pub fn locations_path(&self) -> PathBuf {
        self.data_dir.value.join(&self.locations_file.value)
    }

    pub fn minerals_path(&self) -> PathBuf {
        self.data_dir.value.join(&self.minerals_file.value)
    }

    pub fn workers_path(&self) -> PathBuf {
        self.data_dir.value.join(&self.workers_file.value)
    }
}

impl Default for OrekeepConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_precedence_never_overwrites_higher() {
        let mut value = ConfigValue::new(PathBuf::from("cli"), ConfigSource::Cli);
        value.update(PathBuf::from("file"), ConfigSource::File);
        assert_eq!(value.value, PathBuf::from("cli"));
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn cli_overrides_defaults() {
        let config = OrekeepConfig::with_defaults().apply_cli(Some(PathBuf::from("/srv/seed")));
        assert_eq!(config.data_dir.value, PathBuf::from("/srv/seed"));
        assert_eq!(config.data_dir.source, ConfigSource::Cli);
        assert_eq!(config.locations_path(), PathBuf::from("/srv/seed/locations.txt"));
    }

    #[test]
    fn missing_config_file_keeps_defaults() {
        let config = OrekeepConfig::with_defaults()
            .load_from_file("/definitely/not/here/orekeep.toml")
            .unwrap();
        assert_eq!(config.data_dir.source, ConfigSource::Default);
    }
}
