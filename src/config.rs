use crate::constants::{
    DEFAULT_CONF_FILE, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_PORT, DEFAULT_RELEASE_VERSION,
    DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE, DEVELOPER_CONF_FILE, DEVELOPER_ENV_TRUTHY,
    DEV_SECTION, ENV_CONF_FILE, ENV_CONF_SECTION, ENV_DEVELOPER_ENV, PROD_SECTION, TEST_SECTION,
};
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Where settings come from, resolved from the environment only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub file: PathBuf,
    /// True when the path came from OMPS_CONF_FILE rather than a default
    pub file_explicit: bool,
    pub section: String,
    pub developer_mode: bool,
}

impl ConfigSource {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let developer_mode = lookup(ENV_DEVELOPER_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let section = lookup(ENV_CONF_SECTION)
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| {
                let section = if developer_mode { DEV_SECTION } else { PROD_SECTION };
                section.to_string()
            });

        let (file, file_explicit) = match lookup(ENV_CONF_FILE).filter(|f| !f.is_empty()) {
            Some(path) => (PathBuf::from(path), true),
            None if developer_mode => (PathBuf::from(DEVELOPER_CONF_FILE), false),
            None => (PathBuf::from(DEFAULT_CONF_FILE), false),
        };

        Self {
            file,
            file_explicit,
            section,
            developer_mode,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    DEVELOPER_ENV_TRUTHY
        .iter()
        .any(|truthy| truthy.eq_ignore_ascii_case(value))
}

/// One section of the JSON config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionOverrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub zipfile_max_uncompressed_size: Option<usize>,
    pub max_content_length: Option<usize>,
    pub default_release_version: Option<String>,
}

/// Effective settings, built once at startup and shared read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub section: String,
    pub developer_mode: bool,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub zipfile_max_uncompressed_size: usize,
    pub max_content_length: usize,
    pub default_release_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(&ConfigSource::from_env())
    }

    /// Production values under the given section name
    fn production_defaults(section: &str) -> Self {
        Self {
            section: section.to_string(),
            developer_mode: false,
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            zipfile_max_uncompressed_size: DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            default_release_version: DEFAULT_RELEASE_VERSION.to_string(),
        }
    }

    /// Built-in defaults of the known sections
    pub fn section_defaults(section: &str) -> Option<Self> {
        let local = |developer_mode: bool| Self {
            developer_mode,
            host: IpAddr::from([127, 0, 0, 1]),
            log_level: "debug".to_string(),
            ..Self::production_defaults(section)
        };

        match section {
            PROD_SECTION => Some(Self::production_defaults(section)),
            DEV_SECTION => Some(local(true)),
            TEST_SECTION => Some(local(false)),
            _ => None,
        }
    }

    pub fn load(source: &ConfigSource) -> Result<Self> {
        let path = &source.file;
        let overrides = if path.exists() {
            read_section(path, &source.section)?
        } else if source.file_explicit {
            return Err(ConfigError::FileNotFound(path.clone()));
        } else {
            tracing::info!("No config file at {:?}, using built-in defaults", path);
            None
        };

        let mut config = match (Self::section_defaults(&source.section), overrides.is_some()) {
            (Some(defaults), _) => defaults,
            // Sections unknown to the binary start from production values
            (None, true) => Self::production_defaults(&source.section),
            (None, false) => return Err(ConfigError::UnknownSection(source.section.clone())),
        };

        if let Some(overrides) = overrides {
            config.apply(overrides);
        }
        config.developer_mode |= source.developer_mode;
        config.validate()?;

        tracing::debug!(
            "Loaded config section {} (developer mode: {})",
            config.section,
            config.developer_mode
        );

        Ok(config)
    }

    fn apply(&mut self, overrides: SectionOverrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level.to_lowercase();
        }
        if let Some(size) = overrides.zipfile_max_uncompressed_size {
            self.zipfile_max_uncompressed_size = size;
        }
        if let Some(length) = overrides.max_content_length {
            self.max_content_length = length;
        }
        if let Some(version) = overrides.default_release_version {
            self.default_release_version = version;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.zipfile_max_uncompressed_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "zipfile_max_uncompressed_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_content_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_content_length",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.default_release_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_release_version",
                reason: "must not be empty".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log_level",
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn read_section(path: &Path, section: &str) -> Result<Option<SectionOverrides>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sections: HashMap<String, SectionOverrides> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let overrides = sections.remove(section);
    if overrides.is_none() {
        tracing::warn!("Section {} not present in {:?}", section, path);
    }
    Ok(overrides)
}
