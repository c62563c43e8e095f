//! TOML-based application configuration.
//!
//! Stores the recommendation defaults (window size, rotation interval,
//! radius, fallback sample, category), an optional fixed location, an
//! optional catalog file and the log level.
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data_dir;
use crate::catalog::Catalog;
use crate::error::{ConfigError, CoreError, ValidationError};
use crate::geo::Coordinate;
use crate::recommend::{
    CategoryFilter, FilterParams, RadiusKm, RotationWindow, SelectorSettings,
    DEFAULT_FALLBACK_SAMPLE, DEFAULT_RADIUS_KM, DEFAULT_WINDOW_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_rotation_interval_secs")]
    pub rotation_interval_secs: u64,
    #[serde(default = "default_radius_km")]
    pub default_radius_km: u32,
    #[serde(default = "default_fallback_sample_size")]
    pub fallback_sample_size: usize,
    #[serde(default)]
    pub sort_by_distance: bool,
    /// `all` or a category name.
    #[serde(default = "default_category")]
    pub default_category: String,
}

/// Fixed reference coordinate used when no live provider is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML catalog; the built-in sample when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}
fn default_rotation_interval_secs() -> u64 {
    60
}
fn default_radius_km() -> u32 {
    DEFAULT_RADIUS_KM
}
fn default_fallback_sample_size() -> usize {
    DEFAULT_FALLBACK_SAMPLE
}
fn default_category() -> String {
    "all".into()
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            rotation_interval_secs: default_rotation_interval_secs(),
            default_radius_km: default_radius_km(),
            fallback_sample_size: default_fallback_sample_size(),
            sort_by_distance: false,
            default_category: default_category(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(root: &mut Value, key: &str, value: &str) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;
        if existing.is_object() {
            return Err(unknown());
        }

        let new_value = match existing {
            Value::Bool(_) => Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            ),
            Value::Number(_) => parse_number(value)
                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
            // Optional fields: empty or "none" clears, numbers stay numbers.
            Value::Null => match value.trim() {
                "" | "none" | "null" => Value::Null,
                other => parse_number(other).unwrap_or_else(|| Value::String(other.to_string())),
            },
            _ => Value::String(value.to_string()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing the default if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Like [`Config::load`], for an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match Self::read_existing(path)? {
            Some(cfg) => Ok(cfg),
            None => {
                tracing::debug!(path = %path.display(), "no config file; writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Read the data directory's config without touching disk when it is
    /// missing: defaults are returned and nothing is written.
    pub fn read() -> Result<Self, ConfigError> {
        Self::read_from(&Self::path()?)
    }

    /// Like [`Config::read`], for an explicit file.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::read_existing(path)?.unwrap_or_default())
    }

    fn read_existing(path: &Path) -> Result<Option<Self>, ConfigError> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .map(Some)
                .map_err(|e| load_failed(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(load_failed(e.to_string())),
        }
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Every leaf as `(dot.key, value)`, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            flatten("", &json, &mut out);
        }
        out
    }

    /// Set a value by dot-separated key, in memory only.
    ///
    /// The change is rejected (and `self` left untouched) when the key is
    /// unknown, the value does not parse, or the resulting recommendation
    /// settings are invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated
            .selector_settings()
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        *self = updated;
        Ok(())
    }

    /// Validated selector configuration.
    pub fn selector_settings(&self) -> Result<SelectorSettings, ValidationError> {
        let r = &self.recommendations;
        if r.fallback_sample_size == 0 {
            return Err(ValidationError::Zero {
                field: "fallback_sample_size",
            });
        }
        let filter = FilterParams {
            category: r.default_category.parse::<CategoryFilter>()?,
            radius: RadiusKm::new(r.default_radius_km)?,
            search: String::new(),
            sort_by_distance: r.sort_by_distance,
            fallback_sample: r.fallback_sample_size,
        };
        let rotation =
            RotationWindow::new(r.window_size, Duration::from_secs(r.rotation_interval_secs))?;
        Ok(SelectorSettings { filter, rotation })
    }

    /// The configured fixed coordinate, when both halves are set.
    pub fn reference(&self) -> Option<Coordinate> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// The configured catalog, or the built-in sample.
    pub fn catalog(&self) -> Result<Catalog, CoreError> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::sample()),
        }
    }
}

fn parse_number(value: &str) -> Option<Value> {
    if let Ok(n) = value.parse::<u64>() {
        Some(Value::Number(n.into()))
    } else {
        value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
