//! Configuration file support.
//!
//! GeoFollow keeps deployment settings in a small INI file. Only the
//! provider endpoint is configurable; all loop timings and thresholds are
//! fixed constants.
//!
//! ```ini
//! [provider]
//! api_key = YOUR_API_KEY
//! base_url = https://maps.googleapis.com/maps/api/staticmap?
//! timeout = 30
//! ```
//!
//! Every key is optional; CLI flags override file values, which override
//! the built-in defaults.

use std::path::Path;

use ini::Ini;
use thiserror::Error;

/// Default HTTP timeout for map fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or parsed as INI.
    #[error("failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// A key held a value of the wrong type.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Static map provider settings.
    pub provider: ProviderSettings,
}

/// `[provider]` section.
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// API key for the map endpoint.
    pub api_key: Option<String>,
    /// Endpoint base URL override.
    pub base_url: Option<String>,
    /// HTTP timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path.as_ref())?;

        let mut provider = ProviderSettings::default();
        if let Some(section) = ini.section(Some("provider")) {
            provider.api_key = section.get("api_key").map(str::to_string);
            provider.base_url = section.get("base_url").map(str::to_string);
            provider.timeout_secs = section
                .get("timeout")
                .map(|raw| {
                    raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                        key: "provider.timeout".to_string(),
                        value: raw.to_string(),
                    })
                })
                .transpose()?;
        }

        Ok(Self { provider })
    }

    /// HTTP timeout to use, falling back to the default.
    pub fn timeout_secs(&self) -> u64 {
        self.provider.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_loads_provider_section() {
        let file = write_config(
            "[provider]\napi_key = abc123\nbase_url = http://localhost/map?\ntimeout = 10\n",
        );

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("abc123"));
        assert_eq!(
            config.provider.base_url.as_deref(),
            Some("http://localhost/map?")
        );
        assert_eq!(config.timeout_secs(), 10);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let file = write_config("[provider]\napi_key = abc123\n");

        let config = ConfigFile::load(file.path()).unwrap();
        assert!(config.provider.base_url.is_none());
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = write_config("");

        let config = ConfigFile::load(file.path()).unwrap();
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        let file = write_config("[provider]\ntimeout = soon\n");

        let err = ConfigFile::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ConfigFile::load("/nonexistent/geofollow.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
