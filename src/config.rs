//! User configuration loaded from `config.toml`.
//!
//! Every key is optional. The default file lives in the platform config
//! directory (`~/.config/casctl/config.toml` on Linux) and may be absent; a
//! file passed explicitly with `--config` must exist.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::ConfigError;

/// Top-level configuration file layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// `[http]` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent to the CAS server.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: constants::HTTP_TIMEOUT_SECS,
            user_agent: format!("{}/{}", constants::APP_NAME, constants::APP_VERSION),
        }
    }
}

/// `[logging]` section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
        }
    }
}

/// Verbosity of diagnostic output on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Raise verbosity by `steps`, saturating at `Trace`.
    #[must_use]
    pub fn raised(self, steps: u8) -> Self {
        (0..steps).fold(self, |level, _| match level {
            Self::Error => Self::Warn,
            Self::Warn => Self::Info,
            Self::Info => Self::Debug,
            Self::Debug | Self::Trace => Self::Trace,
        })
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Default location of the configuration file, if the platform has one.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// # Errors
    ///
    /// Fails if an explicit file cannot be read, or if any file found
    /// cannot be parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, timeout_secs: Option<u64>, verbosity: u8) -> Self {
        if let Some(timeout) = timeout_secs {
            self.http.timeout_secs = timeout;
        }
        self.logging.level = self.logging.level.raised(verbosity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.http.timeout_secs, constants::HTTP_TIMEOUT_SECS);
        assert!(settings.http.user_agent.starts_with("casctl/"));
        assert_eq!(settings.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[http]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(settings.http.timeout_secs, 5);
        assert_eq!(settings.http.user_agent, HttpConfig::default().user_agent);
        assert_eq!(settings.logging, LoggingConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(toml::from_str::<Settings>("[http]\ntimeout = 5\n").is_err());
        assert!(toml::from_str::<Settings>("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nuser_agent = \"probe/1\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.http.user_agent, "probe/1");
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(Some(3), 2);
        assert_eq!(settings.http.timeout_secs, 3);
        assert_eq!(settings.logging.level, LogLevel::Debug);

        let settings = Settings::default().with_overrides(None, 9);
        assert_eq!(settings.http.timeout_secs, constants::HTTP_TIMEOUT_SECS);
        assert_eq!(settings.logging.level, LogLevel::Trace);
    }
}
