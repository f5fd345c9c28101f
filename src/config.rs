//! Runtime configuration.
//!
//! Use the builder methods to customize, or [`AppConfig::from_env`] to read
//! overrides from the environment.
//!
//! ```ignore
//! use soulstream::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_api_key("key")
//!     .with_connect_delay(Duration::from_millis(10));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::generation::{GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::models::{Money, Theme};
use crate::wallet::INITIAL_BALANCE;

pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_BILLING_DELAY: Duration = Duration::from_millis(2000);

/// Directory under the home directory holding preferences and the log.
pub const DATA_DIR_NAME: &str = ".soulstream";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number of milliseconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },
    #[error("SOULSTREAM_CAPTURE must be `simulated` or `off`, got {0:?}")]
    InvalidCapture(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Simulated,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Remote model; falls back to fixed lines when no key is set
    Remote,
    /// Canned offline lines
    Scripted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub generator: GeneratorKind,
    pub connect_delay: Duration,
    pub billing_delay: Duration,
    pub capture: CaptureMode,
    /// Overrides `~/.soulstream`
    pub data_dir: Option<PathBuf>,
    pub initial_balance: Money,
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            generator: GeneratorKind::Remote,
            connect_delay: DEFAULT_CONNECT_DELAY,
            billing_delay: DEFAULT_BILLING_DELAY,
            capture: CaptureMode::Simulated,
            data_dir: None,
            initial_balance: INITIAL_BALANCE,
            default_theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    pub fn with_billing_delay(mut self, delay: Duration) -> Self {
        self.billing_delay = delay;
        self
    }

    pub fn with_capture(mut self, capture: CaptureMode) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_initial_balance(mut self, balance: Money) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        if let Some(model) = get("SOULSTREAM_MODEL") {
            config.model = model;
        }
        if let Some(base) = get("SOULSTREAM_API_BASE") {
            config.api_base = base;
        }
        if let Some(raw) = get("SOULSTREAM_CONNECT_DELAY_MS") {
            config.connect_delay = parse_millis("SOULSTREAM_CONNECT_DELAY_MS", &raw)?;
        }
        if let Some(raw) = get("SOULSTREAM_BILLING_DELAY_MS") {
            config.billing_delay = parse_millis("SOULSTREAM_BILLING_DELAY_MS", &raw)?;
        }
        if let Some(raw) = get("SOULSTREAM_CAPTURE") {
            config.capture = match raw.trim().to_ascii_lowercase().as_str() {
                "simulated" => CaptureMode::Simulated,
                "off" => CaptureMode::Off,
                _ => return Err(ConfigError::InvalidCapture(raw)),
            };
        }
        if let Some(dir) = get("SOULSTREAM_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    /// Apply command-line flags (excluding the program name).
    pub fn apply_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--offline" => self.generator = GeneratorKind::Scripted,
                "--no-capture" => self.capture = CaptureMode::Off,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(self)
    }

    /// Effective data directory: the override, else `~/.soulstream`.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(DATA_DIR_NAME)))
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            api_base: self.api_base.clone(),
        }
    }
}

fn parse_millis(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDuration {
            var,
            value: raw.to_string(),
        })
}
