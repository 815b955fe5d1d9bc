//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Accepted cell widths, in terminal columns.
pub const CELL_WIDTH_RANGE: RangeInclusive<u16> = 3..=40;

/// Accepted cell heights, in terminal rows.
pub const CELL_HEIGHT_RANGE: RangeInclusive<u16> = 1..=20;

/// Settings for the terminal front end.
///
/// Deserializing validates the cell size, so every `AppConfig` in hand is
/// in range.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct AppConfig {
    /// Terminal columns per board cell.
    cell_width: u16,

    /// Terminal rows per board cell.
    cell_height: u16,

    /// Show 1-9 keyboard hints in empty cells.
    show_cell_numbers: bool,

    /// File the tracing subscriber writes to.
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    log_filter: String,
}

/// The config file as written, before validation.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_cell_width")]
    cell_width: u16,
    #[serde(default = "default_cell_height")]
    cell_height: u16,
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

impl TryFrom<ConfigFile> for AppConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let config = Self {
            cell_width: file.cell_width,
            cell_height: file.cell_height,
            show_cell_numbers: file.show_cell_numbers,
            log_file: file.log_file,
            log_filter: file.log_filter,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_cell_width() -> u16 {
    9
}

fn default_cell_height() -> u16 {
    3
}

fn default_show_cell_numbers() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            show_cell_numbers: default_show_cell_numbers(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            cell_width = config.cell_width,
            cell_height = config.cell_height,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if one is given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        cell_width: Option<u16>,
        cell_height: Option<u16>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(width) = cell_width {
            self.cell_width = width;
        }
        if let Some(height) = cell_height {
            self.cell_height = height;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the cell size fits the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !CELL_WIDTH_RANGE.contains(&self.cell_width) {
            return Err(ConfigError::new(format!(
                "cell_width must be in {}..={}, got {}",
                CELL_WIDTH_RANGE.start(),
                CELL_WIDTH_RANGE.end(),
                self.cell_width
            )));
        }
        if !CELL_HEIGHT_RANGE.contains(&self.cell_height) {
            return Err(ConfigError::new(format!(
                "cell_height must be in {}..={}, got {}",
                CELL_HEIGHT_RANGE.start(),
                CELL_HEIGHT_RANGE.end(),
                self.cell_height
            )));
        }
        Ok(())
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
