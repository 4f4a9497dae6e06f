//! Command-line interface parsing for hourcast
//!
//! This module handles parsing of CLI arguments using clap. The flags only
//! seed the initial view state and point the client or logger somewhere
//! else; everything after startup happens in the TUI.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{get_preset_by_id, CoordinateInput, Hour, OPEN_METEO_BASE_URL};
use crate::view_state::DisplayMode;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified preset name is not recognized
    #[error("Invalid preset: '{0}'. Valid presets: houston, austin, dallas")]
    InvalidPreset(String),

    /// The specified display mode is not recognized
    #[error("Invalid mode: '{0}'. Valid modes: all, one")]
    InvalidMode(String),

    /// The hour is outside 0-23
    #[error("Invalid hour: {0}. Valid hours: 0-23")]
    InvalidHour(u8),
}

/// hourcast - today's hourly forecast for any coordinate
#[derive(Parser, Debug)]
#[command(name = "hourcast")]
#[command(about = "Today's hourly temperature, precipitation, pressure and visibility")]
#[command(version)]
pub struct Cli {
    /// Initial latitude text
    #[arg(long, value_name = "LAT", default_value = "0", allow_hyphen_values = true)]
    pub lat: String,

    /// Initial longitude text
    #[arg(long, value_name = "LON", default_value = "0", allow_hyphen_values = true)]
    pub lon: String,

    /// Start at a preset city instead of --lat/--lon
    ///
    /// Valid presets: houston, austin, dallas
    #[arg(long, value_name = "CITY")]
    pub preset: Option<String>,

    /// Initial display mode: all (chart) or one (single hour)
    #[arg(long, value_name = "MODE", default_value = "all")]
    pub mode: String,

    /// Initial hour for single-hour mode (0-23)
    #[arg(long, value_name = "HOUR", default_value_t = 0)]
    pub hour: u8,

    /// Forecast endpoint
    #[arg(long, value_name = "URL", default_value = OPEN_METEO_BASE_URL)]
    pub base_url: String,

    /// Write logs to a file (filter with RUST_LOG)
    #[arg(long)]
    pub log: bool,

    /// Log file path; implies --log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Initial coordinate text
    pub input: CoordinateInput,
    /// Initial display mode
    pub display_mode: DisplayMode,
    /// Initial selected hour
    pub selected_hour: Hour,
    /// Forecast endpoint
    pub base_url: String,
    /// Whether logging is enabled
    pub log_enabled: bool,
    /// Explicit log file, if given
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            input: CoordinateInput::default(),
            display_mode: DisplayMode::default(),
            selected_hour: Hour::MIN,
            base_url: OPEN_METEO_BASE_URL.to_string(),
            log_enabled: false,
            log_file: None,
        }
    }
}

/// Parses a display mode argument
pub fn parse_mode_arg(s: &str) -> Result<DisplayMode, CliError> {
    DisplayMode::from_str(s).ok_or_else(|| CliError::InvalidMode(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// Coordinate text is not validated here; invalid text starts the
    /// session in the error state, exactly as if it had been typed.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let input = match &cli.preset {
            Some(id) => get_preset_by_id(id)
                .ok_or_else(|| CliError::InvalidPreset(id.clone()))?
                .input(),
            None => CoordinateInput::new(cli.lat.clone(), cli.lon.clone()),
        };

        Ok(StartupConfig {
            input,
            display_mode: parse_mode_arg(&cli.mode)?,
            selected_hour: Hour::new(cli.hour).ok_or(CliError::InvalidHour(cli.hour))?,
            base_url: cli.base_url.clone(),
            log_enabled: cli.log || cli.log_file.is_some(),
            log_file: cli.log_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["hourcast"]);
        assert_eq!(cli.lat, "0");
        assert_eq!(cli.lon, "0");
        assert!(cli.preset.is_none());
        assert_eq!(cli.mode, "all");
        assert_eq!(cli.hour, 0);
        assert!(!cli.log);
    }

    #[test]
    fn test_cli_parse_negative_longitude() {
        let cli = Cli::parse_from(["hourcast", "--lat", "29.7604", "--lon", "-95.3698"]);
        assert_eq!(cli.lat, "29.7604");
        assert_eq!(cli.lon, "-95.3698");
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.input, CoordinateInput::default());
        assert_eq!(config.display_mode, DisplayMode::Aggregate);
        assert_eq!(config.selected_hour, Hour::MIN);
        assert_eq!(config.base_url, OPEN_METEO_BASE_URL);
        assert!(!config.log_enabled);
    }

    #[test]
    fn test_startup_config_from_cli_no_args_matches_default() {
        let cli = Cli::parse_from(["hourcast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.input, CoordinateInput::default());
        assert_eq!(config.display_mode, DisplayMode::Aggregate);
        assert_eq!(config.base_url, OPEN_METEO_BASE_URL);
    }

    #[test]
    fn test_startup_config_preset_overrides_coordinates() {
        let cli = Cli::parse_from(["hourcast", "--lat", "1", "--preset", "dallas"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.input, CoordinateInput::new("32.7767", "-96.7970"));
    }

    #[test]
    fn test_startup_config_single_hour_mode() {
        let cli = Cli::parse_from(["hourcast", "--mode", "one", "--hour", "5"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.display_mode, DisplayMode::SingleHour);
        assert_eq!(config.selected_hour.value(), 5);
    }

    #[test]
    fn test_startup_config_keeps_invalid_coordinate_text() {
        let cli = Cli::parse_from(["hourcast", "--lat", "abc"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.input.latitude, "abc");
    }

    #[test]
    fn test_startup_config_invalid_preset() {
        let cli = Cli::parse_from(["hourcast", "--preset", "paris"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid preset"));
        assert!(err.to_string().contains("paris"));
    }

    #[test]
    fn test_startup_config_invalid_mode() {
        let cli = Cli::parse_from(["hourcast", "--mode", "both"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_startup_config_invalid_hour() {
        let cli = Cli::parse_from(["hourcast", "--hour", "24"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::InvalidHour(24))
        ));
    }

    #[test]
    fn test_log_file_implies_logging() {
        let cli = Cli::parse_from(["hourcast", "--log-file", "/tmp/hourcast.log"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.log_enabled);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/hourcast.log")));
    }

    #[test]
    fn test_parse_mode_arg() {
        assert_eq!(parse_mode_arg("all").unwrap(), DisplayMode::Aggregate);
        assert!(parse_mode_arg("none").is_err());
    }
}
