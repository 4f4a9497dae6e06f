//! Integration tests for CLI argument handling
//!
//! Tests flag parsing and the startup errors that happen before the
//! terminal is taken over.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hourcast"))
        .args(args)
        .output()
        .expect("Failed to execute hourcast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hourcast"), "Help should mention hourcast");
    assert!(stdout.contains("--preset"), "Help should mention --preset flag");
    assert!(stdout.contains("--mode"), "Help should mention --mode flag");
}

#[test]
fn test_invalid_preset_prints_error_and_exits() {
    let output = run_cli(&["--preset", "paris"]);
    assert!(!output.status.success(), "Expected invalid preset to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid preset"),
        "Should print error message about invalid preset: {}",
        stderr
    );
}

#[test]
fn test_invalid_mode_prints_error_and_exits() {
    let output = run_cli(&["--mode", "both"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid mode"), "stderr: {}", stderr);
}

#[test]
fn test_out_of_range_hour_exits() {
    let output = run_cli(&["--hour", "24"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hour"), "stderr: {}", stderr);
}

#[test]
fn test_negative_longitude_is_accepted_with_help() {
    // With --help, it should succeed regardless of other flags
    let output = run_cli(&["--lat", "29.7604", "--lon", "-95.3698", "--help"]);
    assert!(output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use hourcast::cli::{parse_mode_arg, Cli, StartupConfig};
    use hourcast::data::CoordinateInput;
    use hourcast::view_state::DisplayMode;

    #[test]
    fn test_cli_no_args_uses_origin() {
        let cli = Cli::parse_from(["hourcast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.input, CoordinateInput::new("0", "0"));
        assert_eq!(config.display_mode, DisplayMode::Aggregate);
    }

    #[test]
    fn test_cli_preset_houston() {
        let cli = Cli::parse_from(["hourcast", "--preset", "Houston"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.input, CoordinateInput::new("29.7604", "-95.3698"));
    }

    #[test]
    fn test_cli_base_url_override() {
        let cli = Cli::parse_from(["hourcast", "--base-url", "http://localhost:8080/v1/forecast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn test_parse_mode_arg_aliases() {
        assert_eq!(parse_mode_arg("one").unwrap(), DisplayMode::SingleHour);
        assert_eq!(parse_mode_arg("all").unwrap(), DisplayMode::Aggregate);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["hourcast", "--plan"]).is_err());
    }
}
