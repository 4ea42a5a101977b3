//! CLI integration tests.
//!
//! Tests cover:
//! - Argument parsing for each subcommand
//! - Config loading and validation with real INI files on disk
//! - Full analyze runs against saved report pages
//! - Exit codes for each failure kind

mod common;

use clap::Parser;
use common::*;
use cotbias::cli::{self, Cli, Command, FormatArg};
use cotbias::domain::error::CotError;
use std::process::ExitCode;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cotbias").chain(args.iter().copied())).unwrap()
}

/// `ExitCode` has no `PartialEq`; compare through its debug form.
fn assert_exit(actual: ExitCode, expected: ExitCode) {
    assert_eq!(format!("{actual:?}"), format!("{expected:?}"));
}

fn path_str(file: &tempfile::NamedTempFile) -> String {
    file.path().display().to_string()
}

mod parsing {
    use super::*;

    #[test]
    fn analyze_accepts_all_options() {
        let cli = parse(&[
            "analyze",
            "--instrument",
            "EURO FX",
            "--config",
            "cotbias.ini",
            "--input",
            "page.htm",
            "--format",
            "json",
            "--output",
            "out.json",
            "--verbose",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Analyze {
                instrument,
                format,
                input,
                ..
            } => {
                assert_eq!(instrument.as_deref(), Some("EURO FX"));
                assert_eq!(format, Some(FormatArg::Json));
                assert!(input.is_some());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_defaults_to_text() {
        let cli = parse(&["list"]);
        assert!(matches!(cli.command, Command::List { format: FormatArg::Text }));
    }

    #[test]
    fn date_requires_input() {
        assert!(Cli::try_parse_from(["cotbias", "date"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["cotbias", "list", "--format", "xml"]).is_err());
    }
}

mod config_loading {
    use super::*;

    #[test]
    fn missing_config_path_uses_empty_config() {
        assert!(cli::load_config(None).is_ok());
    }

    #[test]
    fn unreadable_config_is_io_error() {
        let err = cli::load_config(Some(std::path::Path::new("/nonexistent/cotbias.ini")))
            .err()
            .unwrap();
        assert!(matches!(err, CotError::Io(_)));
    }

    #[test]
    fn invalid_url_exits_with_config_code() {
        let config = write_temp("[sources]\nusd_index_url = file:///tmp/page.htm\n");
        let cli = parse(&["analyze", "--config", &path_str(&config)]);
        assert_exit(cli::run(cli), ExitCode::from(2));
    }

    #[test]
    fn invalid_output_format_exits_with_config_code() {
        let config = write_temp("[output]\nformat = yaml\n");
        let page = write_temp(STANDARD_REPORT);
        let cli = parse(&[
            "analyze",
            "--config",
            &path_str(&config),
            "--input",
            &path_str(&page),
        ]);
        assert_exit(cli::run(cli), ExitCode::from(2));
    }
}

mod analyze_command {
    use super::*;

    #[test]
    fn writes_json_report_to_output_file() {
        let page = write_temp(STANDARD_REPORT);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");

        let cli = parse(&[
            "analyze",
            "--instrument",
            "COCOA",
            "--input",
            &path_str(&page),
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ]);
        assert_exit(cli::run(cli), ExitCode::SUCCESS);

        let written = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["instrument"]["id"], "COCOA");
        assert_eq!(value["bias"]["label"], "STRONGLY_BULLISH");
        assert_eq!(value["bias"]["confidence"], "HIGH");
    }

    #[test]
    fn config_supplies_default_instrument_and_format() {
        let config = write_temp("[analysis]\ninstrument = BRITISH POUND\n\n[output]\nformat = text\n");
        let page = write_temp(FINANCIAL_REPORT);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.txt");

        let cli = parse(&[
            "analyze",
            "--config",
            &path_str(&config),
            "--input",
            &path_str(&page),
            "--output",
            out.to_str().unwrap(),
        ]);
        assert_exit(cli::run(cli), ExitCode::SUCCESS);

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("===="));
        assert!(text.contains("BRITISH POUND COT ANALYSIS REPORT"));
        assert!(text.contains("Report Date: 18/Mar/2025"));
    }

    #[test]
    fn unknown_instrument_exits_4() {
        let page = write_temp(STANDARD_REPORT);
        let cli = parse(&["analyze", "--instrument", "WHEAT", "--input", &path_str(&page)]);
        assert_exit(cli::run(cli), ExitCode::from(4));
    }

    #[test]
    fn missing_section_exits_5() {
        let page = write_temp(STANDARD_REPORT);
        let cli = parse(&["analyze", "--instrument", "SUGAR", "--input", &path_str(&page)]);
        assert_exit(cli::run(cli), ExitCode::from(5));
    }

    #[test]
    fn missing_input_file_exits_1() {
        let cli = parse(&["analyze", "--input", "/nonexistent/page.htm"]);
        assert_exit(cli::run(cli), ExitCode::from(1));
    }
}

mod other_commands {
    use super::*;

    #[test]
    fn list_succeeds_in_both_formats() {
        assert_exit(cli::run(parse(&["list"])), ExitCode::SUCCESS);
        assert_exit(cli::run(parse(&["list", "--format", "json"])), ExitCode::SUCCESS);
    }

    #[test]
    fn date_reads_saved_page() {
        let page = write_temp(STANDARD_REPORT);
        assert_exit(
            cli::run(parse(&["date", "--input", &path_str(&page)])),
            ExitCode::SUCCESS,
        );
    }

    #[test]
    fn date_with_missing_file_exits_1() {
        assert_exit(
            cli::run(parse(&["date", "--input", "/nonexistent/page.htm"])),
            ExitCode::from(1),
        );
    }
}
