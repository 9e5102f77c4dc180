//! Tests for the serve subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_serve() {
    match parse(&["vdm", "serve"]) {
        CliCommand::Serve { bind, download_dir } => {
            assert!(bind.is_none());
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_overrides() {
    match parse(&[
        "vdm",
        "serve",
        "--bind",
        "0.0.0.0:9000",
        "--download-dir",
        "/srv/videos",
    ]) {
        CliCommand::Serve { bind, download_dir } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0:9000"));
            assert_eq!(
                download_dir.as_deref(),
                Some(std::path::Path::new("/srv/videos"))
            );
        }
        _ => panic!("expected Serve with overrides"),
    }
}
