//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

mod serve;

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["vdm", "list", "--config", "/etc/vdm.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/etc/vdm.toml")));
    let cli = Cli::try_parse_from(["vdm", "--config", "c.toml", "serve"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("c.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["vdm"]).is_err());
}
