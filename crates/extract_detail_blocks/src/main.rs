// crates/extract_detail_blocks/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use extract_detail_blocks::{run, ExtractConfig, DEFAULT_INPUT, DEFAULT_SECTION};
use unescape_newlines::unescape_newlines;

fn cli() -> Command {
    Command::new("extract_detail_blocks")
        .version("0.1.0")
        .about("Prints the literal blocks found in one section of a reStructuredText document")
        .arg(
            Arg::new("input")
                .help("Path to the reStructuredText document")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("section")
                .long("section")
                .num_args(1)
                .help("Id of the section whose literal blocks are printed")
                .default_value(DEFAULT_SECTION),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .num_args(1)
                .help("Text written after every block; \\n, \\t and \\0 are unescaped")
                .default_value("\\n"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}

fn config_from_matches(matches: &ArgMatches) -> ExtractConfig {
    let mut config = ExtractConfig::default();
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.clone();
    }
    if let Some(section) = matches.get_one::<String>("section") {
        config = config.with_section(section.as_str());
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        config = config.with_separator(unescape_newlines(separator));
    }
    config
}

/// Logs go to stderr so stdout carries only block text. RUST_LOG wins over
/// the `--verbose` default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = config_from_matches(&matches);
    log::debug!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = run(&config, &mut out).with_context(|| {
        format!(
            "Failed to extract literal blocks from {}",
            config.input.display()
        )
    })?;
    log::debug!("Wrote {} literal block(s)", count);
    Ok(())
}
