//! Command line pieces shared by all the tools
//!
//! Every tool takes the config file as its only positional argument and a
//! `--loglevel` option. Tool specific options are added by each binary.

use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command, ValueEnum};
use std::path::PathBuf;

use crate::config::SampleConfig;

/// Minimum level of messages written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl LogLevel {
    /// stderrlog verbosity (0 = errors only), or `None` to silence logging
    pub fn verbosity(&self) -> Option<usize> {
        match self {
            Self::Error => Some(0),
            Self::Warn => Some(1),
            Self::Info => Some(2),
            Self::Debug => Some(3),
            Self::Trace => Some(4),
            Self::None => None,
        }
    }
}

/// Initialize stderr logging from the `--loglevel` option
pub fn init_log(m: &ArgMatches) -> Result<()> {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel::Warn);

    stderrlog::new()
        .quiet(level.verbosity().is_none())
        .verbosity(level.verbosity().unwrap_or(0))
        .init()?;
    Ok(())
}

pub fn base_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::new("config_file")
                .value_name("CONFIG_FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to YAML config file")
                .required(true),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("warn")
                .help("Set log level"),
        )
}

/// Adds `--base-dir` for tools that write scripts
pub fn with_base_dir(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("base_dir")
            .short('d')
            .long("base-dir")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .default_value(".")
            .help("Directory under which scripts/ and logs/ are written"),
    )
}

pub fn config_path(m: &ArgMatches) -> Result<PathBuf> {
    m.get_one::<PathBuf>("config_file")
        .cloned()
        .ok_or_else(|| anyhow!("Missing config file argument"))
}

pub fn base_dir(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("base_dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Set up logging and read the config named on the command line
pub fn handle_cli(m: &ArgMatches) -> Result<SampleConfig> {
    init_log(m)?;
    let path = config_path(m)?;
    let cfg = SampleConfig::from_path(&path)?;
    info!(
        "{}: {} samples, {} read pairs",
        path.display(),
        cfg.n_samples(),
        cfg.n_pairs()
    );
    Ok(cfg)
}
