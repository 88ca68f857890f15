//! Check Files In Config
//!
//! Reports every configured folder or read file that is missing on disk.
//! Missing resources are printed one per line; the exit status is still 0.

use anyhow::Result;
use clap::{value_parser, Arg};
use sample_config_tools::{check::check_config, cli};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = cli::base_command(
        "check-files-in-config",
        "Check that all folders and read files in a sample config exist",
    )
    .arg(
        Arg::new("json")
            .long("json")
            .value_name("JSON")
            .value_parser(value_parser!(PathBuf))
            .help("Also write the check report as JSON"),
    )
    .get_matches();

    let cfg = cli::handle_cli(&matches)?;
    let report = check_config(&cfg);

    for missing in report.missing.iter() {
        println!("{}", missing);
    }

    if let Some(json) = matches.get_one::<PathBuf>("json") {
        report.export_json(json)?;
        log::info!("Report saved to: {}", json.display());
    }

    log::info!(
        "Checked {} read pairs, {} missing resources",
        report.pairs_checked,
        report.missing.len()
    );
    Ok(())
}
