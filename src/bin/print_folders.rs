//! Print Folders In Config
//!
//! Prints each folder referenced by a sample config once.

use anyhow::Result;
use sample_config_tools::{cli, folders::unique_folders};

fn main() -> Result<()> {
    let matches = cli::base_command(
        "print-folders-in-config",
        "Print the unique read folders in a sample config",
    )
    .get_matches();

    let cfg = cli::handle_cli(&matches)?;
    for folder in unique_folders(&cfg) {
        println!("{}", folder);
    }
    Ok(())
}
