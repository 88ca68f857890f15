//! Make fastp Scripts
//!
//! Writes one SLURM script per read pair to `scripts/fastp/`, creating
//! `scripts/fastp/` and `logs/fastp/` if needed.

use anyhow::Result;
use sample_config_tools::{cli, fastp::FastpScriptGenerator, DirSink};

fn main() -> Result<()> {
    let matches = cli::with_base_dir(cli::base_command(
        "make-fastp-scripts",
        "Generate SLURM fastp scripts for every read pair in a sample config",
    ))
    .get_matches();

    let cfg = cli::handle_cli(&matches)?;
    let mut sink = DirSink::new(cli::base_dir(&matches));
    let generator = FastpScriptGenerator::default();
    let n = generator.write_all(&cfg, &mut sink)?;

    log::info!(
        "Wrote {} fastp scripts to {}",
        n,
        sink.root().join(generator.resources.script_dir()).display()
    );
    Ok(())
}
