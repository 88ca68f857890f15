//! Make FastQC Scripts
//!
//! Writes one SLURM script per read pair to `scripts/fastqc/`.
//! `scripts/fastqc/` and `logs/fastqc/` must already exist.

use anyhow::Result;
use sample_config_tools::{cli, fastqc::FastqcScriptGenerator, DirSink};

fn main() -> Result<()> {
    let matches = cli::with_base_dir(cli::base_command(
        "make-fastqc-scripts",
        "Generate SLURM FastQC scripts for every read pair in a sample config",
    ))
    .get_matches();

    let cfg = cli::handle_cli(&matches)?;
    let mut sink = DirSink::new(cli::base_dir(&matches));
    let generator = FastqcScriptGenerator::default();
    let n = generator.write_all(&cfg, &mut sink)?;

    log::info!(
        "Wrote {} FastQC scripts to {}",
        n,
        sink.root().join(generator.resources.script_dir()).display()
    );
    Ok(())
}
