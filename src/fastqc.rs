//! FastQC job generation
//!
//! Reports are written to a `fastqc/` subfolder next to the input reads.
//! The script and log directories are expected to exist already.

use crate::config::{ReadPair, SampleConfig};
use crate::output::ScriptSink;
use crate::slurm::{write_jobs, JobScript, SlurmResources};
use anyhow::Result;

pub struct FastqcScriptGenerator {
    pub resources: SlurmResources,
}

impl Default for FastqcScriptGenerator {
    fn default() -> Self {
        Self {
            resources: SlurmResources::fastqc(),
        }
    }
}

impl FastqcScriptGenerator {
    pub fn new(resources: SlurmResources) -> Self {
        Self { resources }
    }

    pub fn command(&self, pair: &ReadPair) -> String {
        let files = pair.files;
        format!(
            "fastqc -o {} -t {} {} {}",
            files.folder_path().join("fastqc").display(),
            self.resources.cpus,
            files.read1_path().display(),
            files.read2_path().display(),
        )
    }

    pub fn job(&self, pair: &ReadPair) -> JobScript {
        let job_name = format!("{}_{}", pair.sample, pair.name);
        JobScript {
            path: self.resources.script_dir().join(format!("{}.sh", job_name)),
            contents: self.resources.render(&job_name, &self.command(pair)),
        }
    }

    pub fn write_all(&self, cfg: &SampleConfig, sink: &mut dyn ScriptSink) -> Result<usize> {
        write_jobs(cfg, sink, |p| self.job(p))
    }
}
