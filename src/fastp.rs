//! fastp trimming job generation
//!
//! One SLURM script per read pair. Trimmed reads, reports, unpaired and
//! failed reads all go to a `fastp/` subfolder next to the input reads.

use crate::config::{ReadPair, SampleConfig};
use crate::output::ScriptSink;
use crate::slurm::{write_jobs, JobScript, SlurmResources};
use anyhow::Result;

const FASTP_SUFFIX: &str = ".fastp.fastq.gz";
const INPUT_SUFFIXES: [&str; 2] = [".fastq.gz", ".fq.gz"];

/// Replace a trailing `.fastq.gz` or `.fq.gz` with `.fastp.fastq.gz`.
/// Other names are returned unchanged.
pub fn fastp_output_name(name: &str) -> String {
    INPUT_SUFFIXES
        .iter()
        .find_map(|sfx| name.strip_suffix(sfx))
        .map(|stem| format!("{}{}", stem, FASTP_SUFFIX))
        .unwrap_or_else(|| name.to_owned())
}

pub struct FastpScriptGenerator {
    pub resources: SlurmResources,
    pub length_required: usize,
}

impl Default for FastpScriptGenerator {
    fn default() -> Self {
        Self {
            resources: SlurmResources::fastp(),
            length_required: 30,
        }
    }
}

impl FastpScriptGenerator {
    pub fn new(resources: SlurmResources, length_required: usize) -> Self {
        Self {
            resources,
            length_required,
        }
    }

    /// The fastp invocation for one pair, on a single line
    pub fn command(&self, pair: &ReadPair) -> String {
        let files = pair.files;
        let out_dir = files.folder_path().join("fastp");
        let out = |name: &str| out_dir.join(name).display().to_string();

        let unpaired = out(&format!("{}_unpaired.fastq.gz", pair.name));
        format!(
            "fastp -i {} -I {} -o {} -O {} -h {} -j {} --unpaired1 {} --unpaired2 {} \
             --failed_out {} --dont_overwrite --trim_poly_g --length_required {} \
             --correction --detect_adapter_for_pe --thread {}",
            files.read1_path().display(),
            files.read2_path().display(),
            out(&fastp_output_name(&files.read1)),
            out(&fastp_output_name(&files.read2)),
            out(&format!("{}_fastp.html", pair.name)),
            out(&format!("{}_fastp.json", pair.name)),
            unpaired,
            unpaired,
            out(&format!("{}_failed.fastq.gz", pair.name)),
            self.length_required,
            self.resources.cpus,
        )
    }

    pub fn job(&self, pair: &ReadPair) -> JobScript {
        let job_name = format!("{}_{}", pair.sample, pair.name);
        JobScript {
            path: self
                .resources
                .script_dir()
                .join(format!("{}_fastp.sh", job_name)),
            contents: self.resources.render(&job_name, &self.command(pair)),
        }
    }

    /// Write one script per read pair, creating the script and log
    /// directories first. Returns the number of scripts written.
    pub fn write_all(&self, cfg: &SampleConfig, sink: &mut dyn ScriptSink) -> Result<usize> {
        sink.ensure_dir(&self.resources.script_dir())?;
        sink.ensure_dir(&self.resources.log_dir())?;
        write_jobs(cfg, sink, |p| self.job(p))
    }
}
