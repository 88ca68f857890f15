//! SLURM batch script layout shared by the fastp and fastqc generators

use crate::config::{ReadPair, SampleConfig};
use crate::output::ScriptSink;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Scheduler settings and environment for one tool's jobs
#[derive(Debug, Clone)]
pub struct SlurmResources {
    /// Subdirectory of `scripts/` and `logs/` used by this tool
    pub tool_dir: &'static str,
    pub time: &'static str,
    pub mem: &'static str,
    pub cpus: usize,
    pub modules: &'static str,
}

impl SlurmResources {
    pub fn fastp() -> Self {
        Self {
            tool_dir: "fastp",
            time: "4:00:00",
            mem: "4G",
            cpus: 6,
            modules: "cesga/2020 gcccore/system fastp/0.22.0",
        }
    }

    pub fn fastqc() -> Self {
        Self {
            tool_dir: "fastqc",
            time: "3:00:00",
            mem: "4G",
            cpus: 6,
            modules: "cesga/2020 fastqc/0.11.9",
        }
    }

    pub fn script_dir(&self) -> PathBuf {
        Path::new("scripts").join(self.tool_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        Path::new("logs").join(self.tool_dir)
    }

    /// Full script text: directives, module load, then `command` on one line
    pub fn render(&self, job_name: &str, command: &str) -> String {
        let log = format!("logs/{}/{}", self.tool_dir, job_name);
        format!(
            "#!/bin/bash\n\
             #SBATCH --job-name={job_name}\n\
             #SBATCH --output={log}.out\n\
             #SBATCH --error={log}.err\n\
             #SBATCH --time={}\n\
             #SBATCH --mem={}\n\
             #SBATCH --cpus-per-task={}\n\
             \n\
             module load {}\n\
             \n\
             {command}\n",
            self.time, self.mem, self.cpus, self.modules
        )
    }
}

/// A generated script and where it should go (relative to the output root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobScript {
    pub path: PathBuf,
    pub contents: String,
}

/// Build and write one job per read pair, returning how many were written
pub fn write_jobs<F>(cfg: &SampleConfig, sink: &mut dyn ScriptSink, mk_job: F) -> Result<usize>
where
    F: Fn(&ReadPair) -> JobScript,
{
    let mut n = 0;
    for pair in cfg.pairs() {
        let job = mk_job(&pair);
        debug!("Writing {}", job.path.display());
        sink.write_script(&job.path, &job.contents)?;
        n += 1;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fastqc_header() {
        let s = SlurmResources::fastqc().render("s1_p1", "fastqc -t 6 a b");
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "#!/bin/bash");
        assert_eq!(lines[1], "#SBATCH --job-name=s1_p1");
        assert_eq!(lines[2], "#SBATCH --output=logs/fastqc/s1_p1.out");
        assert_eq!(lines[3], "#SBATCH --error=logs/fastqc/s1_p1.err");
        assert_eq!(lines[4], "#SBATCH --time=3:00:00");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "module load cesga/2020 fastqc/0.11.9");
        assert_eq!(lines[10], "fastqc -t 6 a b");
        assert_eq!(lines.len(), 11);
        assert!(s.ends_with("a b\n"));
    }

    #[test]
    fn test_dirs() {
        let r = SlurmResources::fastp();
        assert_eq!(r.script_dir(), PathBuf::from("scripts/fastp"));
        assert_eq!(r.log_dir(), PathBuf::from("logs/fastp"));
    }
}
