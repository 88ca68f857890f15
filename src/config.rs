//! Sample configuration loading and traversal
//!
//! The YAML config maps sample names to read pairs, and each read pair to
//! a `[folder, read1, read2]` triple:
//!
//! ```yaml
//! sample_dict:
//!   sample1:
//!     fastq_pair_1: ['path/to/pair1', 'pair1_r1.fastq.gz', 'pair1_r2.fastq.gz']
//! ```

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// The `[folder, read1, read2]` leaf of the config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<String>")]
pub struct PairFiles {
    pub folder: String,
    pub read1: String,
    pub read2: String,
}

fn value_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Plain YAML strings only: `~`, `1` or `true` are not file names
fn leaf_string(v: Value, ix: usize, field: &str) -> std::result::Result<String, String> {
    match v {
        Value::String(s) => Ok(s),
        other => Err(format!(
            "entry {} ({}) must be a string but is a {}",
            ix,
            field,
            value_type(&other)
        )),
    }
}

impl TryFrom<Vec<Value>> for PairFiles {
    type Error = String;

    fn try_from(v: Vec<Value>) -> std::result::Result<Self, Self::Error> {
        let [folder, read1, read2] = <[Value; 3]>::try_from(v).map_err(|v| {
            format!(
                "expected [folder, read1, read2] but found {} entries",
                v.len()
            )
        })?;
        Ok(Self {
            folder: leaf_string(folder, 1, "folder")?,
            read1: leaf_string(read1, 2, "read1")?,
            read2: leaf_string(read2, 3, "read2")?,
        })
    }
}

impl From<PairFiles> for Vec<String> {
    fn from(p: PairFiles) -> Self {
        vec![p.folder, p.read1, p.read2]
    }
}

impl PairFiles {
    pub fn new<S: Into<String>>(folder: S, read1: S, read2: S) -> Self {
        Self {
            folder: folder.into(),
            read1: read1.into(),
            read2: read2.into(),
        }
    }

    pub fn folder_path(&self) -> &Path {
        Path::new(&self.folder)
    }

    pub fn read1_path(&self) -> PathBuf {
        self.folder_path().join(&self.read1)
    }

    pub fn read2_path(&self) -> PathBuf {
        self.folder_path().join(&self.read2)
    }
}

/// One visited leaf: sample name, pair name and the pair's files
#[derive(Debug, Clone, Copy)]
pub struct ReadPair<'a> {
    pub sample: &'a str,
    pub name: &'a str,
    pub files: &'a PairFiles,
}

pub type PairMap = IndexMap<String, PairFiles>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleConfig {
    pub sample_dict: IndexMap<String, PairMap>,
}

/// Config as read from YAML. An empty value (`sample_dict:` with nothing
/// after it) deserializes as `None` here and is rejected in `validate`.
#[derive(Deserialize)]
struct RawConfig {
    sample_dict: Option<IndexMap<String, Option<PairMap>>>,
}

impl RawConfig {
    fn validate(self) -> Result<SampleConfig> {
        let samples = self
            .sample_dict
            .ok_or_else(|| anyhow!("`sample_dict` is missing or empty"))?;
        let mut sample_dict = IndexMap::with_capacity(samples.len());
        for (sample, pairs) in samples {
            match pairs {
                Some(p) => {
                    sample_dict.insert(sample, p);
                }
                None => bail!("Sample {} has no read pairs", sample),
            }
        }
        Ok(SampleConfig { sample_dict })
    }
}

impl SampleConfig {
    /// Read and validate a config file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("Could not open config file {}", path.display()))?;
        let cfg = Self::from_reader(BufReader::new(f))
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        debug!(
            "Read {} samples with {} read pairs from {}",
            cfg.n_samples(),
            cfg.n_pairs(),
            path.display()
        );
        Ok(cfg)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        serde_yaml::from_reader::<_, RawConfig>(rdr)
            .context("Malformed sample configuration")?
            .validate()
            .context("Malformed sample configuration")
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str::<RawConfig>(s)
            .context("Malformed sample configuration")?
            .validate()
            .context("Malformed sample configuration")
    }

    pub fn n_samples(&self) -> usize {
        self.sample_dict.len()
    }

    pub fn n_pairs(&self) -> usize {
        self.sample_dict.values().map(|p| p.len()).sum()
    }

    /// Iterate over every (sample, pair) leaf in document order
    pub fn pairs(&self) -> impl Iterator<Item = ReadPair<'_>> {
        self.sample_dict.iter().flat_map(|(sample, pairs)| {
            pairs.iter().map(move |(name, files)| ReadPair {
                sample,
                name,
                files,
            })
        })
    }

    /// Call `f(sample, pair, folder, read1, read2)` once per leaf
    pub fn for_each_pair<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&str, &str, &str, &str, &str) -> Result<()>,
    {
        for p in self.pairs() {
            f(p.sample, p.name, &p.files.folder, &p.files.read1, &p.files.read2)
                .with_context(|| format!("Error processing {}/{}", p.sample, p.name))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFG: &str = r#"
sample_dict:
  sample1:
    fastq_pair_1: ['path/to/pair1', 'pair1_r1.fastq.gz', 'pair1_r2.fastq.gz']
    fastq_pair_2: ['path/to/pair2', 'pair2_r1.fastq.gz', 'pair2_r2.fastq.gz']
  sample2:
    fastq_pair_1:
      - path/to/pair3
      - pair3_r1.fq.gz
      - pair3_r2.fq.gz
"#;

    #[test]
    fn test_load_preserves_order() {
        let cfg = SampleConfig::from_yaml_str(CFG).unwrap();
        assert_eq!(cfg.n_samples(), 2);
        assert_eq!(cfg.n_pairs(), 3);

        let visited: Vec<_> = cfg.pairs().map(|p| (p.sample, p.name)).collect();
        assert_eq!(
            visited,
            vec![
                ("sample1", "fastq_pair_1"),
                ("sample1", "fastq_pair_2"),
                ("sample2", "fastq_pair_1"),
            ]
        );
    }

    #[test]
    fn test_pair_paths() {
        let cfg = SampleConfig::from_yaml_str(CFG).unwrap();
        let p = cfg.pairs().last().unwrap();
        assert_eq!(p.files.folder, "path/to/pair3");
        assert_eq!(p.files.read1_path(), PathBuf::from("path/to/pair3/pair3_r1.fq.gz"));
        assert_eq!(p.files.read2_path(), PathBuf::from("path/to/pair3/pair3_r2.fq.gz"));
    }

    #[test]
    fn test_for_each_pair_visits_every_leaf() {
        let cfg = SampleConfig::from_yaml_str(CFG).unwrap();
        let mut seen = Vec::new();
        cfg.for_each_pair(|s, p, d, r1, r2| {
            seen.push(format!("{s}:{p}:{d}:{r1}:{r2}"));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            "sample1:fastq_pair_1:path/to/pair1:pair1_r1.fastq.gz:pair1_r2.fastq.gz"
        );
    }

    #[test]
    fn test_other_top_level_keys_ignored() {
        let s = "threads: 4\nsample_dict:\n  s1:\n    p1: [d, a.fq.gz, b.fq.gz]\n";
        let cfg = SampleConfig::from_yaml_str(s).unwrap();
        assert_eq!(cfg.n_pairs(), 1);
    }

    #[test]
    fn test_missing_sample_dict() {
        let err = SampleConfig::from_yaml_str("samples:\n  s1: {}\n").unwrap_err();
        assert!(format!("{:#}", err).contains("sample_dict"));
    }

    #[test]
    fn test_wrong_arity() {
        let s = "sample_dict:\n  s1:\n    p1: [d, a.fq.gz]\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("found 2 entries"));

        let s = "sample_dict:\n  s1:\n    p1: [d, a.fq.gz, b.fq.gz, c.fq.gz]\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("found 4 entries"));
    }

    #[test]
    fn test_non_string_entries() {
        let s = "sample_dict:\n  s1:\n    p1: [d, ~, 1]\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("entry 2 (read1) must be a string but is a null"));

        let s = "sample_dict:\n  s1:\n    p1: [d, a.fq.gz, 2.5]\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("entry 3 (read2) must be a string but is a number"));

        let s = "sample_dict:\n  s1:\n    p1: [true, a.fq.gz, b.fq.gz]\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("entry 1 (folder) must be a string but is a boolean"));
    }

    #[test]
    fn test_quoted_scalars_are_names() {
        let s = "sample_dict:\n  s1:\n    p1: ['2024', '~', 'true']\n";
        let cfg = SampleConfig::from_yaml_str(s).unwrap();
        let p = cfg.pairs().next().unwrap();
        assert_eq!(p.files.folder, "2024");
        assert_eq!(p.files.read1, "~");
    }

    #[test]
    fn test_empty_sample_dict_rejected() {
        for s in ["sample_dict:\n", "sample_dict: ~\n"] {
            let err = SampleConfig::from_yaml_str(s).unwrap_err();
            assert!(format!("{:#}", err).contains("`sample_dict` is missing or empty"));
        }
        // An explicit empty mapping is a config with no samples
        assert_eq!(SampleConfig::from_yaml_str("sample_dict: {}\n").unwrap().n_pairs(), 0);
    }

    #[test]
    fn test_empty_sample_rejected() {
        let s = "sample_dict:\n  s0:\n    p1: [d, a.fq.gz, b.fq.gz]\n  s1:\n";
        let err = SampleConfig::from_yaml_str(s).unwrap_err();
        assert!(format!("{:#}", err).contains("Sample s1 has no read pairs"));
    }

    #[test]
    fn test_leaf_not_a_list() {
        let s = "sample_dict:\n  s1:\n    p1: just_a_string\n";
        assert!(SampleConfig::from_yaml_str(s).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SampleConfig::from_path("no/such/config.yaml").unwrap_err();
        assert!(err.to_string().contains("no/such/config.yaml"));
    }
}
