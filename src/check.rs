//! Existence checks for the folders and read files named in a config
//!
//! Missing resources are collected and reported, never raised.

use crate::config::{ReadPair, SampleConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingResource {
    Folder {
        sample: String,
        pair: String,
        folder: String,
    },
    File {
        sample: String,
        pair: String,
        folder: String,
        path: String,
    },
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Folder { folder, .. } => write!(f, "{} does not exist", folder),
            Self::File { folder, path, .. } => write!(f, "{} is not present in {}", path, folder),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub pairs_checked: usize,
    pub missing: Vec<MissingResource>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json_content)?;
        Ok(())
    }
}

/// Check one read pair.
///
/// If the folder is not a directory the read files are not looked at.
pub fn check_pair(pair: &ReadPair) -> Vec<MissingResource> {
    let files = pair.files;
    let mk_file = |path: &Path| MissingResource::File {
        sample: pair.sample.to_owned(),
        pair: pair.name.to_owned(),
        folder: files.folder.clone(),
        path: path.display().to_string(),
    };

    if !files.folder_path().is_dir() {
        return vec![MissingResource::Folder {
            sample: pair.sample.to_owned(),
            pair: pair.name.to_owned(),
            folder: files.folder.clone(),
        }];
    }

    [files.read1_path(), files.read2_path()]
        .iter()
        .filter(|p| !p.is_file())
        .map(|p| mk_file(p))
        .collect()
}

pub fn check_config(cfg: &SampleConfig) -> CheckReport {
    let mut report = CheckReport::default();
    for pair in cfg.pairs() {
        report.pairs_checked += 1;
        let missing = check_pair(&pair);
        for m in missing.iter() {
            warn!("{}/{}: {}", pair.sample, pair.name, m);
        }
        report.missing.extend(missing);
    }
    report
}
