//! Unique read folders referenced by a config

use crate::config::SampleConfig;
use indexmap::IndexSet;

/// Folders in the order they are first seen, without duplicates
pub fn unique_folders(cfg: &SampleConfig) -> IndexSet<&str> {
    cfg.pairs().map(|p| p.files.folder.as_str()).collect()
}
