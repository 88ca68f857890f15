//! Destinations for generated job scripts
//!
//! Script generators only talk to a [`ScriptSink`], so they can be pointed at
//! a real directory tree or at an in-memory one.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

pub trait ScriptSink {
    /// Create `rel` and any missing parents
    fn ensure_dir(&mut self, rel: &Path) -> Result<()>;

    /// Create or truncate `rel`. The parent directory must already exist.
    fn write_script(&mut self, rel: &Path, contents: &str) -> Result<()>;
}

/// Writes under a base directory on disk
pub struct DirSink {
    root: PathBuf,
}

impl Default for DirSink {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DirSink {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ScriptSink for DirSink {
    fn ensure_dir(&mut self, rel: &Path) -> Result<()> {
        let dir = self.root.join(rel);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create directory {}", dir.display()))
    }

    fn write_script(&mut self, rel: &Path, contents: &str) -> Result<()> {
        let path = self.root.join(rel);
        fs::write(&path, contents)
            .with_context(|| format!("Could not write script {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Could not set permissions on {}", path.display()))?;
        }
        Ok(())
    }
}

/// Keeps scripts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some directories already present
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut sink = Self::new();
        for d in dirs {
            sink.add_dir(d.as_ref());
        }
        sink
    }

    fn add_dir(&mut self, rel: &Path) {
        for a in rel.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            self.dirs.insert(a.to_path_buf());
        }
    }

    pub fn has_dir<P: AsRef<Path>>(&self, rel: P) -> bool {
        self.dirs.contains(rel.as_ref())
    }

    pub fn get<P: AsRef<Path>>(&self, rel: P) -> Option<&str> {
        self.files.get(rel.as_ref()).map(|s| s.as_str())
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }
}

impl ScriptSink for MemorySink {
    fn ensure_dir(&mut self, rel: &Path) -> Result<()> {
        self.add_dir(rel);
        Ok(())
    }

    fn write_script(&mut self, rel: &Path, contents: &str) -> Result<()> {
        match rel.parent() {
            Some(p) if !p.as_os_str().is_empty() && !self.dirs.contains(p) => {
                bail!("Could not write script {}: no such directory", rel.display())
            }
            _ => {
                self.files.insert(rel.to_path_buf(), contents.to_owned());
                Ok(())
            }
        }
    }
}
