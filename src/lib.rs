//! Sample config tools
//!
//! Helpers for a paired-end sequencing workflow driven by a YAML sample
//! config (`sample_dict: {sample: {pair: [folder, read1, read2]}}`).
//!
//! This library provides shared functionality for:
//! - Loading and walking the sample config
//! - Checking that the configured folders and read files exist
//! - Generating SLURM job scripts for fastp and FastQC
//! - Listing the folders a config refers to

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod check;
pub mod cli;
pub mod config;
pub mod fastp;
pub mod fastqc;
pub mod folders;
pub mod output;
pub mod slurm;

pub use config::{PairFiles, ReadPair, SampleConfig};
pub use output::{DirSink, MemorySink, ScriptSink};
