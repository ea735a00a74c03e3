//! Parsers for the run's inputs.
//!
//! This module provides parsers for:
//!
//! - **Manifests**: Plain-text lists of input paths, one per line
//! - **FASTA files**: Plain or gzip/bgzip compressed sequence files, streamed
//!   record by record into sequences ready for k-merization
//!
//! ## Example
//!
//! ```rust,no_run
//! use assembly_compare::parsing::fasta::parse_fasta_file;
//! use assembly_compare::parsing::manifest::parse_manifest_file;
//! use assembly_compare::utils::validation::{validate_kmer_length, DEFAULT_FLUSH_THRESHOLD};
//! use std::path::Path;
//!
//! let files = parse_manifest_file(Path::new("assemblies.txt")).unwrap();
//! let k = validate_kmer_length(21).unwrap();
//!
//! for path in files.iter() {
//!     let stats = parse_fasta_file(path, k, DEFAULT_FLUSH_THRESHOLD, |sequence| {
//!         println!("{} bases", sequence.len());
//!     })
//!     .unwrap();
//!     println!("{}: {} records", path.display(), stats.records);
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod fasta;
pub mod manifest;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 on line {line} of {}", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },
}
