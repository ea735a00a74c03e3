//! # assembly-compare
//!
//! A library for comparing DNA sequence files by the k-mers they share.
//!
//! Each input FASTA file is cut into overlapping k-mers. For every distinct
//! k-mer the library records which input files contain it, as a [`Color`]:
//! a set of file positions. Grouping k-mers by color gives a histogram of
//! presence patterns, showing how much sequence is shared by every subset of
//! the inputs.
//!
//! ## Features
//!
//! - **Exact presence sets**: one bit per input file, merged losslessly as k-mers recur
//! - **Streaming FASTA**: multi-line records, gzip/bgzip input, bounded buffering for long records
//! - **Deterministic reports**: text or JSON, with stable row order
//!
//! ## Example
//!
//! ```rust,no_run
//! use assembly_compare::{ComparisonConfig, ComparisonEngine, Summary};
//! use assembly_compare::parsing::manifest::parse_manifest_file;
//! use assembly_compare::utils::validation::validate_kmer_length;
//! use std::path::Path;
//!
//! let files = parse_manifest_file(Path::new("assemblies.txt")).unwrap();
//! let config = ComparisonConfig::new(validate_kmer_length(31).unwrap());
//! let comparison = ComparisonEngine::new(config).run(files).unwrap();
//!
//! let summary = Summary::from_table(&comparison.files, &comparison.table).unwrap();
//! for row in &summary.colors {
//!     println!("{}: {} k-mers ({:.1}%)", row.color, row.count, row.percentage);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Colors, k-mer windowing, the file set and the k-mer table
//! - [`parsing`]: Manifest and FASTA parsers
//! - [`comparison`]: The comparison engine and summary
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod comparison;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use comparison::{Comparison, ComparisonConfig, ComparisonEngine, Summary};
pub use core::color::Color;
pub use core::file_set::FileSet;
pub use core::kmer::KmerLength;
pub use core::table::KmerTable;
