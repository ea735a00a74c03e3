//! K-mer presence comparison across input files.
//!
//! This module provides the run-level functionality:
//!
//! - [`ComparisonEngine`]: Parses every input file in order into one [`KmerTable`](crate::core::KmerTable)
//! - [`Summary`]: Groups the finished table by color with counts and percentages
//!
//! ## Algorithm
//!
//! 1. Each file gets a single-member color from its position in the file set
//! 2. Every record of the file is k-merized; records never share a k-mer window
//! 3. Each k-mer is added to the table with the file's color, merging into
//!    the color already recorded for that k-mer
//! 4. After the last file, colors are counted to give the presence histogram
//!
//! ## Example
//!
//! ```rust,no_run
//! use assembly_compare::{ComparisonConfig, ComparisonEngine, FileSet, Summary};
//! use assembly_compare::utils::validation::validate_kmer_length;
//!
//! let files = FileSet::new(["a.fa", "b.fa"]);
//! let config = ComparisonConfig::new(validate_kmer_length(4).unwrap());
//! let comparison = ComparisonEngine::new(config).run(files).unwrap();
//!
//! let summary = Summary::from_table(&comparison.files, &comparison.table).unwrap();
//! for row in &summary.colors {
//!     println!("{}\t{}\t{:.2}", row.color, row.count, row.percentage);
//! }
//! ```

pub mod engine;
pub mod summary;

pub use engine::{Comparison, ComparisonConfig, ComparisonEngine, ComparisonError};
pub use summary::{ColorRow, FileRow, Summary};
