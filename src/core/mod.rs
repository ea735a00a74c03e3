//! Core data types for k-mer presence comparison.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Color`]: The set of input files in which a k-mer occurs
//! - [`KmerLength`] and [`kmerize`]: Validated window length and sequence windowing
//! - [`FileSet`]: The ordered input files; a file's index is its color position
//! - [`KmerTable`]: Distinct k-mers mapped to their accumulated colors
//!
//! ## Presence Patterns
//!
//! A color renders as one digit per input file, in file order:
//!
//! | Files | K-mer seen in | Pattern |
//! |-------|---------------|---------|
//! | A, B  | A only        | `1-0`   |
//! | A, B  | B only        | `0-1`   |
//! | A, B  | both          | `1-1`   |

pub mod color;
pub mod file_set;
pub mod kmer;
pub mod table;

pub use color::{merge, Color, ColorError};
pub use file_set::FileSet;
pub use kmer::{kmerize, KmerLength};
pub use table::KmerTable;
