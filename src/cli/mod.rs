//! Command-line interface for assembly-compare.
//!
//! This module implements the CLI using clap. The tool takes two positional
//! arguments, a manifest of FASTA files and a k-mer length, and prints the
//! presence-pattern report to stdout.
//!
//! ## Usage
//!
//! ```text
//! # Compare the assemblies listed in assemblies.txt using 31-mers
//! assembly-compare assemblies.txt 31
//!
//! # JSON output for scripting
//! assembly-compare assemblies.txt 31 --format json
//!
//! # Log per-file progress to stderr
//! assembly-compare assemblies.txt 31 --verbose
//! ```

use clap::Parser;

pub mod compare;

#[derive(Parser)]
#[command(name = "assembly-compare")]
#[command(version)]
#[command(about = "Compare FASTA assemblies by which k-mers they share")]
#[command(
    long_about = "assembly-compare k-merizes every FASTA file listed in a manifest and records, for each distinct k-mer, which files contain it.\n\nThe report lists each file's presence pattern, then every observed pattern with the number and percentage of distinct k-mers that carry it."
)]
#[command(
    after_help = "MANIFEST is a plain-text file with one FASTA path per line. Lines are trimmed and blank lines skipped.\nFASTA files may be gzip or bgzip compressed (.gz, .bgz)."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: compare::CompareArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
