use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::color::ColorError;
use crate::core::file_set::FileSet;
use crate::core::kmer::{kmerize, KmerLength};
use crate::core::table::KmerTable;
use crate::parsing::fasta::{is_fasta_file, parse_fasta_file, ParseStats};
use crate::parsing::ParseError;
use crate::utils::validation::DEFAULT_FLUSH_THRESHOLD;

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Input file #{} ({}) could not be parsed: {source}", index + 1, path.display())]
    Input {
        index: usize,
        path: PathBuf,
        source: ParseError,
    },

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Configuration for the comparison engine
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Length of the k-mers extracted from every sequence
    pub kmer_length: KmerLength,
    /// Buffered bases after which a long record is k-merized in pieces
    pub flush_threshold: usize,
}

impl ComparisonConfig {
    #[must_use]
    pub fn new(kmer_length: KmerLength) -> Self {
        Self {
            kmer_length,
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_flush_threshold(mut self, flush_threshold: usize) -> Self {
        self.flush_threshold = flush_threshold;
        self
    }
}

/// Everything produced by one run over the input files
#[derive(Debug, Clone)]
pub struct Comparison {
    pub files: FileSet,
    pub table: KmerTable,
    /// Parse counts per input file, in file order
    pub file_stats: Vec<ParseStats>,
    pub kmer_length: KmerLength,
}

/// Builds a [`KmerTable`] from every file of a [`FileSet`], one file at a time
pub struct ComparisonEngine {
    config: ComparisonConfig,
}

impl ComparisonEngine {
    #[must_use]
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Parse every file in order and collect its k-mers into one table.
    ///
    /// Stops at the first file that cannot be read; nothing is returned for
    /// a partially processed set.
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::Input` naming the first file that could not
    /// be opened or read.
    pub fn run(&self, files: FileSet) -> Result<Comparison, ComparisonError> {
        if files.is_empty() {
            warn!("No input files listed; the report will be empty");
        }

        let mut table = KmerTable::new();
        let mut file_stats = Vec::with_capacity(files.len());

        for index in 0..files.len() {
            let stats = self.add_file(&mut table, &files, index)?;
            file_stats.push(stats);
        }

        info!(
            "Collected {} distinct {}-mers from {} files",
            table.len(),
            self.config.kmer_length,
            files.len()
        );

        Ok(Comparison {
            files,
            table,
            file_stats,
            kmer_length: self.config.kmer_length,
        })
    }

    /// Add the k-mers of the file at `index` to `table`, tagged with that file's color.
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::Color` if `index` is not in `files`, or
    /// `ComparisonError::Input` if the file cannot be parsed.
    pub fn add_file(
        &self,
        table: &mut KmerTable,
        files: &FileSet,
        index: usize,
    ) -> Result<ParseStats, ComparisonError> {
        let color = files.color_of(index)?;
        let path = files
            .path(index)
            .ok_or(ColorError::IndexOutOfRange {
                index,
                file_count: files.len(),
            })?;

        if !is_fasta_file(path) {
            warn!(
                "{} has no FASTA extension; parsing it as FASTA anyway",
                path.display()
            );
        }

        let k = self.config.kmer_length;
        let before = table.len();
        let stats = parse_fasta_file(path, k, self.config.flush_threshold, |sequence| {
            for kmer in kmerize(sequence, k) {
                table.add_observation(kmer, &color);
            }
        })
        .map_err(|source| ComparisonError::Input {
            index,
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "{}: {} records, {} bases, {} k-mers ({} new)",
            path.display(),
            stats.records,
            stats.bases,
            stats.kmers,
            table.len() - before
        );
        if stats.kmers == 0 {
            warn!(
                "{} contributed no {}-mers (no record is at least {} bases long)",
                path.display(),
                k,
                k
            );
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_kmer_length;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fasta(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(content.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    fn engine(k: usize) -> ComparisonEngine {
        ComparisonEngine::new(ComparisonConfig::new(validate_kmer_length(k).unwrap()))
    }

    #[test]
    fn test_two_file_colors() {
        let a = fasta(">seq1\nACGTACGT\n");
        let b = fasta(">seq1\nACGTTTTT\n");
        let files = FileSet::new([a.path(), b.path()]);

        let comparison = engine(4).run(files).unwrap();
        let table = &comparison.table;

        assert_eq!(table.len(), 7);
        assert_eq!(table.get(b"acgt").unwrap().to_string(), "1-1");
        for kmer in [b"cgta", b"gtac", b"tacg"] {
            assert_eq!(table.get(kmer).unwrap().to_string(), "1-0");
        }
        for kmer in [b"cgtt", b"gttt", b"tttt"] {
            assert_eq!(table.get(kmer).unwrap().to_string(), "0-1");
        }
        assert_eq!(comparison.file_stats[0].kmers, 5);
        assert_eq!(comparison.file_stats[1].kmers, 5);
    }

    #[test]
    fn test_case_does_not_split_kmers() {
        let a = fasta(">x\nACGT\n");
        let b = fasta(">y\nacgt\n");
        let files = FileSet::new([a.path(), b.path()]);

        let comparison = engine(4).run(files).unwrap();
        assert_eq!(comparison.table.len(), 1);
        assert_eq!(comparison.table.get(b"acgt").unwrap().to_string(), "1-1");
    }

    #[test]
    fn test_kmer_length_equal_to_shortest_sequence() {
        let a = fasta(">short\nACG\n>long\nACGTT\n");
        let files = FileSet::new([a.path()]);

        let comparison = engine(3).run(files).unwrap();
        // acg (from both records), cgt, gtt
        assert_eq!(comparison.table.len(), 3);
        assert_eq!(comparison.file_stats[0].kmers, 1 + 3);
    }

    #[test]
    fn test_flush_threshold_does_not_change_table() {
        let a = fasta(">a\nACGGTCATTG\nCAAGTCCAGT\nTTGACCA\n");
        let b = fasta(">b\nGTCATTGCAAG\n>c\nCCAGTTTGA\n");
        let files = FileSet::new([a.path(), b.path()]);
        let k = validate_kmer_length(5).unwrap();

        let whole = ComparisonEngine::new(ComparisonConfig::new(k))
            .run(files.clone())
            .unwrap();
        let chunked = ComparisonEngine::new(ComparisonConfig::new(k).with_flush_threshold(6))
            .run(files)
            .unwrap();

        assert_eq!(whole.table.len(), chunked.table.len());
        for (kmer, color) in whole.table.iter() {
            assert_eq!(chunked.table.get(kmer), Some(color));
        }
    }

    #[test]
    fn test_missing_file_aborts() {
        let a = fasta(">a\nACGT\n");
        let files = FileSet::new([a.path(), std::path::Path::new("/nonexistent/b.fa")]);

        let err = engine(2).run(files).unwrap_err();
        match err {
            ComparisonError::Input { index, .. } => assert_eq!(index, 1),
            other => panic!("expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_set() {
        let comparison = engine(4).run(FileSet::default()).unwrap();
        assert!(comparison.table.is_empty());
        assert!(comparison.file_stats.is_empty());
    }

    #[test]
    fn test_add_file_out_of_range() {
        let mut table = KmerTable::new();
        let result = engine(4).add_file(&mut table, &FileSet::default(), 0);
        assert!(matches!(result, Err(ComparisonError::Color(_))));
    }
}
