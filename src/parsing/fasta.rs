//! Streaming FASTA parser.
//!
//! Lines starting with `>` separate records; every other line is sequence
//! data, concatenated within its record with whitespace dropped. Each
//! finished record is handed to a caller-supplied sink as one lowercase
//! sequence, so k-mers never span two records. Header text itself is ignored.
//!
//! Input is consumed in reader-sized chunks, not whole lines, and long
//! records are not held in memory whole even when written on a single line:
//! once the buffer reaches the flush threshold it is emitted and only its
//! last `k - 1` bases are kept. Every window start is still emitted exactly
//! once, so the k-mers produced are the same as for the unsplit record.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::Serialize;

use crate::core::kmer::{normalize_case, KmerLength};
use crate::parsing::ParseError;
use crate::utils::validation::effective_flush_threshold;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Counts gathered while parsing one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Records seen, including an unlabelled one before the first header
    pub records: usize,
    /// Sequence bases read
    pub bases: u64,
    /// K-mer windows handed to the sink (not necessarily distinct)
    pub kmers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Idle,
    Accumulating,
}

/// Byte-driven state machine that turns FASTA text into sequences.
///
/// Feed input with [`push_bytes`](Self::push_bytes) in chunks of any size,
/// including chunks that end mid-line, and call [`finish`](Self::finish) at
/// end of input to flush the last record. The record buffer never grows past
/// the flush threshold, even when a whole chromosome sits on one line.
#[derive(Debug)]
pub struct RecordAssembler {
    state: RecordState,
    buffer: Vec<u8>,
    at_line_start: bool,
    in_header: bool,
    kmer_length: KmerLength,
    flush_threshold: usize,
    stats: ParseStats,
}

impl RecordAssembler {
    #[must_use]
    pub fn new(kmer_length: KmerLength, flush_threshold: usize) -> Self {
        Self {
            state: RecordState::Idle,
            buffer: Vec::new(),
            at_line_start: true,
            in_header: false,
            kmer_length,
            flush_threshold: effective_flush_threshold(flush_threshold, kmer_length),
            stats: ParseStats::default(),
        }
    }

    /// Consume a chunk of raw input
    pub fn push_bytes<F: FnMut(&[u8])>(&mut self, bytes: &[u8], sink: &mut F) {
        for (i, segment) in bytes.split(|&b| b == b'\n').enumerate() {
            if i > 0 {
                self.at_line_start = true;
                self.in_header = false;
            }
            self.push_segment(segment, sink);
        }
    }

    /// Flush the final record and return the counts for the whole input
    pub fn finish<F: FnMut(&[u8])>(mut self, sink: &mut F) -> ParseStats {
        self.flush_record(sink);
        self.stats
    }

    /// Handle part of one line, without its newline
    fn push_segment<F: FnMut(&[u8])>(&mut self, segment: &[u8], sink: &mut F) {
        if segment.is_empty() {
            return;
        }

        if self.at_line_start {
            self.at_line_start = false;
            if segment.first() == Some(&b'>') {
                self.flush_record(sink);
                self.state = RecordState::Accumulating;
                self.stats.records += 1;
                self.in_header = true;
            }
        }
        if self.in_header {
            return;
        }

        for piece in segment
            .split(u8::is_ascii_whitespace)
            .filter(|piece| !piece.is_empty())
        {
            self.push_sequence(piece, sink);
        }
    }

    fn push_sequence<F: FnMut(&[u8])>(&mut self, mut data: &[u8], sink: &mut F) {
        // Sequence before any header forms a record of its own
        if self.state == RecordState::Idle {
            self.state = RecordState::Accumulating;
            self.stats.records += 1;
        }
        self.stats.bases += data.len() as u64;

        while !data.is_empty() {
            let room = self.flush_threshold.saturating_sub(self.buffer.len()).max(1);
            let (head, rest) = data.split_at(room.min(data.len()));
            let start = self.buffer.len();
            self.buffer.extend_from_slice(head);
            normalize_case(&mut self.buffer[start..]);

            if self.buffer.len() >= self.flush_threshold {
                self.flush_partial(sink);
            }
            data = rest;
        }
    }

    fn flush_record<F: FnMut(&[u8])>(&mut self, sink: &mut F) {
        self.emit(sink);
        self.buffer.clear();
        self.state = RecordState::Idle;
    }

    fn flush_partial<F: FnMut(&[u8])>(&mut self, sink: &mut F) {
        self.emit(sink);
        let keep = self.kmer_length.get() - 1;
        let consumed = self.buffer.len().saturating_sub(keep);
        self.buffer.drain(..consumed);
    }

    fn emit<F: FnMut(&[u8])>(&mut self, sink: &mut F) {
        let windows = self.kmer_length.window_count(self.buffer.len());
        if windows > 0 {
            self.stats.kmers += windows as u64;
            sink(self.buffer.as_slice());
        }
    }
}

/// Parse a FASTA file, handing each sequence to `sink`.
///
/// Gzip and bgzip input is detected from the extension and decompressed
/// on the fly.
///
/// # Errors
///
/// Returns `ParseError::Open` if the file cannot be opened or
/// `ParseError::Read` if reading fails part way through.
pub fn parse_fasta_file<F: FnMut(&[u8])>(
    path: &Path,
    kmer_length: KmerLength,
    flush_threshold: usize,
    sink: F,
) -> Result<ParseStats, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let result = if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(reader, kmer_length, flush_threshold, sink)
    } else {
        parse_fasta_reader(BufReader::new(file), kmer_length, flush_threshold, sink)
    };

    result.map_err(|e| match e {
        ParseError::Io(source) => ParseError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse FASTA text from any buffered reader, handing each sequence to `sink`.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails.
pub fn parse_fasta_reader<R: BufRead, F: FnMut(&[u8])>(
    mut reader: R,
    kmer_length: KmerLength,
    flush_threshold: usize,
    mut sink: F,
) -> Result<ParseStats, ParseError> {
    let mut assembler = RecordAssembler::new(kmer_length, flush_threshold);

    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        let consumed = chunk.len();
        assembler.push_bytes(chunk, &mut sink);
        reader.consume(consumed);
    }

    Ok(assembler.finish(&mut sink))
}
