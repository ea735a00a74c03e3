//! Parser for manifest files listing the inputs to compare.
//!
//! One path per line. Each line is trimmed; lines that are empty after
//! trimming are skipped. Paths are not checked here: a missing file is only
//! reported when it is opened for parsing.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::file_set::FileSet;
use crate::parsing::ParseError;

/// Parse a manifest file into an ordered [`FileSet`].
///
/// # Errors
///
/// Returns `ParseError::Open` if the manifest cannot be opened,
/// `ParseError::InvalidUtf8` if a line is not valid UTF-8, or
/// `ParseError::Read` on any other read failure.
pub fn parse_manifest_file(path: &Path) -> Result<FileSet, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest_reader(BufReader::new(file), path)
}

/// Parse manifest text from any buffered reader.
///
/// `origin` is only used to label errors.
///
/// # Errors
///
/// Returns `ParseError::InvalidUtf8` if a line is not valid UTF-8, or
/// `ParseError::Read` on any other read failure.
pub fn parse_manifest_reader<R: BufRead>(reader: R, origin: &Path) -> Result<FileSet, ParseError> {
    let mut paths = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| {
            if source.kind() == ErrorKind::InvalidData {
                ParseError::InvalidUtf8 {
                    path: origin.to_path_buf(),
                    line: index + 1,
                }
            } else {
                ParseError::Read {
                    path: origin.to_path_buf(),
                    source,
                }
            }
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        paths.push(PathBuf::from(trimmed));
    }

    debug!(
        "Manifest {} lists {} input files",
        origin.display(),
        paths.len()
    );
    Ok(FileSet::new(paths))
}
