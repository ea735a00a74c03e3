//! Centralized validation and helper functions.

use std::num::NonZeroUsize;

use crate::core::kmer::KmerLength;

/// Default number of buffered bases after which a long record is k-merized in pieces
pub const DEFAULT_FLUSH_THRESHOLD: usize = 1 << 20;

/// Validation error types for user-supplied parameters
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid k-mer length '{0}': expected a positive integer")]
    KmerLengthNotNumeric(String),
    #[error("Invalid k-mer length: must be at least 1")]
    KmerLengthZero,
    #[error("Invalid flush threshold '{0}': expected a positive integer")]
    FlushThresholdNotNumeric(String),
    #[error("Invalid flush threshold: must be at least 1 base")]
    FlushThresholdZero,
}

/// Validate a numeric k-mer length.
///
/// # Errors
///
/// Returns `ValidationError::KmerLengthZero` if `length` is zero.
pub fn validate_kmer_length(length: usize) -> Result<KmerLength, ValidationError> {
    NonZeroUsize::new(length)
        .map(KmerLength::from)
        .ok_or(ValidationError::KmerLengthZero)
}

/// Parse a k-mer length from command-line text.
///
/// Surrounding whitespace is ignored. Negative numbers, fractions and other
/// non-numeric input are rejected rather than coerced.
///
/// # Examples
///
/// ```
/// use assembly_compare::utils::validation::parse_kmer_length;
///
/// assert_eq!(parse_kmer_length("31").unwrap().get(), 31);
/// assert!(parse_kmer_length("0").is_err());
/// assert!(parse_kmer_length("-4").is_err());
/// assert!(parse_kmer_length("four").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::KmerLengthNotNumeric` for non-numeric input or
/// `ValidationError::KmerLengthZero` for zero.
pub fn parse_kmer_length(text: &str) -> Result<KmerLength, ValidationError> {
    let trimmed = text.trim();
    let length: usize = trimmed
        .parse()
        .map_err(|_| ValidationError::KmerLengthNotNumeric(trimmed.to_string()))?;
    validate_kmer_length(length)
}

/// Validate the flush threshold used when streaming long records.
///
/// # Errors
///
/// Returns `ValidationError::FlushThresholdZero` if `threshold` is zero.
pub fn validate_flush_threshold(threshold: usize) -> Result<usize, ValidationError> {
    if threshold == 0 {
        Err(ValidationError::FlushThresholdZero)
    } else {
        Ok(threshold)
    }
}

/// Parse a flush threshold from command-line text.
///
/// # Errors
///
/// Returns `ValidationError::FlushThresholdNotNumeric` for non-numeric input or
/// `ValidationError::FlushThresholdZero` for zero.
pub fn parse_flush_threshold(text: &str) -> Result<usize, ValidationError> {
    let trimmed = text.trim();
    let threshold: usize = trimmed
        .parse()
        .map_err(|_| ValidationError::FlushThresholdNotNumeric(trimmed.to_string()))?;
    validate_flush_threshold(threshold)
}

/// Threshold actually applied for a given k-mer length.
///
/// A buffer shorter than k cannot produce a window, so the threshold never drops below k.
#[must_use]
pub fn effective_flush_threshold(threshold: usize, kmer_length: KmerLength) -> usize {
    threshold.max(kmer_length.get())
}
