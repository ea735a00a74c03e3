//! K-mer length and sequence windowing.

use std::num::NonZeroUsize;

/// A validated, strictly positive k-mer length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of windows a sequence of `sequence_len` bases yields
    #[must_use]
    pub fn window_count(self, sequence_len: usize) -> usize {
        (sequence_len + 1).saturating_sub(self.get())
    }
}

impl From<NonZeroUsize> for KmerLength {
    fn from(length: NonZeroUsize) -> Self {
        Self(length)
    }
}

impl std::fmt::Display for KmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every contiguous window of length `k` in `sequence`, left to right.
///
/// A sequence of length `L >= k` yields exactly `L - k + 1` windows, so a
/// sequence exactly `k` long yields one; a shorter sequence yields none.
pub fn kmerize(sequence: &[u8], k: KmerLength) -> impl Iterator<Item = &[u8]> {
    sequence.windows(k.get())
}

/// Lowercase a sequence in place so that case never distinguishes k-mers
pub fn normalize_case(sequence: &mut [u8]) {
    sequence.make_ascii_lowercase();
}
