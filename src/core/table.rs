use std::collections::HashMap;

use crate::core::color::{merge, Color};

/// Accumulated colors for every distinct k-mer seen so far
#[derive(Debug, Clone, Default)]
pub struct KmerTable {
    colors: HashMap<Vec<u8>, Color>,
}

impl KmerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `kmer` was seen in the file whose color is `file_color`.
    ///
    /// This is the only way colors enter the table: a new k-mer takes the
    /// file's color, a known one has the file merged into its color.
    pub fn add_observation(&mut self, kmer: &[u8], file_color: &Color) {
        if let Some(current) = self.colors.get_mut(kmer) {
            *current = merge(file_color, current);
        } else {
            self.colors.insert(kmer.to_vec(), file_color.clone());
        }
    }

    /// Number of distinct k-mers
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, kmer: &[u8]) -> Option<&Color> {
        self.colors.get(kmer)
    }

    /// All k-mers with their colors, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Color)> {
        self.colors.iter().map(|(kmer, color)| (kmer.as_slice(), color))
    }

    /// All colors, one per distinct k-mer
    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.colors.values()
    }
}
