//! File-membership colors.
//!
//! A [`Color`] records which input files contain a k-mer. Each file owns one
//! position, given by its index in the [`FileSet`](crate::core::file_set::FileSet),
//! and a color is the set of positions that are switched on.
//!
//! Colors render as presence patterns, one digit per file in file order:
//!
//! | Files | Members | Pattern |
//! |-------|---------|---------|
//! | 2     | {0}     | `1-0`   |
//! | 2     | {1}     | `0-1`   |
//! | 2     | {0, 1}  | `1-1`   |
//! | 3     | {0, 2}  | `1-0-1` |

use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Separator placed between digits of a rendered presence pattern
pub const PATTERN_SEPARATOR: &str = "-";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("File index {index} is out of range for {file_count} input files")]
    IndexOutOfRange { index: usize, file_count: usize },
}

/// The set of input files in which a k-mer was observed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(FixedBitSet);

impl Color {
    /// A color with no members, sized for `file_count` files
    #[must_use]
    pub fn empty(file_count: usize) -> Self {
        Self(FixedBitSet::with_capacity(file_count))
    }

    /// Encode a single file index as a color.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::IndexOutOfRange` if `index >= file_count`.
    pub fn for_file(index: usize, file_count: usize) -> Result<Self, ColorError> {
        if index >= file_count {
            return Err(ColorError::IndexOutOfRange { index, file_count });
        }
        let mut bits = FixedBitSet::with_capacity(file_count);
        bits.insert(index);
        Ok(Self(bits))
    }

    /// Number of files this color has a position for
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.0.len()
    }

    /// Whether the file at `index` is a member. Out-of-range indices are never members.
    #[must_use]
    pub fn contains_file(&self, index: usize) -> bool {
        self.0.contains(index)
    }

    /// Number of member files
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.0.count_ones(..)
    }

    /// Indices of member files, ascending
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.ones()
    }

    /// Add every member of `other` to this color in place
    pub fn union_with(&mut self, other: &Self) {
        self.0.union_with(&other.0);
    }

    /// Union of two colors
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.union_with(other);
        merged
    }

    /// One presence flag per file, in file order
    #[must_use]
    pub fn decode(&self) -> Vec<bool> {
        (0..self.file_count()).map(|i| self.0.contains(i)).collect()
    }

    /// Render as a presence pattern such as `1-0-1`
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        self.decode()
            .into_iter()
            .map(|present| if present { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Ordering that places patterns shared by earlier files first (`1-1`, `1-0`, `0-1`)
    #[must_use]
    pub fn cmp_presence(&self, other: &Self) -> Ordering {
        other.decode().cmp(&self.decode())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(PATTERN_SEPARATOR))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render(PATTERN_SEPARATOR))
    }
}

/// Merge a file's color into an accumulated color.
///
/// If the file is not yet a member the result gains it; otherwise the
/// accumulated color is returned unchanged.
#[must_use]
pub fn merge(file_color: &Color, existing: &Color) -> Color {
    if file_color.members().all(|i| existing.contains_file(i)) {
        existing.clone()
    } else {
        existing.union(file_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_of(members: &[usize], file_count: usize) -> Color {
        let mut color = Color::empty(file_count);
        for &i in members {
            color.union_with(&Color::for_file(i, file_count).unwrap());
        }
        color
    }

    #[test]
    fn test_for_file_has_single_member() {
        for file_count in 1..=12 {
            for index in 0..file_count {
                let color = Color::for_file(index, file_count).unwrap();
                let decoded = color.decode();
                assert_eq!(decoded.len(), file_count);
                assert_eq!(decoded.iter().filter(|&&b| b).count(), 1);
                assert!(decoded[index]);
                assert!(color.contains_file(index));
            }
        }
    }

    #[test]
    fn test_for_file_out_of_range() {
        assert_eq!(
            Color::for_file(3, 3),
            Err(ColorError::IndexOutOfRange {
                index: 3,
                file_count: 3
            })
        );
        assert!(Color::for_file(0, 0).is_err());
    }

    #[test]
    fn test_render_follows_file_order() {
        assert_eq!(Color::for_file(0, 2).unwrap().render("-"), "1-0");
        assert_eq!(Color::for_file(1, 2).unwrap().render("-"), "0-1");
        assert_eq!(color_of(&[0, 2], 3).to_string(), "1-0-1");
        assert_eq!(Color::empty(3).to_string(), "0-0-0");
        assert_eq!(Color::for_file(0, 1).unwrap().to_string(), "1");
        assert_eq!(color_of(&[1], 3).render(""), "010");
    }

    #[test]
    fn test_merge_adds_missing_file() {
        let a = Color::for_file(0, 2).unwrap();
        let b = Color::for_file(1, 2).unwrap();
        let merged = merge(&b, &a);
        assert_eq!(merged.to_string(), "1-1");
        assert_eq!(merged.member_count(), 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let file_count = 5;
        for index in 0..file_count {
            let c = Color::for_file(index, file_count).unwrap();
            for x in [
                Color::empty(file_count),
                color_of(&[0], file_count),
                color_of(&[1, 3], file_count),
                color_of(&[0, 1, 2, 3, 4], file_count),
            ] {
                let once = merge(&c, &x);
                assert_eq!(merge(&c, &once), once);
            }
        }
    }

    #[test]
    fn test_merge_is_order_insensitive() {
        let file_count = 4;
        let empty = Color::empty(file_count);
        for a in 0..file_count {
            for b in 0..file_count {
                let ca = Color::for_file(a, file_count).unwrap();
                let cb = Color::for_file(b, file_count).unwrap();
                let ab = merge(&cb, &merge(&ca, &empty));
                let ba = merge(&ca, &merge(&cb, &empty));
                assert_eq!(ab, ba);
            }
        }
    }

    #[test]
    fn test_many_files_never_carry() {
        // Every position stays independent, even past what a decimal encoding could hold
        let file_count = 100;
        let mut color = Color::empty(file_count);
        for i in (0..file_count).step_by(3) {
            color = merge(&Color::for_file(i, file_count).unwrap(), &color);
            color = merge(&Color::for_file(i, file_count).unwrap(), &color);
        }
        let expected: Vec<usize> = (0..file_count).step_by(3).collect();
        assert_eq!(color.members().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_cmp_presence() {
        let mut colors = vec![color_of(&[1], 2), color_of(&[0, 1], 2), color_of(&[0], 2)];
        colors.sort_by(Color::cmp_presence);
        let rendered: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["1-1", "1-0", "0-1"]);
    }

    #[test]
    fn test_serialize_as_pattern() {
        let json = serde_json::to_string(&color_of(&[0, 2], 3)).unwrap();
        assert_eq!(json, "\"1-0-1\"");
    }
}
