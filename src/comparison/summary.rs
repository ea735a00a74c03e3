use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::color::{Color, ColorError};
use crate::core::file_set::FileSet;
use crate::core::table::KmerTable;

/// One input file and the pattern its own k-mers would carry
#[derive(Debug, Clone, Serialize)]
pub struct FileRow {
    pub path: PathBuf,
    pub color: Color,
}

/// How many distinct k-mers share one exact color
#[derive(Debug, Clone, Serialize)]
pub struct ColorRow {
    pub color: Color,
    pub count: usize,
    /// Share of all distinct k-mers, 0-100
    pub percentage: f64,
}

/// Presence-pattern histogram over a finished [`KmerTable`]
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub files: Vec<FileRow>,
    /// Sorted so that patterns shared by earlier files come first
    pub colors: Vec<ColorRow>,
    /// Number of distinct k-mers
    pub total: usize,
}

impl Summary {
    /// Group the table by color and compute counts and percentages.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` only if `files` cannot produce a color for one of
    /// its own positions, which a well-formed [`FileSet`] never does.
    pub fn from_table(files: &FileSet, table: &KmerTable) -> Result<Self, ColorError> {
        let file_rows = files
            .iter()
            .enumerate()
            .map(|(index, path)| {
                files.color_of(index).map(|color| FileRow {
                    path: path.to_path_buf(),
                    color,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut counts: HashMap<&Color, usize> = HashMap::new();
        for color in table.colors() {
            *counts.entry(color).or_insert(0) += 1;
        }

        let total: usize = counts.values().sum();
        let mut colors: Vec<ColorRow> = counts
            .into_iter()
            .map(|(color, count)| ColorRow {
                color: color.clone(),
                count,
                percentage: percentage(count, total),
            })
            .collect();
        colors.sort_by(|a, b| a.color.cmp_presence(&b.color));

        Ok(Self {
            files: file_rows,
            colors,
            total,
        })
    }
}

/// `100 * count / total`, or zero when there is nothing to divide by
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
