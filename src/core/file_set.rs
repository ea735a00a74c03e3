use std::path::{Path, PathBuf};

use crate::core::color::{Color, ColorError};

/// The ordered list of input files.
///
/// A file's position is fixed when the set is built and is the position of
/// its bit in every [`Color`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<PathBuf>,
}

impl FileSet {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Paths in file order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// The single-member color of the file at `index`
    ///
    /// # Errors
    ///
    /// Returns `ColorError::IndexOutOfRange` if there is no file at `index`.
    pub fn color_of(&self, index: usize) -> Result<Color, ColorError> {
        Color::for_file(index, self.len())
    }
}
