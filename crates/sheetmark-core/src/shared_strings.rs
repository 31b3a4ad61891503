//! Shared string table

use crate::error::{Error, Result};
use crate::text::RichText;

/// The workbook's shared string pool, addressed by 0-based index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStringTable {
    strings: Vec<RichText>,
}

impl SharedStringTable {
    /// Create a table from entries in source order
    pub fn new(strings: Vec<RichText>) -> Self {
        Self { strings }
    }

    /// Get an entry by index
    pub fn get(&self, index: usize) -> Result<&RichText> {
        self.strings.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.strings.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over entries in index order
    pub fn iter(&self) -> impl Iterator<Item = &RichText> {
        self.strings.iter()
    }
}
