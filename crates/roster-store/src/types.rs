//! Row and column addressing for the backing table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based physical row address in the backing table.
///
/// Row 1 is reserved for the header row. A `StoreRow` is only meaningful
/// against the load it was computed from: physical deletions by other
/// sessions shift every later row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StoreRow(pub usize);

impl StoreRow {
    /// 0-based index into a raw row vector.
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "store rows are 1-based");
        self.0 - 1
    }
}

impl fmt::Display for StoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// 0-based column index, addressable by spreadsheet letter (A..Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(usize);

impl Column {
    /// Column A, the first cell of a row.
    pub const A: Column = Column(0);

    pub fn new(index: usize) -> Self {
        Column(index)
    }

    /// Parse a single spreadsheet column letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| Column(upper as usize - 'A' as usize))
    }

    pub fn letter(self) -> char {
        debug_assert!(self.0 < 26, "single-letter columns only");
        (b'A' + self.0 as u8) as char
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.letter())
    }
}
