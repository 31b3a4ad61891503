//! Cell coordinate and merge span types

use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell coordinate parsed from an A1-style reference
///
/// Both `row` and `column` are 1-based, exactly as they appear in the sheet
/// XML: `"AA12"` is column 27, row 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoordinate {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, Z=26, AA=27, ..., XFD=16384)
    pub column: u32,
}

impl CellCoordinate {
    /// Create a new coordinate from 1-based row and column numbers
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Parse a cell coordinate from A1-style notation
    ///
    /// The reference must be one or more uppercase letters followed by a row
    /// number without leading zeros. Absolute markers (`$`) and lowercase
    /// letters are rejected: cell references inside sheet XML never carry
    /// them.
    ///
    /// # Examples
    /// ```
    /// use sheetmark_core::CellCoordinate;
    ///
    /// let coord = CellCoordinate::parse("AA12").unwrap();
    /// assert_eq!(coord.column, 27);
    /// assert_eq!(coord.row, 12);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();

        let letters_end = bytes
            .iter()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(bytes.len());

        if letters_end == 0 {
            return Err(Error::InvalidCoordinate(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let column = Self::letters_to_column(&s[..letters_end])?;

        let row_str = &s[letters_end..];
        if row_str.is_empty() {
            return Err(Error::InvalidCoordinate(format!(
                "no row number in '{}'",
                s
            )));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) || row_str.starts_with('0') {
            return Err(Error::InvalidCoordinate(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidCoordinate(format!("invalid row number in '{}'", s)))?;

        if row > MAX_ROWS {
            return Err(Error::InvalidCoordinate(format!(
                "row {} exceeds {} in '{}'",
                row, MAX_ROWS, s
            )));
        }

        Ok(Self { row, column })
    }

    /// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
    pub fn column_to_letters(column: u32) -> String {
        let mut result = Vec::new();
        let mut n = column;

        while n > 0 {
            n -= 1;
            result.push(b'A' + (n % 26) as u8);
            n /= 26;
        }

        result.reverse();
        String::from_utf8(result).unwrap_or_default()
    }

    /// Convert uppercase column letters to a 1-based column number
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidCoordinate("empty column letters".into()));
        }

        let mut column: u32 = 0;
        for c in letters.bytes() {
            if !c.is_ascii_uppercase() {
                return Err(Error::InvalidCoordinate(format!(
                    "invalid column letter '{}'",
                    c as char
                )));
            }
            column = column * 26 + u32::from(c - b'A' + 1);
            if column > MAX_COLUMNS {
                return Err(Error::InvalidCoordinate(format!(
                    "column '{}' exceeds XFD",
                    letters
                )));
            }
        }

        Ok(column)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.column), self.row)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular merged range (e.g., "A1:B10")
///
/// Corners are normalized on construction so that `top_left` is never below
/// or to the right of `bottom_right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeSpan {
    /// Anchor (top-left) coordinate
    pub top_left: CellCoordinate,
    /// Bottom-right coordinate
    pub bottom_right: CellCoordinate,
}

impl MergeSpan {
    /// Create a new span, normalizing the corners
    pub fn new(a: CellCoordinate, b: CellCoordinate) -> Self {
        Self {
            top_left: CellCoordinate::new(a.row.min(b.row), a.column.min(b.column)),
            bottom_right: CellCoordinate::new(a.row.max(b.row), a.column.max(b.column)),
        }
    }

    /// Parse a span from `A1:B10` notation. A single reference is a 1x1 span.
    pub fn parse(s: &str) -> Result<Self> {
        let wrap = |e: Error| Error::InvalidRange(format!("'{}': {}", s, e));

        match s.split_once(':') {
            Some((start, end)) => {
                let start = CellCoordinate::parse(start).map_err(wrap)?;
                let end = CellCoordinate::parse(end).map_err(wrap)?;
                Ok(Self::new(start, end))
            }
            None => {
                let single = CellCoordinate::parse(s).map_err(wrap)?;
                Ok(Self::new(single, single))
            }
        }
    }

    /// The anchor coordinate, the only cell of the span that carries content
    pub fn anchor(&self) -> CellCoordinate {
        self.top_left
    }

    /// Check if a coordinate is within this span
    pub fn contains(&self, coord: CellCoordinate) -> bool {
        coord.row >= self.top_left.row
            && coord.row <= self.bottom_right.row
            && coord.column >= self.top_left.column
            && coord.column <= self.bottom_right.column
    }

    /// Check if this span overlaps with another
    pub fn overlaps(&self, other: &MergeSpan) -> bool {
        self.top_left.row <= other.bottom_right.row
            && self.bottom_right.row >= other.top_left.row
            && self.top_left.column <= other.bottom_right.column
            && self.bottom_right.column >= other.top_left.column
    }

    /// Iterate over all coordinates in the span (row by row)
    pub fn coordinates(&self) -> impl Iterator<Item = CellCoordinate> {
        let (top, bottom) = (self.top_left.row, self.bottom_right.row);
        let (left, right) = (self.top_left.column, self.bottom_right.column);
        (top..=bottom)
            .flat_map(move |row| (left..=right).map(move |col| CellCoordinate::new(row, col)))
    }

    /// Number of cells covered by the span
    pub fn cell_count(&self) -> u64 {
        u64::from(self.bottom_right.row - self.top_left.row + 1)
            * u64::from(self.bottom_right.column - self.top_left.column + 1)
    }
}

impl fmt::Display for MergeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top_left == self.bottom_right {
            write!(f, "{}", self.top_left)
        } else {
            write!(f, "{}:{}", self.top_left, self.bottom_right)
        }
    }
}
