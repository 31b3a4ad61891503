//! Parsed cell records

use super::CellCoordinate;
use crate::text::RichText;

/// The typed payload of a cell, dispatched once from the `t` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Numeric value (`t="n"` or no type), raw text as stored
    Number(String),
    /// Shared-string reference (`t="s"`), raw index text as stored
    SharedString(String),
    /// Inline rich text (`t="inlineStr"`)
    InlineString(RichText),
    /// Boolean (`t="b"`), raw `0`/`1` as stored
    Boolean(String),
    /// Cached text result of a formula (`t="str"`)
    Text(String),
    /// Error value (`t="e"`), e.g. `#DIV/0!`
    Error(String),
    /// Cell element present without a value
    Empty,
}

/// Tag of a [`CellValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Number,
    SharedString,
    InlineString,
    Boolean,
    Text,
    Error,
    Empty,
}

impl CellValue {
    /// Get the type tag
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Number(_) => CellKind::Number,
            CellValue::SharedString(_) => CellKind::SharedString,
            CellValue::InlineString(_) => CellKind::InlineString,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Error(_) => CellKind::Error,
            CellValue::Empty => CellKind::Empty,
        }
    }

    /// Raw value text as stored in `<v>`; `None` for inline strings and empty cells
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            CellValue::Number(v)
            | CellValue::SharedString(v)
            | CellValue::Boolean(v)
            | CellValue::Text(v)
            | CellValue::Error(v) => Some(v),
            CellValue::InlineString(_) | CellValue::Empty => None,
        }
    }
}

/// One cell of the sparse grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    pub coordinate: CellCoordinate,
    pub value: CellValue,
    /// Index into the style table (`s` attribute, 0 when absent)
    pub style_index: u32,
}

impl CellRecord {
    pub fn new(coordinate: CellCoordinate, value: CellValue, style_index: u32) -> Self {
        Self {
            coordinate,
            value,
            style_index,
        }
    }

    /// Get the type tag of the value
    pub fn kind(&self) -> CellKind {
        self.value.kind()
    }
}
