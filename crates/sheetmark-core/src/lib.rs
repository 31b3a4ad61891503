//! # sheetmark-core
//!
//! Core data structures for the sheetmark converter.
//!
//! This crate provides the model that the XLSX parsers fill in and the
//! renderer reads:
//! - [`CellCoordinate`] and [`MergeSpan`] - A1 references and merged ranges
//! - [`RichText`] - Styled text runs from shared or inline strings
//! - [`StyleTable`] - Style index to [`StyleDescriptor`] lookup
//! - [`SharedStringTable`] - The workbook's shared string pool
//! - [`MergeMap`] - Merge classification of every coordinate
//! - [`SheetGrid`] - The sparse cell grid of one worksheet
//!
//! ## Example
//!
//! ```rust
//! use sheetmark_core::{CellCoordinate, MergeDisposition, MergeMap, MergeSpan};
//!
//! let span = MergeSpan::parse("A1:B1").unwrap();
//! let merges = MergeMap::from_spans(vec![span]);
//!
//! let b1 = CellCoordinate::parse("B1").unwrap();
//! assert!(matches!(merges.classify(b1), MergeDisposition::Covered(_)));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod merge;
pub mod shared_strings;
pub mod style;
pub mod text;

pub use cell::{CellCoordinate, CellKind, CellRecord, CellValue, MergeSpan};
pub use error::{Error, Result};
pub use grid::{GridBounds, SheetGrid};
pub use merge::{MergeDisposition, MergeMap};
pub use shared_strings::SharedStringTable;
pub use style::{StyleDescriptor, StyleTable};
pub use text::{RichText, StyledRun};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit, column `XFD`)
pub const MAX_COLUMNS: u32 = 16_384;
