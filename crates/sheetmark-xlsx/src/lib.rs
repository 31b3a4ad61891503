//! # sheetmark-xlsx
//!
//! XLSX (Office Open XML) part readers for sheetmark.
//!
//! Every reader takes the bytes of one package part and fills in a
//! [`sheetmark_core`] model. [`XlsxReader`] ties them together for a single
//! worksheet.

pub mod drawing;
pub mod error;
pub mod merges;
pub mod package;
pub mod reader;
pub mod relationships;
pub mod shared_strings;
pub mod styles;
pub mod workbook;
pub mod worksheet;

mod rich_text;

pub use drawing::{read_drawing_notes, read_drawing_text, DrawingNote};
pub use error::{XlsxError, XlsxResult};
pub use merges::read_merge_cells;
pub use package::{PartSource, ZipPackage};
pub use reader::{SheetParts, XlsxReader};
pub use shared_strings::read_shared_strings;
pub use styles::read_styles;
pub use workbook::{resolve_sheet_part, SheetSelector};
pub use worksheet::read_sheet_grid;
