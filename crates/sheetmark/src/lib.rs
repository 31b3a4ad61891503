//! # sheetmark
//!
//! Convert one worksheet of an XLSX workbook into a Markdown table.
//!
//! Cell text keeps its superscript (`^x^`), subscript (`~x~`) and indent
//! (`--> x`) formatting; merged ranges keep their text at the top-left cell
//! and leave the covered cells empty. Text found in the sheet's drawings is
//! listed in a `Drawings:` section above the table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetmark::{convert_file, ConvertOptions, SheetSelector};
//!
//! let options = ConvertOptions {
//!     sheet: SheetSelector::Name("Results".into()),
//!     ..Default::default()
//! };
//! let conversion = convert_file("report.xlsx", &options).unwrap();
//! print!("{}", conversion.to_markdown());
//! ```

pub mod markdown;
pub mod render;

use std::io::{Read, Seek};
use std::path::Path;

pub use render::{render, RenderedTable};

// Re-export core types
pub use sheetmark_core::{
    CellCoordinate, CellKind, CellRecord, CellValue, Error, GridBounds, MergeDisposition,
    MergeMap, MergeSpan, Result, RichText, SharedStringTable, SheetGrid, StyleDescriptor,
    StyleTable, StyledRun, MAX_COLUMNS, MAX_ROWS,
};

// Re-export I/O types
pub use sheetmark_xlsx::{
    DrawingNote, PartSource, SheetParts, SheetSelector, XlsxError, XlsxReader, XlsxResult,
    ZipPackage,
};

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Worksheet to convert
    pub sheet: SheetSelector,
    /// Read the sheet's drawings and list them above the table
    pub include_drawings: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelector::default(),
            include_drawings: true,
        }
    }
}

/// Result of converting one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Worksheet part the table was read from
    pub sheet_part: String,
    pub table: RenderedTable,
    pub drawings: Vec<DrawingNote>,
}

impl Conversion {
    /// Serialize as Markdown: the drawings section, then the table
    pub fn to_markdown(&self) -> String {
        markdown::to_markdown(&self.table, &self.drawings)
    }
}

/// Convert a worksheet from any part source
pub fn convert<S: PartSource>(source: &mut S, options: &ConvertOptions) -> XlsxResult<Conversion> {
    let parts = XlsxReader::read_sheet(source, &options.sheet)?;
    let table = render(
        &parts.grid,
        &parts.shared_strings,
        &parts.styles,
        &parts.merges,
    );

    let drawings = if options.include_drawings {
        XlsxReader::read_drawings(source, &parts.sheet_part)?
    } else {
        Vec::new()
    };

    log::debug!(
        "Converted {} into {} rows, {} drawings",
        parts.sheet_part,
        table.row_count(),
        drawings.len()
    );

    Ok(Conversion {
        sheet_part: parts.sheet_part,
        table,
        drawings,
    })
}

/// Convert a worksheet of an XLSX archive read from memory or a stream
pub fn convert_reader<R: Read + Seek>(
    reader: R,
    options: &ConvertOptions,
) -> XlsxResult<Conversion> {
    let mut package = ZipPackage::new(reader)?;
    convert(&mut package, options)
}

/// Convert a worksheet of an XLSX file
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> XlsxResult<Conversion> {
    let mut package = ZipPackage::open(path)?;
    convert(&mut package, options)
}
