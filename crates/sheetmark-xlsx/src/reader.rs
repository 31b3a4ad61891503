//! XLSX reader: loads every part needed to render one worksheet

use std::path::Path;

use crate::drawing::{read_drawing_notes, DrawingNote};
use crate::error::XlsxResult;
use crate::merges::read_merge_cells;
use crate::package::{PartSource, ZipPackage};
use crate::shared_strings::read_shared_strings;
use crate::styles::read_styles;
use crate::workbook::{resolve_sheet_part, SheetSelector};
use crate::worksheet::read_sheet_grid;
use sheetmark_core::{MergeMap, SharedStringTable, SheetGrid, StyleTable};

const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const STYLES_PART: &str = "xl/styles.xml";

/// Everything parsed for one worksheet
#[derive(Debug, Clone)]
pub struct SheetParts {
    /// Name of the worksheet part that was read
    pub sheet_part: String,
    pub grid: SheetGrid,
    pub merges: MergeMap,
    pub shared_strings: SharedStringTable,
    pub styles: StyleTable,
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read one worksheet from a file path
    pub fn read_file<P: AsRef<Path>>(path: P, selector: &SheetSelector) -> XlsxResult<SheetParts> {
        let mut package = ZipPackage::open(path)?;
        Self::read_sheet(&mut package, selector)
    }

    /// Read one worksheet and the workbook-level parts it depends on
    ///
    /// The worksheet part is required: a missing or malformed worksheet is
    /// an error naming the part. Shared strings and styles are optional and
    /// degrade to an empty table and the default style table.
    pub fn read_sheet<S: PartSource>(
        source: &mut S,
        selector: &SheetSelector,
    ) -> XlsxResult<SheetParts> {
        let shared_strings =
            Self::read_optional(source, SHARED_STRINGS_PART, read_shared_strings)?
                .unwrap_or_default();
        let styles = Self::read_optional(source, STYLES_PART, read_styles)?.unwrap_or_default();

        let sheet_part = resolve_sheet_part(source, selector)?;
        log::debug!("Reading worksheet {} for sheet {}", sheet_part, selector);

        let bytes = source.require_part(&sheet_part)?;
        let grid = read_sheet_grid(&bytes).map_err(|e| e.in_part(sheet_part.as_str()))?;
        let merges = read_merge_cells(&bytes).unwrap_or_else(|err| {
            log::warn!("Ignoring merge ranges of {}: {}", sheet_part, err);
            MergeMap::default()
        });

        Ok(SheetParts {
            sheet_part,
            grid,
            merges,
            shared_strings,
            styles,
        })
    }

    /// Read the drawings attached to a worksheet part
    pub fn read_drawings<S: PartSource>(
        source: &mut S,
        sheet_part: &str,
    ) -> XlsxResult<Vec<DrawingNote>> {
        read_drawing_notes(source, sheet_part)
    }

    /// Read and parse a part that may be absent or broken without failing the run
    fn read_optional<S, T, F>(source: &mut S, part: &str, parse: F) -> XlsxResult<Option<T>>
    where
        S: PartSource,
        F: FnOnce(&[u8]) -> XlsxResult<T>,
    {
        let Some(bytes) = source.read_part(part)? else {
            log::debug!("No {} in package", part);
            return Ok(None);
        };

        match parse(&bytes) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) => {
                log::warn!("{}", err.in_part(part));
                Ok(None)
            }
        }
    }
}
