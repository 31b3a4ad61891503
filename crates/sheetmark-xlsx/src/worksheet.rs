//! Worksheet (xl/worksheets/sheetN.xml) cell grid reader

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use crate::rich_text::{decode_excel_escapes, read_rich_text};
use sheetmark_core::{
    CellCoordinate, CellRecord, CellValue, MergeSpan, RichText, SheetGrid, MAX_COLUMNS, MAX_ROWS,
};

/// Attributes and payload of the `<c>` element being read
#[derive(Debug, Default)]
struct PendingCell {
    /// `None` when the cell reference was malformed and the cell is skipped
    coordinate: Option<CellCoordinate>,
    cell_type: Option<String>,
    style_index: u32,
    value: Option<String>,
    inline: Option<RichText>,
}

/// Position tracking for cells whose `r` attribute is omitted
#[derive(Debug, Default)]
struct Cursor {
    row: u32,
    column: u32,
}

/// Parse the cell grid of a worksheet part
///
/// Cells are materialized only when the part contains a `<c>` element for
/// them. The grid's bounds cover every cell and every merge range corner;
/// `<dimension>` is recorded as a hint and never trusted for the bounds.
pub fn read_sheet_grid(bytes: &[u8]) -> XlsxResult<SheetGrid> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut grid = SheetGrid::new();
    let mut cursor = Cursor::default();
    let mut current: Option<PendingCell> = None;
    let mut in_value = false;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => start_row(&e, &mut cursor),
                b"c" => current = Some(start_cell(&e, &mut cursor)),
                b"v" if current.is_some() => in_value = true,
                b"is" => {
                    let text = read_rich_text(&mut xml_reader, b"is")?;
                    if let Some(cell) = current.as_mut() {
                        cell.inline = Some(text);
                    }
                }
                b"mergeCell" => include_merge(&e, &mut grid),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => start_row(&e, &mut cursor),
                b"c" => finish_cell(start_cell(&e, &mut cursor), &mut grid),
                b"mergeCell" => include_merge(&e, &mut grid),
                b"dimension" => read_dimension(&e, &mut grid),
                _ => {}
            },
            Event::Text(e) if in_value => {
                if let Some(cell) = current.as_mut() {
                    cell.value
                        .get_or_insert_with(String::new)
                        .push_str(&e.unescape()?);
                }
            }
            Event::CData(e) if in_value => {
                if let Some(cell) = current.as_mut() {
                    cell.value
                        .get_or_insert_with(String::new)
                        .push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                b"c" => {
                    if let Some(cell) = current.take() {
                        finish_cell(cell, &mut grid);
                    }
                    in_value = false;
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(hint) = grid.dimension_hint() {
        if hint.bottom_right.row != grid.max_row() || hint.bottom_right.column != grid.max_column()
        {
            log::debug!(
                "Declared dimension {} differs from content bounds {}x{}",
                hint,
                grid.max_row(),
                grid.max_column()
            );
        }
    }

    log::debug!(
        "Read {} cells, bounds {}x{}",
        grid.len(),
        grid.max_row(),
        grid.max_column()
    );
    Ok(grid)
}

fn start_row(e: &BytesStart<'_>, cursor: &mut Cursor) {
    let mut row_num: Option<u32> = None;
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"r" {
            row_num = attr
                .unescape_value()
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|r| (1..=MAX_ROWS).contains(r));
            if row_num.is_none() {
                log::warn!("Ignoring invalid row number; using the next row");
            }
        }
    }
    // Past MAX_ROWS the implied cells of this row are skipped
    cursor.row = row_num.unwrap_or_else(|| cursor.row.saturating_add(1).min(MAX_ROWS + 1));
    cursor.column = 0;
}

fn start_cell(e: &BytesStart<'_>, cursor: &mut Cursor) -> PendingCell {
    let mut cell_ref: Option<String> = None;
    let mut cell = PendingCell::default();

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => {
                cell_ref = attr.unescape_value().ok().map(|s| s.to_string());
            }
            b"t" => {
                cell.cell_type = attr.unescape_value().ok().map(|s| s.to_string());
            }
            b"s" => {
                cell.style_index = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.parse::<u32>().ok())
                    .unwrap_or(0);
            }
            _ => {}
        }
    }

    cell.coordinate = match cell_ref {
        Some(cell_ref) => match CellCoordinate::parse(&cell_ref) {
            Ok(coord) => Some(coord),
            Err(err) => {
                log::warn!("Skipping cell: {}", err);
                None
            }
        },
        None => {
            // Position implied by the previous cell of the row
            let column = cursor.column + 1;
            if column > MAX_COLUMNS {
                log::warn!("Skipping cell past column XFD in row {}", cursor.row);
                None
            } else if cursor.row > MAX_ROWS {
                log::warn!("Skipping cell past row {}", MAX_ROWS);
                None
            } else {
                Some(CellCoordinate::new(cursor.row.max(1), column))
            }
        }
    };

    if let Some(coord) = cell.coordinate {
        cursor.row = coord.row;
        cursor.column = coord.column;
    }

    cell
}

fn finish_cell(cell: PendingCell, grid: &mut SheetGrid) {
    let Some(coordinate) = cell.coordinate else {
        return;
    };

    let value = match (cell.cell_type.as_deref(), cell.inline, cell.value) {
        (_, Some(inline), _) => CellValue::InlineString(inline),
        (_, None, None) => CellValue::Empty,
        (Some("s"), None, Some(v)) => CellValue::SharedString(v),
        (Some("inlineStr"), None, Some(v)) => {
            CellValue::InlineString(RichText::plain(decode_excel_escapes(&v).into_owned()))
        }
        (Some("b"), None, Some(v)) => CellValue::Boolean(v),
        (Some("e"), None, Some(v)) => CellValue::Error(v),
        (Some("str"), None, Some(v)) => CellValue::Text(decode_excel_escapes(&v).into_owned()),
        (None | Some("n"), None, Some(v)) => CellValue::Number(v),
        // Unknown type (e.g. ISO dates `t="d"`) - pass the raw text through
        (Some(_), None, Some(v)) => CellValue::Text(v),
    };

    let record = CellRecord::new(coordinate, value, cell.style_index);
    if grid.insert(record).is_some() {
        log::warn!("Duplicate cell {}; keeping the later one", coordinate);
    }
}

fn include_merge(e: &BytesStart<'_>, grid: &mut SheetGrid) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"ref" {
            if let Some(span) = attr
                .unescape_value()
                .ok()
                .and_then(|s| MergeSpan::parse(&s).ok())
            {
                grid.include_span(&span);
            }
        }
    }
}

fn read_dimension(e: &BytesStart<'_>, grid: &mut SheetGrid) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"ref" {
            match attr.unescape_value().ok().map(|s| MergeSpan::parse(&s)) {
                Some(Ok(span)) => grid.set_dimension_hint(span),
                _ => log::debug!("Ignoring unreadable dimension hint"),
            }
        }
    }
}
