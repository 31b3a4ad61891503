//! Markdown serialization of a rendered table and its drawing notes

use sheetmark_xlsx::DrawingNote;

use crate::render::{inline_markup, RenderedTable};

/// Minimum number of dashes in a header separator cell
const MIN_SEPARATOR_WIDTH: usize = 3;

/// Serialize a table as Markdown rows
///
/// The first row is the header and is followed by a separator row. Every
/// line ends with `\n`. An empty table serializes to an empty string.
pub fn table_to_markdown(table: &RenderedTable) -> String {
    let mut out = String::new();

    for (idx, row) in table.rows().iter().enumerate() {
        push_row(&mut out, row.iter().map(String::as_str));

        if idx == 0 {
            let dashes: Vec<String> = row
                .iter()
                .map(|cell| "-".repeat(cell.chars().count().max(MIN_SEPARATOR_WIDTH)))
                .collect();
            push_row(&mut out, dashes.iter().map(String::as_str));
        }
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Serialize the `Drawings:` section
///
/// Returns an empty string when there are no notes.
pub fn drawings_to_markdown(notes: &[DrawingNote]) -> String {
    if notes.is_empty() {
        return String::new();
    }

    let mut out = String::from("Drawings:\n");
    for note in notes {
        let line = match &note.text {
            Some(text) => format!(
                "* Drawing (id: {}):\n{}\n",
                note.relationship_id,
                inline_markup(text).trim()
            ),
            None => format!(
                "* Drawing (id: {}) from {} (media)\n",
                note.relationship_id, note.part
            ),
        };
        out.push_str(&line);
    }
    out
}

/// Serialize a full document: drawings first, then the table
pub fn to_markdown(table: &RenderedTable, notes: &[DrawingNote]) -> String {
    let drawings = drawings_to_markdown(notes);
    let body = table_to_markdown(table);

    match (drawings.is_empty(), body.is_empty()) {
        (true, _) => body,
        (false, true) => drawings,
        (false, false) => format!("{}\n{}", drawings, body),
    }
}
