//! Table renderer: sheet model to a dense table of Markdown cell strings
//!
//! Markup used inside a cell:
//! - superscript: `^text^`
//! - subscript: `~text~` (superscript wins when a run has both)
//! - indent level `n`: `n` dashes followed by `> `, e.g. `--> text`
//! - `|` is escaped as `\|`, line breaks become `<br>`
//! - literal `^` and `~` are escaped as `\^` and `\~`

use std::borrow::Cow;

use sheetmark_core::{
    CellCoordinate, CellRecord, CellValue, MergeDisposition, MergeMap, RichText,
    SharedStringTable, SheetGrid, StyleDescriptor, StyleTable, StyledRun,
};

/// Dense, row-major table of rendered cell strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedTable {
    rows: Vec<Vec<String>>,
}

impl RenderedTable {
    /// Create a table from its rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by 0-based row and column
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}

/// Render every coordinate of the sheet's bounds
///
/// Covered cells of a merged span render empty; anchors render exactly as
/// unmerged cells would. Absent cells render empty. The function is pure:
/// rendering the same inputs twice yields the same table.
pub fn render(
    grid: &SheetGrid,
    strings: &SharedStringTable,
    styles: &StyleTable,
    merges: &MergeMap,
) -> RenderedTable {
    let bounds = grid.bounds().union(merges.bounds());
    if bounds.is_empty() {
        return RenderedTable::default();
    }

    let rows = (1..=bounds.max_row)
        .map(|row| {
            (1..=bounds.max_column)
                .map(|column| {
                    let coord = CellCoordinate::new(row, column);
                    match merges.classify(coord) {
                        MergeDisposition::Covered(_) => String::new(),
                        MergeDisposition::Anchor(_) | MergeDisposition::NotMerged => grid
                            .get(coord)
                            .map(|record| render_cell(record, strings, styles))
                            .unwrap_or_default(),
                    }
                })
                .collect()
        })
        .collect();

    RenderedTable::new(rows)
}

/// Render one cell record, ignoring merges
pub fn render_cell(
    record: &CellRecord,
    strings: &SharedStringTable,
    styles: &StyleTable,
) -> String {
    let text: Cow<'_, RichText> = match &record.value {
        CellValue::Number(raw)
        | CellValue::Boolean(raw)
        | CellValue::Text(raw)
        | CellValue::Error(raw) => Cow::Owned(RichText::plain(raw.as_str())),
        CellValue::SharedString(raw) => match resolve_shared(raw, strings) {
            Some(text) => Cow::Borrowed(text),
            None => return String::new(),
        },
        CellValue::InlineString(text) => Cow::Borrowed(text),
        CellValue::Empty => return String::new(),
    };

    if text.is_empty() {
        return String::new();
    }
    apply_style(&text, styles.lookup(record.style_index))
}

fn resolve_shared<'a>(raw: &str, strings: &'a SharedStringTable) -> Option<&'a RichText> {
    let index = match raw.trim().parse::<usize>() {
        Ok(index) => index,
        Err(_) => {
            log::debug!("Shared string index '{}' is not a number", raw);
            return None;
        }
    };

    match strings.get(index) {
        Ok(text) => Some(text),
        Err(err) => {
            log::debug!("{}; rendering empty text", err);
            None
        }
    }
}

/// Run flags after merging in the cell style
pub fn effective_flags(run: &StyledRun, style: &StyleDescriptor) -> (bool, bool) {
    (
        run.superscript || style.superscript,
        run.subscript || style.subscript,
    )
}

/// Render rich text under a cell style
///
/// Adjacent runs whose effective flags match are written under one marker
/// pair, so `H` `2` `O` with a subscript `2` becomes `H~2~O`.
pub fn apply_style(text: &RichText, style: StyleDescriptor) -> String {
    let mut out = String::new();
    for _ in 0..style.indent_level {
        out.push('-');
    }
    if style.indent_level > 0 {
        out.push_str("> ");
    }

    write_runs(&mut out, text, &style, escape_cell_text);
    out
}

/// Superscript/subscript markup of rich text outside a table cell
///
/// Line breaks and pipes are kept as they are; marker characters are
/// escaped as in table cells.
pub fn inline_markup(text: &RichText) -> String {
    let mut out = String::new();
    write_runs(&mut out, text, &StyleDescriptor::DEFAULT, escape_markers);
    out
}

fn write_runs<F>(out: &mut String, text: &RichText, style: &StyleDescriptor, escape: F)
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    let mut groups: Vec<((bool, bool), String)> = Vec::new();
    for run in text.runs().iter().filter(|r| !r.text.is_empty()) {
        let flags = effective_flags(run, style);
        match groups.last_mut() {
            Some((last, buf)) if *last == flags => buf.push_str(&run.text),
            _ => groups.push((flags, run.text.clone())),
        }
    }

    for ((superscript, subscript), raw) in &groups {
        let escaped = escape(raw.as_str());
        if *superscript {
            out.push('^');
            out.push_str(&escaped);
            out.push('^');
        } else if *subscript {
            out.push('~');
            out.push_str(&escaped);
            out.push('~');
        } else {
            out.push_str(&escaped);
        }
    }
}

/// Escape text so it stays inside one Markdown table cell
pub fn escape_cell_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['|', '\r', '\n', '^', '~']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '|' => out.push_str("\\|"),
            '^' => out.push_str("\\^"),
            '~' => out.push_str("\\~"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("<br>");
            }
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escape literal superscript and subscript markers
fn escape_markers(text: &str) -> Cow<'_, str> {
    if !text.contains(['^', '~']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if matches!(ch, '^' | '~') {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}
