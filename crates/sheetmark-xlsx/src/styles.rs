//! XLSX styles (xl/styles.xml) reader
//!
//! Only the parts of a cell format that reach the Markdown output are
//! resolved: the font's vertical alignment and the alignment indent.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use crate::rich_text::vert_align;
use sheetmark_core::{StyleDescriptor, StyleTable};

/// Vertical alignment of one `<font>` entry
#[derive(Debug, Clone, Copy, Default)]
struct FontAlign {
    superscript: bool,
    subscript: bool,
}

/// One `<xf>` of `<cellXfs>` before font resolution
#[derive(Debug, Clone, Copy, Default)]
struct PendingXf {
    font_id: u32,
    indent: u32,
}

/// Parse the style table
///
/// Style index `n` is the `n`-th `<xf>` of `<cellXfs>`. Fonts are resolved
/// after the whole part is read, so element order inside the part does not
/// matter. `<cellStyleXfs>` and the differential formats in `<dxfs>` are not
/// cell formats and are skipped.
pub fn read_styles(bytes: &[u8]) -> XlsxResult<StyleTable> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut fonts: Vec<FontAlign> = Vec::new();
    let mut cell_xfs: Vec<PendingXf> = Vec::new();

    let mut in_fonts = false;
    let mut current_font: Option<FontAlign> = None;
    let mut in_cell_xfs = false;
    let mut current_xf: Option<PendingXf> = None;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"fonts" => in_fonts = true,
                b"font" if in_fonts => current_font = Some(FontAlign::default()),
                b"cellXfs" => in_cell_xfs = true,
                b"xf" if in_cell_xfs => current_xf = Some(parse_xf_attrs(&e)),
                b"alignment" => apply_alignment(&e, current_xf.as_mut()),
                b"vertAlign" => apply_vert_align(&e, current_font.as_mut()),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"font" if in_fonts => fonts.push(FontAlign::default()),
                b"vertAlign" => apply_vert_align(&e, current_font.as_mut()),
                b"xf" if in_cell_xfs => cell_xfs.push(parse_xf_attrs(&e)),
                b"alignment" => apply_alignment(&e, current_xf.as_mut()),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"fonts" => in_fonts = false,
                b"font" => {
                    if let Some(font) = current_font.take() {
                        fonts.push(font);
                    }
                }
                b"cellXfs" => in_cell_xfs = false,
                b"xf" => {
                    if let Some(xf) = current_xf.take() {
                        cell_xfs.push(xf);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let styles: Vec<StyleDescriptor> = cell_xfs
        .iter()
        .map(|xf| resolve_style(xf, &fonts))
        .collect();

    log::debug!(
        "Read {} cell formats referencing {} fonts",
        styles.len(),
        fonts.len()
    );
    Ok(StyleTable::new(styles))
}

fn parse_xf_attrs(e: &BytesStart<'_>) -> PendingXf {
    let mut xf = PendingXf::default();
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"fontId" {
            xf.font_id = attr
                .unescape_value()
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
        }
    }
    xf
}

fn apply_vert_align(e: &BytesStart<'_>, font: Option<&mut FontAlign>) {
    if let Some(font) = font {
        (font.superscript, font.subscript) = vert_align(e);
    }
}

fn apply_alignment(e: &BytesStart<'_>, xf: Option<&mut PendingXf>) {
    let Some(xf) = xf else {
        return;
    };
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"indent" {
            xf.indent = attr
                .unescape_value()
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
        }
    }
}

fn resolve_style(xf: &PendingXf, fonts: &[FontAlign]) -> StyleDescriptor {
    let font = match fonts.get(xf.font_id as usize) {
        Some(font) => *font,
        None => {
            log::warn!("Cell format references missing font {}", xf.font_id);
            FontAlign::default()
        }
    };

    StyleDescriptor {
        indent_level: xf.indent,
        superscript: font.superscript,
        subscript: font.subscript,
    }
}
