//! Drawing metadata passthrough
//!
//! Drawings are not interpreted. The text of their shapes is extracted so it
//! can be listed next to the table; drawings without text are reported as
//! media.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use crate::package::PartSource;
use crate::relationships::{read_relationships, rels_part_for, resolve_target};
use sheetmark_core::{RichText, StyledRun};

/// A drawing attached to the worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingNote {
    /// Relationship id in the worksheet's rels part (e.g. `rId1`)
    pub relationship_id: String,
    /// Drawing part name (e.g. `xl/drawings/drawing1.xml`)
    pub part: String,
    /// Shape text, `None` when the drawing carries no text
    pub text: Option<RichText>,
}

/// Extract the text of a DrawingML part
///
/// Paragraphs (`<a:p>`) are separated by a newline and `<a:br/>` becomes a
/// newline. A run's `baseline` above zero marks superscript, below zero
/// subscript.
pub fn read_drawing_text(bytes: &[u8]) -> XlsxResult<RichText> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut runs: Vec<StyledRun> = Vec::new();
    let mut paragraphs = 0usize;
    let mut in_run = false;
    let mut in_t = false;
    let mut current = StyledRun::default();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => {
                    if paragraphs > 0 {
                        runs.push(StyledRun::plain("\n"));
                    }
                    paragraphs += 1;
                }
                // Text fields (slide numbers, dates) carry text like runs
                b"r" | b"fld" => {
                    in_run = true;
                    current = StyledRun::default();
                }
                b"rPr" if in_run => apply_baseline(&e, &mut current),
                b"t" if in_run => in_t = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => {
                    if paragraphs > 0 {
                        runs.push(StyledRun::plain("\n"));
                    }
                    paragraphs += 1;
                }
                b"rPr" if in_run => apply_baseline(&e, &mut current),
                b"br" => runs.push(StyledRun::plain("\n")),
                _ => {}
            },
            Event::Text(e) if in_t => current.text.push_str(&e.unescape()?),
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_t = false,
                b"r" | b"fld" if in_run => {
                    in_run = false;
                    runs.push(std::mem::take(&mut current));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(RichText::new(runs))
}

fn apply_baseline(e: &BytesStart<'_>, run: &mut StyledRun) {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"baseline" {
            let baseline: i64 = attr
                .unescape_value()
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
            run.superscript = baseline > 0;
            run.subscript = baseline < 0;
        }
    }
}

/// Collect the drawings related to a worksheet part
///
/// Missing relationship or drawing parts are skipped; unreadable ones are
/// logged and skipped. Order follows the worksheet's rels part.
pub fn read_drawing_notes<S: PartSource>(
    source: &mut S,
    sheet_part: &str,
) -> XlsxResult<Vec<DrawingNote>> {
    let rels_part = rels_part_for(sheet_part);
    let rels = match source.read_part(&rels_part)? {
        Some(bytes) => match read_relationships(&bytes) {
            Ok(rels) => rels,
            Err(err) => {
                log::warn!("Ignoring unreadable {}: {}", rels_part, err);
                return Ok(Vec::new());
            }
        },
        None => return Ok(Vec::new()),
    };

    let mut notes = Vec::new();
    for rel in rels.iter().filter(|r| r.is_type("drawing") && !r.external) {
        let part = resolve_target(sheet_part, &rel.target);
        let Some(bytes) = source.read_part(&part)? else {
            log::debug!("Drawing {} referenced by {} is missing", part, rel.id);
            continue;
        };

        match read_drawing_text(&bytes) {
            Ok(text) => {
                let text = if text.plain_text().trim().is_empty() {
                    None
                } else {
                    Some(text)
                };
                notes.push(DrawingNote {
                    relationship_id: rel.id.clone(),
                    part,
                    text,
                });
            }
            Err(err) => log::warn!("Skipping unreadable drawing {}: {}", part, err),
        }
    }

    Ok(notes)
}
