//! Rich text (`<si>` / `<is>`) parsing shared by the string readers

use std::borrow::Cow;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use sheetmark_core::{RichText, StyledRun};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format for characters XML cannot carry literally:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
///
/// Sequences that are not exactly `_x` + four hex digits + `_` are kept.
pub(crate) fn decode_excel_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains("_x") {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match decode_escape(candidate) {
            Some(ch) => {
                result.push(ch);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Decode one `_xHHHH_` sequence at the start of `s`
fn decode_escape(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' {
        return None;
    }
    let hex = s.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    char::from_u32(u32::from_str_radix(hex, 16).ok()?)
}

/// Read `superscript`/`subscript` from a `<vertAlign val="..."/>` element
pub(crate) fn vert_align(e: &BytesStart<'_>) -> (bool, bool) {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"val" {
            return match attr.unescape_value().ok().as_deref() {
                Some("superscript") => (true, false),
                Some("subscript") => (false, true),
                _ => (false, false),
            };
        }
    }
    (false, false)
}

/// Read a rich text container until its closing tag
///
/// The reader must be positioned just after the opening `<si>` or `<is>`
/// (whose local name is `end`). Handles both the plain form
/// (`<t>text</t>`) and the run form (`<r><rPr>..</rPr><t>..</t></r>`).
/// Phonetic runs (`<rPh>`) do not contribute text.
pub(crate) fn read_rich_text<R: BufRead>(
    xml_reader: &mut Reader<R>,
    end: &[u8],
) -> XlsxResult<RichText> {
    let mut buf = Vec::new();
    let mut runs: Vec<StyledRun> = Vec::new();

    let mut in_run = false;
    let mut in_phonetic = false;
    let mut in_t = false;
    let mut current = StyledRun::default();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"rPh" => in_phonetic = true,
                b"r" if !in_phonetic => {
                    in_run = true;
                    current = StyledRun::default();
                }
                b"t" if !in_phonetic => {
                    in_t = true;
                    if !in_run {
                        current = StyledRun::default();
                    }
                }
                b"vertAlign" if in_run => {
                    (current.superscript, current.subscript) = vert_align(&e);
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"vertAlign" if in_run => {
                    (current.superscript, current.subscript) = vert_align(&e);
                }
                b"t" if !in_phonetic && !in_run => runs.push(StyledRun::default()),
                _ => {}
            },
            Event::Text(e) if in_t => {
                let text = e.unescape()?;
                current.text.push_str(&decode_excel_escapes(&text));
            }
            Event::CData(e) if in_t => {
                current.text.push_str(&String::from_utf8_lossy(&e));
            }
            Event::End(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    n if n == end => break,
                    b"rPh" => in_phonetic = false,
                    b"t" if !in_phonetic => {
                        in_t = false;
                        if !in_run {
                            runs.push(std::mem::take(&mut current));
                        }
                    }
                    b"r" if in_run => {
                        in_run = false;
                        runs.push(std::mem::take(&mut current));
                    }
                    _ => {}
                }
            }
            Event::Eof => {
                return Err(XlsxError::Parse(format!(
                    "unexpected end of document inside <{}>",
                    String::from_utf8_lossy(end)
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(RichText::new(runs))
}
