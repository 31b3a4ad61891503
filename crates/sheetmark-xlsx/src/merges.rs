//! Merged cell ranges (`<mergeCells>` of a worksheet part)

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use sheetmark_core::{MergeMap, MergeSpan};

/// Parse the merge ranges declared in a worksheet part
///
/// Malformed `ref` values are skipped with a warning; span order follows the
/// document so that overlap resolution is first-wins.
pub fn read_merge_cells(bytes: &[u8]) -> XlsxResult<MergeMap> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut spans = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"mergeCell" => {
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"ref" {
                        let ref_str = attr.unescape_value()?;
                        match MergeSpan::parse(&ref_str) {
                            Ok(span) => spans.push(span),
                            Err(err) => log::warn!("Skipping merge range: {}", err),
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(MergeMap::from_spans(spans))
}
