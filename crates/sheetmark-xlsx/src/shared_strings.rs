//! Shared strings (xl/sharedStrings.xml) reader

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use crate::rich_text::read_rich_text;
use sheetmark_core::SharedStringTable;

/// Parse the shared string table
///
/// Entries keep source order, so a cell's `<v>` index addresses them
/// directly.
pub fn read_shared_strings(bytes: &[u8]) -> XlsxResult<SharedStringTable> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut strings = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"si" => {
                strings.push(read_rich_text(&mut xml_reader, b"si")?);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"si" => {
                strings.push(Default::default());
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    log::debug!("Read {} shared strings", strings.len());
    Ok(SharedStringTable::new(strings))
}
