//! Sheet selection through xl/workbook.xml

use std::fmt;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use crate::package::PartSource;
use crate::relationships::{read_relationships, rels_part_for, resolve_target};

const WORKBOOK_PART: &str = "xl/workbook.xml";

/// Which worksheet to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// 1-based position in the workbook's sheet list
    Index(usize),
    /// Sheet name as shown on the tab
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(1)
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// Numbers select by position, anything else by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{}", index),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// A `<sheet>` entry of the workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub name: String,
    pub relationship_id: String,
}

/// Read workbook.xml to get sheet names and rIds
pub fn read_sheet_entries(bytes: &[u8]) -> XlsxResult<Vec<SheetEntry>> {
    let mut xml_reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut sheets = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sheet" => {
                let mut name = None;
                let mut r_id = None;

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"name" => {
                            name = attr.unescape_value().ok().map(|s| s.to_string());
                        }
                        // r:id, whatever the relationship namespace prefix is
                        _ if attr.key.local_name().as_ref() == b"id" => {
                            r_id = attr.unescape_value().ok().map(|s| s.to_string());
                        }
                        _ => {}
                    }
                }

                if let (Some(name), Some(r_id)) = (name, r_id) {
                    sheets.push(SheetEntry {
                        name,
                        relationship_id: r_id,
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(sheets)
}

/// Conventional part name of the `n`-th worksheet
fn conventional_sheet_part(position: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", position)
}

/// Resolve a selector to the worksheet part to read
///
/// Uses the workbook's sheet list and relationships. Packages without a
/// readable workbook part fall back to `xl/worksheets/sheet{N}.xml`, which
/// only works for positional selection.
pub fn resolve_sheet_part<S: PartSource>(
    source: &mut S,
    selector: &SheetSelector,
) -> XlsxResult<String> {
    if *selector == SheetSelector::Index(0) {
        return Err(XlsxError::SheetNotFound(
            "sheet positions start at 1".into(),
        ));
    }

    let entries = match source.read_part(WORKBOOK_PART)? {
        Some(bytes) => match read_sheet_entries(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Ignoring unreadable {}: {}", WORKBOOK_PART, err);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    if entries.is_empty() {
        return match selector {
            SheetSelector::Index(index) => Ok(conventional_sheet_part(*index)),
            SheetSelector::Name(name) => Err(XlsxError::SheetNotFound(name.clone())),
        };
    }

    let (position, entry) = match selector {
        SheetSelector::Index(index) => entries
            .get(index - 1)
            .map(|e| (*index, e))
            .ok_or_else(|| {
                XlsxError::SheetNotFound(format!(
                    "#{} (workbook has {} sheets)",
                    index,
                    entries.len()
                ))
            })?,
        SheetSelector::Name(name) => entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.name == *name)
            .map(|(i, e)| (i + 1, e))
            .ok_or_else(|| XlsxError::SheetNotFound(name.clone()))?,
    };

    let rels_part = rels_part_for(WORKBOOK_PART);
    let rels = match source.read_part(&rels_part)? {
        Some(bytes) => read_relationships(&bytes).unwrap_or_else(|err| {
            log::warn!("Ignoring unreadable {}: {}", rels_part, err);
            Vec::new()
        }),
        None => Vec::new(),
    };

    match rels.iter().find(|r| r.id == entry.relationship_id) {
        Some(rel) => Ok(resolve_target(WORKBOOK_PART, &rel.target)),
        None => {
            let fallback = conventional_sheet_part(position);
            log::warn!(
                "No relationship {} for sheet '{}'; trying {}",
                entry.relationship_id,
                entry.name,
                fallback
            );
            Ok(fallback)
        }
    }
}
