//! In-memory XLSX fixtures for the integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

pub const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Builds an XLSX archive part by part
#[derive(Debug, Clone)]
pub struct XlsxBuilder {
    parts: Vec<(String, String)>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self {
            parts: vec![(
                "[Content_Types].xml".to_string(),
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#
                    .to_string(),
            )],
        }
    }

    /// Add a raw part
    pub fn part(mut self, name: &str, body: &str) -> Self {
        self.parts.push((name.to_string(), body.to_string()));
        self
    }

    /// Add `xl/worksheets/sheet{n}.xml` with the given children of `<worksheet>`
    pub fn worksheet(self, n: usize, inner: &str) -> Self {
        let body = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="{}" xmlns:r="{}">{}</worksheet>"#,
            MAIN_NS, REL_NS, inner
        );
        self.part(&format!("xl/worksheets/sheet{}.xml", n), &body)
    }

    /// Add sheet 1 holding only `<sheetData>`
    pub fn sheet_data(self, rows: &str) -> Self {
        self.worksheet(1, &format!("<sheetData>{}</sheetData>", rows))
    }

    /// Add a shared string table of plain entries
    pub fn shared_strings(self, items: &[&str]) -> Self {
        let entries: String = items
            .iter()
            .map(|s| format!("<si><t>{}</t></si>", s))
            .collect();
        let body = format!(
            r#"<sst xmlns="{}" count="{}" uniqueCount="{}">{}</sst>"#,
            MAIN_NS,
            items.len(),
            items.len(),
            entries
        );
        self.part("xl/sharedStrings.xml", &body)
    }

    /// Add a styles part from its `<fonts>` and `<cellXfs>` children
    pub fn styles(self, fonts: &str, cell_xfs: &str) -> Self {
        let body = format!(
            r#"<styleSheet xmlns="{}"><fonts>{}</fonts><cellXfs>{}</cellXfs></styleSheet>"#,
            MAIN_NS, fonts, cell_xfs
        );
        self.part("xl/styles.xml", &body)
    }

    /// Zip all parts
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            for (name, body) in &self.parts {
                zip.start_file(name.as_str(), options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buf
    }
}

impl Default for XlsxBuilder {
    fn default() -> Self {
        Self::new()
    }
}
