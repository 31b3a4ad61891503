//! Common utilities for E2E tests.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

/// Wrap the children of `<worksheet>` into a worksheet part
pub fn worksheet_xml(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">{}</worksheet>"#,
        inner
    )
}

/// Zip the given parts, adding `[Content_Types].xml`
pub fn xlsx_bytes(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
        for (name, body) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}

/// An XLSX file on disk that lives as long as the value
pub struct TempXlsx {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write the given parts into a temporary `.xlsx` file
pub fn temp_xlsx(parts: &[(&str, &str)]) -> TempXlsx {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.xlsx");
    std::fs::write(&path, xlsx_bytes(parts)).unwrap();
    TempXlsx { _dir: dir, path }
}
