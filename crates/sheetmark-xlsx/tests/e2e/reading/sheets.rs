//! Tests for selecting and reading worksheets from XLSX files.

use crate::{temp_xlsx, worksheet_xml, xlsx_bytes};
use sheetmark_core::{CellCoordinate, CellKind};
use sheetmark_xlsx::{SheetSelector, XlsxError, XlsxReader, ZipPackage};
use std::io::Cursor;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Inputs" sheetId="1" r:id="rId1"/>
    <sheet name="Q1 &amp; Q2" sheetId="5" r:id="rId2"/>
  </sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet7.xml"/>
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

fn workbook_parts() -> (String, String) {
    (
        worksheet_xml(r#"<sheetData><row r="1"><c r="A1"><v>1</v></c></row></sheetData>"#),
        worksheet_xml(
            r#"<sheetData><row r="3"><c r="C3" t="b"><v>0</v></c></row></sheetData>"#,
        ),
    )
}

#[test]
fn test_select_by_name() {
    let (first, second) = workbook_parts();
    let file = temp_xlsx(&[
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", &first),
        ("xl/worksheets/sheet7.xml", &second),
    ]);

    let parts =
        XlsxReader::read_file(&file.path, &SheetSelector::Name("Q1 & Q2".into())).unwrap();

    assert_eq!(parts.sheet_part, "xl/worksheets/sheet7.xml");
    assert_eq!(parts.grid.max_row(), 3);
    assert_eq!(
        parts
            .grid
            .get(CellCoordinate::parse("C3").unwrap())
            .unwrap()
            .kind(),
        CellKind::Boolean
    );
}

#[test]
fn test_select_by_index() {
    let (first, second) = workbook_parts();
    let file = temp_xlsx(&[
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", &first),
        ("xl/worksheets/sheet7.xml", &second),
    ]);

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::Index(1)).unwrap();
    assert_eq!(parts.sheet_part, "xl/worksheets/sheet1.xml");

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::Index(2)).unwrap();
    assert_eq!(parts.sheet_part, "xl/worksheets/sheet7.xml");

    let err = XlsxReader::read_file(&file.path, &SheetSelector::Index(3)).unwrap_err();
    assert!(matches!(err, XlsxError::SheetNotFound(_)));
}

#[test]
fn test_resolved_part_missing() {
    let (first, _) = workbook_parts();
    let bytes = xlsx_bytes(&[
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", &first),
    ]);
    let mut package = ZipPackage::new(Cursor::new(bytes)).unwrap();

    let err = XlsxReader::read_sheet(&mut package, &SheetSelector::Index(2)).unwrap_err();

    assert!(matches!(&err, XlsxError::MissingPart(part) if part == "xl/worksheets/sheet7.xml"));
}

#[test]
fn test_missing_file() {
    let err = XlsxReader::read_file("does/not/exist.xlsx", &SheetSelector::default()).unwrap_err();
    assert!(matches!(err, XlsxError::Io(_)));
}

#[test]
fn test_missing_content_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.zip");
    {
        use std::io::Write;
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"not a workbook").unwrap();
        zip.finish().unwrap();
    }

    let err = XlsxReader::read_file(&path, &SheetSelector::default()).unwrap_err();
    assert!(matches!(err, XlsxError::InvalidFormat(_)));
}
