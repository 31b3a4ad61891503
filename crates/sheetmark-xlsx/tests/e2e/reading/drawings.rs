//! Tests for reading drawing notes attached to a worksheet.

use crate::{worksheet_xml, xlsx_bytes};
use pretty_assertions::assert_eq;
use sheetmark_core::StyledRun;
use sheetmark_xlsx::{SheetSelector, XlsxReader, ZipPackage};
use std::io::Cursor;

const SHEET_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing" Target="../drawings/drawing1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing" Target="../drawings/drawing2.xml"/>
</Relationships>"#;

const TEXT_DRAWING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
  <xdr:twoCellAnchor>
    <xdr:sp>
      <xdr:txBody>
        <a:bodyPr/>
        <a:p><a:r><a:rPr lang="en-US" baseline="-25000"/><a:t>x</a:t></a:r><a:r><a:t> axis</a:t></a:r></a:p>
      </xdr:txBody>
    </xdr:sp>
  </xdr:twoCellAnchor>
</xdr:wsDr>"#;

const PICTURE_DRAWING: &str = r#"<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing"><xdr:oneCellAnchor><xdr:pic/></xdr:oneCellAnchor></xdr:wsDr>"#;

#[test]
fn test_read_drawings_of_sheet() {
    let sheet = worksheet_xml(r#"<sheetData/><drawing r:id="rId1"/>"#);
    let bytes = xlsx_bytes(&[
        ("xl/worksheets/sheet1.xml", &sheet),
        ("xl/worksheets/_rels/sheet1.xml.rels", SHEET_RELS),
        ("xl/drawings/drawing1.xml", TEXT_DRAWING),
        ("xl/drawings/drawing2.xml", PICTURE_DRAWING),
    ]);
    let mut package = ZipPackage::new(Cursor::new(bytes)).unwrap();

    let parts = XlsxReader::read_sheet(&mut package, &SheetSelector::default()).unwrap();
    let notes = XlsxReader::read_drawings(&mut package, &parts.sheet_part).unwrap();

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].relationship_id, "rId1");
    assert_eq!(
        notes[0].text.as_ref().unwrap().runs(),
        &[StyledRun::styled("x", false, true), StyledRun::plain(" axis")]
    );
    assert_eq!(notes[1].part, "xl/drawings/drawing2.xml");
    assert_eq!(notes[1].text, None);
}

#[test]
fn test_broken_drawing_is_skipped() {
    let sheet = worksheet_xml(r#"<sheetData/>"#);
    let bytes = xlsx_bytes(&[
        ("xl/worksheets/sheet1.xml", &sheet),
        ("xl/worksheets/_rels/sheet1.xml.rels", SHEET_RELS),
        ("xl/drawings/drawing1.xml", "<xdr:wsDr><a:p></xdr:wsDr>"),
    ]);
    let mut package = ZipPackage::new(Cursor::new(bytes)).unwrap();

    let notes = XlsxReader::read_drawings(&mut package, "xl/worksheets/sheet1.xml").unwrap();

    assert!(notes.is_empty());
}
