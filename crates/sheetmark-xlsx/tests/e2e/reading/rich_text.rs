//! Tests for reading shared strings, inline strings and styles from XLSX files.

use crate::{temp_xlsx, worksheet_xml};
use pretty_assertions::assert_eq;
use sheetmark_core::{CellCoordinate, CellValue, RichText, StyleDescriptor, StyledRun};
use sheetmark_xlsx::{SheetSelector, XlsxReader};

const SHARED_STRINGS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="3" uniqueCount="3">
  <si><t>plain</t></si>
  <si><r><t>E=mc</t></r><r><rPr><vertAlign val="superscript"/><sz val="11"/></rPr><t>2</t></r></si>
  <si><t>kanji</t><rPh sb="0" eb="1"><t>kana</t></rPh></si>
</sst>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <fonts count="2">
    <font><sz val="11"/><name val="Calibri"/></font>
    <font><vertAlign val="subscript"/><sz val="11"/></font>
  </fonts>
  <cellStyleXfs count="1"><xf fontId="1"/></cellStyleXfs>
  <cellXfs count="3">
    <xf fontId="0" xfId="0"/>
    <xf fontId="1" xfId="0" applyFont="1"/>
    <xf fontId="0" xfId="0" applyAlignment="1"><alignment horizontal="left" indent="3"/></xf>
  </cellXfs>
  <dxfs count="1"><dxf><font><vertAlign val="superscript"/></font></dxf></dxfs>
</styleSheet>"#;

#[test]
fn test_shared_strings_with_runs() {
    let sheet = worksheet_xml(r#"<sheetData/>"#);
    let file = temp_xlsx(&[
        ("xl/sharedStrings.xml", SHARED_STRINGS),
        ("xl/worksheets/sheet1.xml", &sheet),
    ]);

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::default()).unwrap();
    let strings = &parts.shared_strings;

    assert_eq!(strings.len(), 3);
    assert_eq!(strings.get(0).unwrap(), &RichText::plain("plain"));
    assert_eq!(
        strings.get(1).unwrap().runs(),
        &[
            StyledRun::plain("E=mc"),
            StyledRun::styled("2", true, false)
        ]
    );
    assert_eq!(strings.get(2).unwrap().plain_text(), "kanji");
    assert!(strings.get(3).is_err());
}

#[test]
fn test_styles_resolve_fonts_and_indent() {
    let sheet = worksheet_xml(r#"<sheetData/>"#);
    let file = temp_xlsx(&[("xl/styles.xml", STYLES), ("xl/worksheets/sheet1.xml", &sheet)]);

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::default()).unwrap();
    let styles = &parts.styles;

    assert_eq!(styles.len(), 3);
    assert_eq!(styles.lookup(0), StyleDescriptor::DEFAULT);
    assert!(styles.lookup(1).subscript);
    assert!(!styles.lookup(1).superscript);
    assert_eq!(styles.lookup(2).indent_level, 3);
    assert_eq!(styles.lookup(42), StyleDescriptor::DEFAULT);
}

#[test]
fn test_missing_optional_parts_use_defaults() {
    let sheet = worksheet_xml(
        r#"<sheetData><row r="1"><c r="A1" t="s" s="5"><v>0</v></c></row></sheetData>"#,
    );
    let file = temp_xlsx(&[("xl/worksheets/sheet1.xml", &sheet)]);

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::default()).unwrap();

    assert!(parts.shared_strings.is_empty());
    assert_eq!(parts.styles.len(), 1);
    assert_eq!(parts.styles.lookup(5), StyleDescriptor::DEFAULT);
    assert_eq!(
        parts
            .grid
            .get(CellCoordinate::parse("A1").unwrap())
            .unwrap()
            .value,
        CellValue::SharedString("0".into())
    );
}

#[test]
fn test_inline_string_escapes() {
    let sheet = worksheet_xml(
        r#"<sheetData><row r="1"><c r="A1" t="inlineStr"><is><t xml:space="preserve">a_x000a_b &amp; c</t></is></c></row></sheetData>"#,
    );
    let file = temp_xlsx(&[("xl/worksheets/sheet1.xml", &sheet)]);

    let parts = XlsxReader::read_file(&file.path, &SheetSelector::default()).unwrap();

    assert_eq!(
        parts
            .grid
            .get(CellCoordinate::parse("A1").unwrap())
            .unwrap()
            .value,
        CellValue::InlineString(RichText::plain("a\nb & c"))
    );
}
