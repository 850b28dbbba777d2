//! XML with a fixed document shape:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <table>
//!   <headers><header>Name</header>...</headers>
//!   <rows><row><Name>Alice</Name>...</row>...</rows>
//! </table>
//! ```
//!
//! Cell elements are named after their header, rewritten into a legal XML name
//! (`First Name` becomes `First_Name`). Text is escaped on the way out and
//! unescaped on the way in.

use std::collections::HashMap;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{Exporter, Importer};
use crate::util::sanitize_xml_name;
use crate::{Table, TableError};

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlFormat;

impl Exporter for XmlFormat {
    fn export(&self, table: &Table) -> Result<String, TableError> {
        let tags: Vec<String> = table
            .headers()
            .iter()
            .map(|h| sanitize_xml_name(h))
            .collect();

        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        writer.write_event(Event::Start(BytesStart::new("table")))?;

        writer.write_event(Event::Start(BytesStart::new("headers")))?;
        for header in table.headers() {
            writer
                .create_element("header")
                .write_text_content(BytesText::new(header))?;
        }
        writer.write_event(Event::End(BytesEnd::new("headers")))?;

        writer.write_event(Event::Start(BytesStart::new("rows")))?;
        for row in table.rows() {
            writer.write_event(Event::Start(BytesStart::new("row")))?;
            for (tag, value) in tags.iter().zip(row) {
                writer
                    .create_element(tag.as_str())
                    .write_text_content(BytesText::new(value))?;
            }
            writer.write_event(Event::End(BytesEnd::new("row")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("rows")))?;

        writer.write_event(Event::End(BytesEnd::new("table")))?;
        writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

impl Importer for XmlFormat {
    /// Reads `<header>` elements under `<headers>` and one `<row>` per row
    /// under `<rows>`. The root element may have any name. Empty headers are
    /// dropped; cells missing from a row import as empty strings.
    fn import(&self, data: &str) -> Result<Table, TableError> {
        let mut reader = Reader::from_str(data);

        let mut path: Vec<String> = Vec::new();
        let mut text = String::new();
        let mut saw_root = false;
        let mut headers: Vec<String> = Vec::new();
        let mut rows: Vec<HashMap<String, String>> = Vec::new();
        let mut current: HashMap<String, String> = HashMap::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    saw_root = true;
                    if section(&path) == Some("rows") && name == "row" {
                        current.clear();
                    }
                    path.push(name);
                    text.clear();
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    saw_root = true;
                    match section(&path) {
                        Some("rows") if name == "row" => rows.push(HashMap::new()),
                        Some("row") => {
                            current.insert(name, String::new());
                        }
                        _ => {}
                    }
                    text.clear();
                }
                Event::Text(t) => {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| TableError::serialization(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::End(_) => {
                    let name = path.pop().unwrap_or_default();
                    match section(&path) {
                        Some("headers") if name == "header" => {
                            if !text.is_empty() {
                                headers.push(std::mem::take(&mut text));
                            }
                        }
                        Some("rows") if name == "row" => rows.push(std::mem::take(&mut current)),
                        Some("row") => {
                            current.insert(name, std::mem::take(&mut text));
                        }
                        _ => {}
                    }
                    text.clear();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(TableError::serialization("XML document has no root element"));
        }
        if let Some(open) = path.last() {
            return Err(TableError::serialization(format!(
                "XML element <{}> is not closed",
                open
            )));
        }

        let tags: Vec<String> = headers.iter().map(|h| sanitize_xml_name(h)).collect();
        let mut table = Table::new(headers);
        for mut cells in rows {
            table.add_row(tags.iter().map(|tag| cells.remove(tag).unwrap_or_default()));
        }
        Ok(table)
    }
}

/// Names the section an element opened under `path` belongs to: `headers`
/// and `rows` directly below the root, `row` one level further down.
fn section(path: &[String]) -> Option<&str> {
    match path {
        [_, section] if section == "headers" || section == "rows" => Some(section.as_str()),
        [_, rows, row] if rows == "rows" && row == "row" => Some("row"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_document() {
        let mut table = Table::new(["Name", "Age"]);
        table.add_row(["Alice", "30"]);
        assert_eq!(
            XmlFormat.export(&table).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <table><headers><header>Name</header><header>Age</header></headers>\
             <rows><row><Name>Alice</Name><Age>30</Age></row></rows></table>\n"
        );
    }

    #[test]
    fn export_escapes_text_and_sanitizes_tags() {
        let mut table = Table::new(["First Name"]);
        table.add_row(["<b>&</b>"]);
        let xml = XmlFormat.export(&table).unwrap();
        assert!(xml.contains("<header>First Name</header>"));
        assert!(xml.contains("<First_Name>&lt;b&gt;&amp;&lt;/b&gt;</First_Name>"));
    }

    #[test]
    fn export_is_well_formed() {
        let mut table = Table::new(["Q&A \"quoted\"", "it's"]);
        table.add_row(["]]> <![CDATA[", ""]);

        let xml = XmlFormat.export(&table).unwrap();
        let mut reader = Reader::from_str(&xml);
        reader.config_mut().check_end_names = true;
        let mut depth = 0i32;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(depth, 0);

        let back = XmlFormat.import(&xml).unwrap();
        assert_eq!(back.headers(), table.headers());
        assert_eq!(back.to_rows(), table.to_rows());
    }

    #[test]
    fn import_document() {
        let xml = r#"<?xml version="1.0"?>
            <table>
              <headers><header>Name</header><header>Age</header></headers>
              <rows>
                <row><Name>Alice</Name><Age>30</Age></row>
                <row><Age>25</Age><Name>Bob</Name></row>
              </rows>
            </table>"#;
        let table = XmlFormat.import(xml).unwrap();
        assert_eq!(table.headers(), ["Name", "Age"]);
        assert_eq!(table.to_rows(), vec![vec!["Alice", "30"], vec!["Bob", "25"]]);
    }

    #[test]
    fn import_missing_and_empty_cells() {
        let xml = "<t><headers><header>A</header><header>B</header></headers>\
                   <rows><row><B/></row><row/></rows></t>";
        let table = XmlFormat.import(xml).unwrap();
        assert_eq!(table.to_rows(), vec![vec!["", ""], vec!["", ""]]);
    }

    #[test]
    fn import_unescapes_text() {
        let xml = "<table><headers><header>First Name</header></headers>\
                   <rows><row><First_Name>Tom &amp; Jerry</First_Name></row></rows></table>";
        let table = XmlFormat.import(xml).unwrap();
        assert_eq!(table.get_row(0).unwrap(), ["Tom & Jerry"]);
    }

    #[test]
    fn import_skips_empty_headers() {
        let xml = "<table><headers><header>A</header><header></header></headers><rows/></table>";
        let table = XmlFormat.import(xml).unwrap();
        assert_eq!(table.headers(), ["A"]);
    }

    #[test]
    fn import_unclosed_element_fails() {
        assert!(matches!(
            XmlFormat.import("<table><headers>"),
            Err(TableError::SerializationFailure(_))
        ));
    }

    #[test]
    fn import_mismatched_tags_fail() {
        assert!(matches!(
            XmlFormat.import("<table><headers></rows></table>"),
            Err(TableError::SerializationFailure(_))
        ));
    }

    #[test]
    fn import_without_root_fails() {
        assert!(matches!(
            XmlFormat.import("not xml at all"),
            Err(TableError::SerializationFailure(_))
        ));
    }
}
