//! HTML `<table>` markup. Export only.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::Exporter;
use crate::{Table, TableError};

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Exporter for HtmlFormat {
    fn export(&self, table: &Table) -> Result<String, TableError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Start(
            BytesStart::new("table").with_attributes([("border", "1")]),
        ))?;

        writer.write_event(Event::Start(BytesStart::new("thead")))?;
        write_row(&mut writer, "th", table.headers())?;
        writer.write_event(Event::End(BytesEnd::new("thead")))?;

        writer.write_event(Event::Start(BytesStart::new("tbody")))?;
        for row in table.rows() {
            write_row(&mut writer, "td", row)?;
        }
        writer.write_event(Event::End(BytesEnd::new("tbody")))?;

        writer.write_event(Event::End(BytesEnd::new("table")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_row(
    writer: &mut Writer<Vec<u8>>,
    cell: &str,
    values: &[String],
) -> Result<(), TableError> {
    writer.write_event(Event::Start(BytesStart::new("tr")))?;
    for value in values {
        writer
            .create_element(cell)
            .write_text_content(BytesText::new(value))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}
