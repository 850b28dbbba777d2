//! Comma-separated values: one header record followed by one record per row.

use super::{Exporter, Importer};
use crate::{Table, TableError};

/// CSV adapter with standard comma and double-quote escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFormat;

impl Exporter for CsvFormat {
    fn export(&self, table: &Table) -> Result<String, TableError> {
        if table.headers().is_empty() {
            return Ok("\n".to_string());
        }

        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(table.headers())?;
        for row in table.rows() {
            wtr.write_record(row)?;
        }
        let bytes = wtr.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl Importer for CsvFormat {
    /// The first record supplies the headers; blank lines are skipped and
    /// ragged records are padded or truncated like any added row.
    fn import(&self, data: &str) -> Result<Table, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.trim().as_bytes());

        let mut records = rdr.records();
        let headers = match records.next() {
            Some(record) => record?,
            None => return Ok(Table::default()),
        };

        let mut table = Table::new(headers.iter());
        for record in records {
            let record = record?;
            table.add_row(record.iter());
        }
        Ok(table)
    }
}
