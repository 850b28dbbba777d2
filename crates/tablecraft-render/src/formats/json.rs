//! JSON as a single object: `{"headers": [...], "rows": [[...], ...]}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Exporter, Importer};
use crate::{Table, TableError};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

#[derive(Serialize)]
struct Document<'a> {
    headers: &'a [String],
    rows: Vec<&'a [String]>,
}

/// Input side is looser: either key may be missing and cells may be any
/// scalar.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    headers: Vec<Value>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl Exporter for JsonFormat {
    fn export(&self, table: &Table) -> Result<String, TableError> {
        let doc = Document {
            headers: table.headers(),
            rows: table.rows().collect(),
        };
        Ok(serde_json::to_string(&doc)?)
    }
}

impl Importer for JsonFormat {
    fn import(&self, data: &str) -> Result<Table, TableError> {
        let value: Value = serde_json::from_str(data)?;
        if !value.is_object() {
            return Err(TableError::serialization(
                "expected a JSON object with \"headers\" and \"rows\"",
            ));
        }
        let raw: RawDocument = serde_json::from_value(value)?;

        let mut table = Table::new(raw.headers.into_iter().map(cell_text));
        for row in raw.rows {
            table.add_row(row.into_iter().map(cell_text));
        }
        Ok(table)
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
