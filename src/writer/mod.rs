//! JSON rendering and destination file output

use crate::convert::config::ConvertConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::reader::Dataset;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

/// Build the JSON array of record objects for a dataset.
///
/// Object keys follow header order (serde_json is built with preserve_order).
/// Values are the raw field strings with no type coercion. Short rows are
/// padded with empty strings; tokens beyond the last header are dropped.
pub fn dataset_to_value(dataset: &Dataset) -> Value {
    let mut rows = Vec::with_capacity(dataset.record_count());

    for record in &dataset.records {
        let mut object = Map::with_capacity(dataset.field_count());
        for (index, name) in dataset.header.iter().enumerate() {
            let value = record.get(index).map(String::as_str).unwrap_or("");
            object.insert(name.clone(), Value::String(value.to_string()));
        }
        rows.push(Value::Object(object));
    }

    Value::Array(rows)
}

/// Render a dataset as JSON text.
///
/// Pretty output uses the configured indent width and carries no trailing
/// newline, matching the destination format of the reference conversion.
pub fn render(dataset: &Dataset, config: &ConvertConfig) -> ConvertResult<String> {
    let value = dataset_to_value(dataset);

    if !config.pretty {
        return serde_json::to_string(&value).map_err(|e| ConvertError::Other(e.into()));
    }

    let indent = vec![b' '; config.indent_size as usize];
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ConvertError::Other(e.into()))?;

    String::from_utf8(buffer).map_err(|e| ConvertError::Other(e.into()))
}

/// Write rendered JSON to the destination path, truncating any existing file.
///
/// The handle is scoped to this call and released on every exit path. A
/// failure partway through leaves whatever was written; there is no rollback.
pub fn write_json(path: &Path, content: &str) -> ConvertResult<()> {
    std::fs::write(path, content).map_err(|e| ConvertError::write_error(e, path))
}
