//! JSON loader.
//!
//! Accepted layouts:
//! - an array of objects (one row per object, columns ordered by first appearance)
//! - an array of scalars (a single `text` column)
//! - an object of columns, each either an array or an object keyed by row label

use std::path::Path;

use serde_json::{Map, Value};

use crate::dataset::{CellValue, Dataset, TEXT_COLUMN};
use crate::error::ExtractError;

pub(crate) fn load_json(path: &Path) -> Result<Dataset, ExtractError> {
    let content = super::read_to_string(path)?;
    parse_json(&content)
}

pub(crate) fn parse_json(content: &str) -> Result<Dataset, ExtractError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(items) if items.iter().all(Value::is_object) => Ok(from_records(&items)),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            let rows = items.iter().map(|v| vec![cell_value(v)]).collect();
            Ok(Dataset::new(vec![TEXT_COLUMN.to_string()], rows))
        }
        Value::Array(_) => Err(ExtractError::JsonLayout(
            "array must hold only objects or only scalars".to_string(),
        )),
        Value::Object(columns) => from_columns(&columns),
        other => Err(ExtractError::JsonLayout(format!(
            "expected an array or object at top level, found {}",
            kind(&other)
        ))),
    }
}

fn from_records(items: &[Value]) -> Dataset {
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(obj) = item {
            for key in obj.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|h| item.get(h).map_or(CellValue::Null, cell_value))
                .collect()
        })
        .collect();

    Dataset::new(headers, rows)
}

fn from_columns(columns: &Map<String, Value>) -> Result<Dataset, ExtractError> {
    let headers: Vec<String> = columns.keys().cloned().collect();

    if columns.values().all(Value::is_array) {
        let height = columns
            .values()
            .filter_map(Value::as_array)
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let rows = (0..height)
            .map(|i| {
                columns
                    .values()
                    .map(|col| col.get(i).map_or(CellValue::Null, cell_value))
                    .collect()
            })
            .collect();
        return Ok(Dataset::new(headers, rows));
    }

    if columns.values().all(Value::is_object) {
        let mut labels: Vec<String> = Vec::new();
        for col in columns.values().filter_map(Value::as_object) {
            for label in col.keys() {
                if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        sort_row_labels(&mut labels);
        let rows = labels
            .iter()
            .map(|label| {
                columns
                    .values()
                    .map(|col| col.get(label).map_or(CellValue::Null, cell_value))
                    .collect()
            })
            .collect();
        return Ok(Dataset::new(headers, rows));
    }

    Err(ExtractError::JsonLayout(
        "object columns must all be arrays or all be objects".to_string(),
    ))
}

/// Order row labels numerically when they are all integers (`"0"`, `"1"`, ...).
fn sort_row_labels(labels: &mut [String]) {
    if labels.iter().all(|l| l.parse::<u64>().is_ok()) {
        labels.sort_by_key(|l| l.parse::<u64>().unwrap_or(u64::MAX));
    }
}

fn cell_value(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map(CellValue::Int)
            .or_else(|| n.as_f64().map(CellValue::Float))
            .unwrap_or(CellValue::Null),
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
