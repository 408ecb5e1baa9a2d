//! XLSX loader, first worksheet only.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::dataset::{CellValue, Dataset};
use crate::error::ExtractError;

pub(crate) fn load_xlsx(path: &Path) -> Result<Dataset, ExtractError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ExtractError::Workbook(format!("failed to open workbook: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExtractError::Workbook("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ExtractError::Workbook(format!("failed to read sheet {sheet_name}: {e}")))?;

    let mut rows_iter = range.rows();

    let headers: Vec<String> = rows_iter
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| cell_value(cell).as_text().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    let rows = rows_iter
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    tracing::debug!(sheet = %sheet_name, "read first worksheet");
    Ok(Dataset::new(headers, rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // Excel serial date number
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
    }
}
