//! Input table reader
//!
//! Spreadsheets (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`) are read with
//! `calamine`, `.csv` files with `csv`. The first row is the header row.

use crate::domain::context::ResultExt;
use crate::domain::{HarvestError, InputRow, Result};
use calamine::{open_workbook_auto, DataType, Reader};
use std::path::Path;

/// Header row plus data rows, every cell rendered as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl InputTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Position of a header, matched exactly after trimming
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Cells of one column, top to bottom; short rows yield empty cells
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// One [`InputRow`] per data row, in order
    ///
    /// Row indices start at zero and are the resume cursor, so blank cells are
    /// kept rather than filtered out.
    pub fn handles(&self, column: usize) -> Vec<InputRow> {
        self.column_values(column)
            .enumerate()
            .map(|(index, value)| InputRow::new(index, value.trim()))
            .collect()
    }
}

/// Reads the input table from `path`
///
/// `sheet` selects a worksheet by name; the first worksheet is used when it
/// is `None`. It is ignored for CSV files.
///
/// # Errors
///
/// Returns `HarvestError::Input` if the file is missing, cannot be parsed,
/// or the named sheet does not exist.
pub fn read_table(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<InputTable> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HarvestError::Input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let table = match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => read_workbook(path, sheet),
        other => Err(HarvestError::Input(format!(
            "Unsupported input format '{other}'; expected .xlsx, .xls, .ods or .csv"
        ))),
    }
    .with_context(|| format!("Reading {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "Loaded input table"
    );

    Ok(table)
}

fn read_csv(path: &Path) -> Result<InputTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| HarvestError::Input(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| HarvestError::Input(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| HarvestError::Input(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(InputTable::new(headers, rows))
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<InputTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| HarvestError::Input(e.to_string()))?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook.worksheet_range_at(0),
    };

    let range = match range {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(HarvestError::Input(e.to_string())),
        None => {
            return Err(HarvestError::Input(match sheet {
                Some(name) => format!("Worksheet '{name}' not found"),
                None => "Workbook has no worksheets".to_string(),
            }))
        }
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

    let headers = rows.next().unwrap_or_default();
    Ok(InputTable::new(headers, rows.collect()))
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::DateTime(dt) => dt.to_string(),
        DataType::DateTimeIso(dt) => dt.clone(),
        DataType::Duration(d) => d.to_string(),
        DataType::DurationIso(d) => d.clone(),
        DataType::Error(_) => String::new(),
    }
}
