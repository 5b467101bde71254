//! CSV (de)serialization of [`Table`].
//!
//! Reading follows the usual dataframe conventions: the first record is the
//! header, a fixed set of tokens counts as missing, short records are padded
//! and long records are rejected. Writing emits the header and every row with
//! missing cells as empty fields; no index column is written.

use crate::domain::model::{Cell, Table};
use crate::utils::error::{AnalysisError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashSet;

/// Field values treated as missing when parsing.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw)
}

pub fn read_csv(data: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(AnalysisError::ParseError {
            line: 1,
            message: "No columns to parse from file".to_string(),
        });
    }
    let columns = dedupe_columns(headers.iter());
    let width = columns.len();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(AnalysisError::ParseError {
                line,
                message: format!("Expected {} fields, saw {}", width, record.len()),
            });
        }
        rows.push(
            record
                .iter()
                .map(|field| {
                    if is_missing(field) {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect(),
        );
    }

    tracing::debug!("Parsed CSV with {} columns and {} rows", width, rows.len());
    Ok(Table::new(columns, rows))
}

pub fn write_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.cells.iter().map(|c| c.as_deref().unwrap_or("")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalysisError::IoError(e.into_error()))
}

/// Repeated header names get `.1`, `.2`, ... suffixes in order of appearance.
fn dedupe_columns<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}
