use crate::domain::model::Table;
use crate::utils::error::{AnalysisError, Result};

pub fn resolve_column(table: &Table, field: &str) -> Result<usize> {
    table
        .column_index(field)
        .ok_or_else(|| AnalysisError::KeyMissingError {
            field: field.to_string(),
            available: table.columns().to_vec(),
        })
}

/// Parses a present cell as a number. Text that spells NaN in a form the
/// missing-value list does not cover (`NAN`, `Nan`) is not a number either.
pub fn parse_number(field: &str, row: usize, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(AnalysisError::TypeCastError {
            field: field.to_string(),
            row,
            value: raw.to_string(),
        }),
    }
}

/// Numeric view of a column as `(row index, value)`; missing cells stay `None`.
pub fn numeric_cells(table: &Table, field: &str) -> Result<Vec<(usize, Option<f64>)>> {
    let position = resolve_column(table, field)?;
    table
        .column_cells(position)
        .map(|(row, cell)| match cell {
            Some(raw) => parse_number(field, row, raw).map(|v| (row, Some(v))),
            None => Ok((row, None)),
        })
        .collect()
}

/// Present values of a numeric column, in row order.
pub fn numeric_values(table: &Table, field: &str) -> Result<Vec<f64>> {
    Ok(numeric_cells(table, field)?
        .into_iter()
        .filter_map(|(_, value)| value)
        .collect())
}
