use crate::core::column::numeric_cells;
use crate::domain::model::Table;
use crate::utils::error::Result;

pub const DEFAULT_FIELD: &str = "age";
pub const DEFAULT_THRESHOLD: f64 = 30.0;
pub const DEFAULT_ROW_LIMIT: usize = 5;

/// Rows whose `field` is strictly greater than `threshold`, in their original
/// order, truncated to the first `limit`. Missing cells never qualify.
pub fn filter_over_threshold(
    table: &Table,
    field: &str,
    threshold: f64,
    limit: usize,
) -> Result<Table> {
    let cells = numeric_cells(table, field)?;

    let rows = table
        .rows()
        .iter()
        .zip(cells)
        .filter(|(_, (_, value))| matches!(value, Some(v) if *v > threshold))
        .map(|(row, _)| row.clone())
        .take(limit)
        .collect();

    Ok(table.with_rows(rows))
}
