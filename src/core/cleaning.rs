use crate::domain::model::Table;

/// Keeps only the rows where every column has a value.
pub fn drop_missing(table: &Table) -> Table {
    let rows = table
        .rows()
        .iter()
        .filter(|row| row.cells.iter().all(Option::is_some))
        .cloned()
        .collect();
    table.with_rows(rows)
}
