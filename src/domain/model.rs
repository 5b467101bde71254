use serde::{Deserialize, Serialize};
use std::fmt;

/// Display form of a column name: `age` becomes `Age`.
pub fn field_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single cell: `None` marks a missing value, `Some` keeps the raw text as read.
pub type Cell = Option<String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Position of the row in the table it was first read from.
    pub index: usize,
    pub cells: Vec<Cell>,
}

/// Ordered rows sharing one column set.
///
/// Every transformation returns a new `Table`; rows keep their original
/// `index` so filtered output can still be traced back to the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table whose rows are numbered in order. Short rows are padded
    /// with missing cells and long rows are truncated to the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut cells)| {
                cells.resize(width, None);
                Row { index, cells }
            })
            .collect();
        Self { columns, rows }
    }

    /// Convenience constructor for literal data; empty strings become missing cells.
    pub fn from_strs(columns: &[&str], rows: &[&[&str]]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                    .collect()
            })
            .collect();
        Self::new(columns, rows)
    }

    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates `(row index, cell)` pairs of one column.
    pub fn column_cells(
        &self,
        position: usize,
    ) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        self.rows
            .iter()
            .map(move |row| (row.index, row.cells.get(position).and_then(|c| c.as_deref())))
    }
}

impl fmt::Display for Table {
    /// Tabular layout with the row index in front, values right-aligned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty DataFrame")?;
            writeln!(f, "Columns: [{}]", self.columns.join(", "))?;
            return write!(f, "Index: []");
        }

        let index_labels: Vec<String> = self.rows.iter().map(|r| r.index.to_string()).collect();
        let index_width = index_labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let rendered: Vec<Vec<&str>> = self
            .rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.as_deref().unwrap_or("NaN")).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rendered
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }

        for (label, row) in index_labels.iter().zip(&rendered) {
            writeln!(f)?;
            write!(f, "{:<width$}", label, width = index_width)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", value, width = *width)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub label: String,
    pub count: usize,
}

/// Occurrence count per distinct value, ordered by ascending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    pub field: String,
    pub bins: Vec<Bin>,
}

impl FrequencyDistribution {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bins.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub field: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("age"), "Age");
        assert_eq!(field_label("ölçü"), "Ölçü");
        assert_eq!(field_label(""), "");
    }

    #[test]
    fn test_new_pads_short_rows() {
        let table = Table::new(
            vec!["name".to_string(), "age".to_string()],
            vec![vec![Some("Ann".to_string())]],
        );
        assert_eq!(table.rows()[0].cells, vec![Some("Ann".to_string()), None]);
        assert_eq!(table.rows()[0].index, 0);
    }

    #[test]
    fn test_display_aligns_columns_with_index() {
        let table = Table::from_strs(&["name", "age"], &[&["Ann", "31"], &["Bartholomew", "4"]]);
        let expected = "          name  age\n0          Ann   31\n1  Bartholomew    4";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_display_empty_table() {
        let table = Table::from_strs(&["name", "age"], &[]);
        assert_eq!(
            table.to_string(),
            "Empty DataFrame\nColumns: [name, age]\nIndex: []"
        );
    }
}
