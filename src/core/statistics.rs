use crate::core::column::numeric_values;
use crate::domain::model::{Summary, Table};
use crate::utils::error::{AnalysisError, Result};

/// Mean, median and population standard deviation of a numeric column.
///
/// Missing cells are skipped. A column with no values is rejected with
/// [`AnalysisError::EmptyDataError`] instead of yielding NaN.
pub fn summarize(table: &Table, field: &str) -> Result<Summary> {
    let mut values = numeric_values(table, field)?;
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataError {
            field: field.to_string(),
            operation: "summarize".to_string(),
        });
    }

    let mean = mean(&values);
    let std_dev = population_std_dev(&values, mean);
    values.sort_by(f64::total_cmp);
    let median = median_of_sorted(&values);

    Ok(Summary {
        field: field.to_string(),
        count: values.len(),
        mean,
        median,
        std_dev,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

// divisor is the count, not count - 1
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
