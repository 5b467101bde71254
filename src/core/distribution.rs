use crate::core::column::{parse_number, resolve_column};
use crate::domain::model::{Bin, FrequencyDistribution, Table};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Counts rows per distinct value of `field`, ordered by ascending value.
///
/// When every present value parses as a number the bins are grouped and
/// ordered numerically (`"20"` and `"20.0"` share a bin); otherwise they are
/// grouped by raw text in lexicographic order. Missing cells are not counted.
pub fn frequency_distribution(table: &Table, field: &str) -> Result<FrequencyDistribution> {
    let position = resolve_column(table, field)?;
    let present: Vec<(usize, &str)> = table
        .column_cells(position)
        .filter_map(|(row, cell)| cell.map(|raw| (row, raw)))
        .collect();

    let numeric: Option<Vec<f64>> = present
        .iter()
        .map(|(row, raw)| parse_number(field, *row, raw).ok())
        .collect();

    let bins = match numeric {
        Some(values) => numeric_bins(values),
        None => text_bins(present.iter().map(|(_, raw)| *raw)),
    };

    Ok(FrequencyDistribution {
        field: field.to_string(),
        bins,
    })
}

fn numeric_bins(mut values: Vec<f64>) -> Vec<Bin> {
    values.sort_by(f64::total_cmp);

    let mut bins: Vec<(f64, usize)> = Vec::new();
    for value in values {
        match bins.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => bins.push((value, 1)),
        }
    }

    bins.into_iter()
        .map(|(value, count)| Bin {
            label: value.to_string(),
            count,
        })
        .collect()
}

fn text_bins<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Bin> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| Bin {
            label: label.to_string(),
            count,
        })
        .collect()
}
