//! Single-process analysis: the cleaned table is handed to the filter,
//! statistics and chart steps directly instead of through the CSV artifact.

use crate::adapters::chart::ChartStyle;
use crate::app::pipelines::read_table;
use crate::app::pipelines::stats_pipeline::render_summary;
use crate::app::pipelines::visualize_pipeline::emit_chart;
use crate::core::cleaning::drop_missing;
use crate::core::distribution::frequency_distribution;
use crate::core::filtering::filter_over_threshold;
use crate::core::statistics::summarize;
use crate::core::table_io::write_csv;
use crate::core::{ConfigProvider, FrequencyDistribution, Result, Storage, Summary, Table};
use std::fmt;

pub struct Workflow<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    chart: Option<ChartStyle>,
    persist: bool,
    show: bool,
}

#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub raw_rows: usize,
    pub cleaned: Table,
    pub filtered: Table,
    pub summary: Summary,
    pub distribution: FrequencyDistribution,
    pub cleaned_path: Option<String>,
    pub chart_path: Option<String>,
}

impl<S: Storage, C: ConfigProvider> Workflow<S, C> {
    pub fn new(storage: S, config: C, chart: ChartStyle) -> Self {
        Self {
            storage,
            config,
            chart: Some(chart),
            persist: true,
            show: false,
        }
    }

    /// Persist the cleaned table to `output_path` (on by default).
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn without_chart(mut self) -> Self {
        self.chart = None;
        self
    }

    pub async fn run(&self) -> Result<WorkflowReport> {
        let field = self.config.field_name();

        let raw = read_table(&self.storage, self.config.input_path()).await?;
        let cleaned = drop_missing(&raw);
        tracing::info!(
            "🧹 Cleaned {} -> {} rows",
            raw.len(),
            cleaned.len()
        );

        let cleaned_path = if self.persist {
            let data = write_csv(&cleaned)?;
            self.storage
                .write_file(self.config.output_path(), &data)
                .await?;
            Some(self.config.output_path().to_string())
        } else {
            None
        };

        let filtered = filter_over_threshold(
            &cleaned,
            field,
            self.config.threshold(),
            self.config.row_limit(),
        )?;
        let summary = summarize(&cleaned, field)?;
        let distribution = frequency_distribution(&cleaned, field)?;

        let chart_path = match &self.chart {
            Some(style) => {
                emit_chart(
                    &self.storage,
                    &distribution,
                    style,
                    self.config.chart_path(),
                    self.show,
                )
                .await?;
                Some(self.config.chart_path().to_string())
            }
            None => None,
        };

        Ok(WorkflowReport {
            raw_rows: raw.len(),
            cleaned,
            filtered,
            summary,
            distribution,
            cleaned_path,
            chart_path,
        })
    }
}

impl fmt::Display for WorkflowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cleaned_path {
            Some(path) => writeln!(f, "Cleaned data saved to '{}'.", path)?,
            None => writeln!(
                f,
                "Cleaned {} of {} rows (not persisted).",
                self.cleaned.len(),
                self.raw_rows
            )?,
        }
        writeln!(f)?;
        writeln!(f, "{}", self.filtered)?;
        writeln!(f)?;
        write!(f, "{}", render_summary(&self.summary))?;
        if let Some(path) = &self.chart_path {
            writeln!(f)?;
            write!(f, "Chart saved to '{}'.", path)?;
        }
        Ok(())
    }
}
