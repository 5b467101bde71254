use super::read_table;
use crate::core::statistics::summarize;
use crate::core::{ConfigProvider, Pipeline, Result, Storage, Summary, Table};
use crate::domain::model::field_label;

pub struct StatsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    json: bool,
}

impl<S: Storage, C: ConfigProvider> StatsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Whole numbers keep one decimal (`30.0`), everything else prints in full.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let label = field_label(&summary.field);
    format!(
        "Mean {label}: {}\nMedian {label}: {}\nStandard Deviation of {label}: {}",
        format_value(summary.mean),
        format_value(summary.median),
        format_value(summary.std_dev),
    )
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StatsPipeline<S, C> {
    type Output = Summary;

    async fn extract(&self) -> Result<Table> {
        read_table(&self.storage, self.config.output_path()).await
    }

    async fn transform(&self, table: Table) -> Result<Summary> {
        let summary = summarize(&table, self.config.field_name())?;
        tracing::info!(
            "📊 Summarized {} values of {}",
            summary.count,
            summary.field
        );
        Ok(summary)
    }

    async fn load(&self, summary: Summary) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            Ok(render_summary(&summary))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipelines::test_support::MockStorage;
    use crate::config::AnalysisConfig;
    use crate::core::engine::AnalysisEngine;
    use crate::utils::error::AnalysisError;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(30.0), "30.0");
        assert_eq!(format_value(7.5), "7.5");
        assert_eq!(format_value(-2.0), "-2.0");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[tokio::test]
    async fn test_stats_report() {
        let storage = MockStorage::new()
            .with_file("cleaned_data.csv", "age\n10\n20\n")
            .await;
        let report = AnalysisEngine::new(StatsPipeline::new(storage, AnalysisConfig::default()))
            .run()
            .await
            .unwrap();

        assert_eq!(
            report,
            "Mean Age: 15.0\nMedian Age: 15.0\nStandard Deviation of Age: 5.0"
        );
    }

    #[tokio::test]
    async fn test_stats_json_report() {
        let storage = MockStorage::new()
            .with_file("cleaned_data.csv", "age\n10\n20\n")
            .await;
        let pipeline = StatsPipeline::new(storage, AnalysisConfig::default()).with_json(true);
        let report = AnalysisEngine::new(pipeline).run().await.unwrap();

        let summary: Summary = serde_json::from_str(&report).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 15.0);
        assert_eq!(summary.std_dev, 5.0);
    }

    #[tokio::test]
    async fn test_stats_on_header_only_file() {
        let storage = MockStorage::new()
            .with_file("cleaned_data.csv", "name,age\n")
            .await;
        let result = AnalysisEngine::new(StatsPipeline::new(storage, AnalysisConfig::default()))
            .run()
            .await;

        assert!(matches!(result, Err(AnalysisError::EmptyDataError { .. })));
    }
}
