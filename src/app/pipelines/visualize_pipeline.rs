use super::read_table;
use crate::adapters::chart::{present_chart, render_bar_chart, ChartStyle};
use crate::core::distribution::frequency_distribution;
use crate::core::{ConfigProvider, FrequencyDistribution, Pipeline, Result, Storage, Table};

pub struct VisualizePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    style: ChartStyle,
    show: bool,
}

impl<S: Storage, C: ConfigProvider> VisualizePipeline<S, C> {
    pub fn new(storage: S, config: C, style: ChartStyle) -> Self {
        Self {
            storage,
            config,
            style,
            show: false,
        }
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}

/// Renders the chart to the storage location of `chart_path` and optionally opens it.
pub(crate) async fn emit_chart<S: Storage>(
    storage: &S,
    distribution: &FrequencyDistribution,
    style: &ChartStyle,
    chart_path: &str,
    show: bool,
) -> Result<()> {
    let full_path = storage.locate(chart_path);
    if let Some(parent) = full_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    render_bar_chart(distribution, style, &full_path)?;
    tracing::info!("🖼️ Chart written to {}", full_path.display());

    if show {
        if let Err(e) = present_chart(&full_path) {
            tracing::warn!("⚠️ Could not open chart viewer: {}", e);
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VisualizePipeline<S, C> {
    type Output = FrequencyDistribution;

    async fn extract(&self) -> Result<Table> {
        read_table(&self.storage, self.config.output_path()).await
    }

    async fn transform(&self, table: Table) -> Result<FrequencyDistribution> {
        let distribution = frequency_distribution(&table, self.config.field_name())?;
        tracing::debug!(
            "{} distinct values of {}",
            distribution.bins.len(),
            distribution.field
        );
        Ok(distribution)
    }

    async fn load(&self, distribution: FrequencyDistribution) -> Result<String> {
        emit_chart(
            &self.storage,
            &distribution,
            &self.style,
            self.config.chart_path(),
            self.show,
        )
        .await?;

        Ok(format!("Chart saved to '{}'.", self.config.chart_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chart::fonts_available;
    use crate::adapters::storage::LocalStorage;
    use crate::app::pipelines::test_support::MockStorage;
    use crate::config::AnalysisConfig;
    use crate::core::engine::AnalysisEngine;
    use crate::utils::error::AnalysisError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_visualize_without_field() {
        let storage = MockStorage::new()
            .with_file("cleaned_data.csv", "name\nAnn\n")
            .await;
        let config = AnalysisConfig::default();
        let pipeline = VisualizePipeline::new(storage, config.clone(), config.chart_style());

        let result = AnalysisEngine::new(pipeline).run().await;
        assert!(matches!(result, Err(AnalysisError::KeyMissingError { .. })));
    }

    #[tokio::test]
    async fn test_visualize_empty_column_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("cleaned_data.csv"), "age\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let config = AnalysisConfig::default();
        let pipeline = VisualizePipeline::new(storage, config.clone(), config.chart_style());

        let result = AnalysisEngine::new(pipeline).run().await;
        assert!(matches!(result, Err(AnalysisError::EmptyDataError { .. })));
        assert!(!temp_dir.path().join("age_distribution.png").exists());
    }

    #[tokio::test]
    async fn test_visualize_writes_png() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font installed");
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("cleaned_data.csv"),
            "name,age\nAnn,20\nBob,20\nCid,25\n",
        )
        .unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let config = AnalysisConfig::default();
        let pipeline = VisualizePipeline::new(storage, config.clone(), config.chart_style());

        let report = AnalysisEngine::new(pipeline).run().await.unwrap();
        assert_eq!(report, "Chart saved to 'age_distribution.png'.");
        assert!(temp_dir.path().join("age_distribution.png").exists());
    }
}
