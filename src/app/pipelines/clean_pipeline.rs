use super::read_table;
use crate::core::cleaning::drop_missing;
use crate::core::table_io::write_csv;
use crate::core::{ConfigProvider, Pipeline, Result, Storage, Table};

/// Drops incomplete rows from the raw input and persists the cleaned artifact.
pub struct CleanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CleanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CleanPipeline<S, C> {
    type Output = Table;

    async fn extract(&self) -> Result<Table> {
        read_table(&self.storage, self.config.input_path()).await
    }

    async fn transform(&self, table: Table) -> Result<Table> {
        let cleaned = drop_missing(&table);
        tracing::info!(
            "🧹 Dropped {} of {} rows with missing values",
            table.len() - cleaned.len(),
            table.len()
        );
        Ok(cleaned)
    }

    async fn load(&self, cleaned: Table) -> Result<String> {
        let data = write_csv(&cleaned)?;
        // 既有檔案直接覆寫
        self.storage
            .write_file(self.config.output_path(), &data)
            .await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), self.config.output_path());

        Ok(format!(
            "Cleaned data saved to '{}'.",
            self.config.output_path()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipelines::test_support::MockStorage;
    use crate::config::AnalysisConfig;
    use crate::core::engine::AnalysisEngine;
    use crate::utils::error::AnalysisError;

    const RAW: &str = "name,age,city\nAnn,31,Oslo\nBob,,Rome\nCid,45,NA\nDee,29,Kyiv\n";

    #[tokio::test]
    async fn test_clean_writes_cleaned_artifact() {
        let storage = MockStorage::new().with_file("my_data.csv", RAW).await;
        let pipeline = CleanPipeline::new(storage.clone(), AnalysisConfig::default());

        let report = AnalysisEngine::new(pipeline).run().await.unwrap();

        assert_eq!(report, "Cleaned data saved to 'cleaned_data.csv'.");
        assert_eq!(
            storage.get_file("cleaned_data.csv").await.unwrap(),
            "name,age,city\nAnn,31,Oslo\nDee,29,Kyiv\n"
        );
    }

    #[tokio::test]
    async fn test_clean_is_idempotent_on_its_output() {
        let storage = MockStorage::new().with_file("my_data.csv", RAW).await;
        AnalysisEngine::new(CleanPipeline::new(storage.clone(), AnalysisConfig::default()))
            .run()
            .await
            .unwrap();
        let first = storage.get_file("cleaned_data.csv").await.unwrap();

        let config = AnalysisConfig {
            input_path: "cleaned_data.csv".to_string(),
            ..AnalysisConfig::default()
        };
        AnalysisEngine::new(CleanPipeline::new(storage.clone(), config))
            .run()
            .await
            .unwrap();

        assert_eq!(storage.get_file("cleaned_data.csv").await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_clean_missing_input() {
        let pipeline = CleanPipeline::new(MockStorage::new(), AnalysisConfig::default());
        let result = AnalysisEngine::new(pipeline).run().await;
        assert!(matches!(result, Err(AnalysisError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_clean_malformed_input() {
        let storage = MockStorage::new()
            .with_file("my_data.csv", "name,age\nAnn,31,extra\n")
            .await;
        let pipeline = CleanPipeline::new(storage.clone(), AnalysisConfig::default());

        let result = AnalysisEngine::new(pipeline).run().await;
        assert!(matches!(result, Err(AnalysisError::ParseError { .. })));
        assert!(storage.get_file("cleaned_data.csv").await.is_none());
    }
}
