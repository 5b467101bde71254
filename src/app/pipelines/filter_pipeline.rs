use super::read_table;
use crate::core::filtering::filter_over_threshold;
use crate::core::{ConfigProvider, Pipeline, Result, Storage, Table};

pub struct FilterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilterPipeline<S, C> {
    type Output = Table;

    async fn extract(&self) -> Result<Table> {
        read_table(&self.storage, self.config.output_path()).await
    }

    async fn transform(&self, table: Table) -> Result<Table> {
        let filtered = filter_over_threshold(
            &table,
            self.config.field_name(),
            self.config.threshold(),
            self.config.row_limit(),
        )?;
        tracing::info!(
            "🔎 {} rows with {} > {} (showing at most {})",
            filtered.len(),
            self.config.field_name(),
            self.config.threshold(),
            self.config.row_limit()
        );
        Ok(filtered)
    }

    async fn load(&self, filtered: Table) -> Result<String> {
        Ok(filtered.to_string())
    }
}
