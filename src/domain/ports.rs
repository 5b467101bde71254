use crate::domain::model::Table;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Filesystem location of `path`, for writers that need a real file (chart backends).
    fn locate(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn chart_path(&self) -> &str;
    fn field_name(&self) -> &str;
    fn threshold(&self) -> f64;
    fn row_limit(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Output: Send;

    async fn extract(&self) -> Result<Table>;
    async fn transform(&self, table: Table) -> Result<Self::Output>;
    /// Emits the output and returns the human-readable report for stdout.
    async fn load(&self, output: Self::Output) -> Result<String>;
}
