use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// extract → transform → load; the first error aborts the run.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Extracting table...");
        let table = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Loaded {} rows x {} columns",
            table.len(),
            table.columns().len()
        );

        tracing::debug!("Transforming table...");
        let output = self.pipeline.transform(table).await?;

        tracing::debug!("Emitting result...");
        let report = self.pipeline.load(output).await?;

        Ok(report)
    }
}
