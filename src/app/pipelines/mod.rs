pub mod clean_pipeline;
pub mod filter_pipeline;
pub mod stats_pipeline;
pub mod visualize_pipeline;

pub use clean_pipeline::CleanPipeline;
pub use filter_pipeline::FilterPipeline;
pub use stats_pipeline::StatsPipeline;
pub use visualize_pipeline::VisualizePipeline;

use crate::core::table_io::read_csv;
use crate::core::{Result, Storage, Table};

pub(crate) async fn read_table<S: Storage>(storage: &S, path: &str) -> Result<Table> {
    tracing::debug!("Reading CSV from: {}", path);
    let data = storage.read_file(path).await?;
    read_csv(&data)
}
