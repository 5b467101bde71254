pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AnalysisConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::{CleanPipeline, FilterPipeline, StatsPipeline, VisualizePipeline};
pub use app::workflow::{Workflow, WorkflowReport};
pub use crate::core::engine::AnalysisEngine;
pub use domain::model::{FrequencyDistribution, Summary, Table};
pub use utils::error::{AnalysisError, Result};
