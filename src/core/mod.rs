pub mod cleaning;
pub mod column;
pub mod distribution;
pub mod engine;
pub mod filtering;
pub mod statistics;
pub mod table_io;

pub use crate::domain::model::{FrequencyDistribution, Summary, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
