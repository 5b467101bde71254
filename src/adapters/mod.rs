// Adapters layer: concrete implementations for external systems (filesystem, chart rendering).

pub mod chart;
pub mod storage;
