// Application layer: the runnable analysis units built on core operations and ports.

pub mod pipelines;
pub mod workflow;
