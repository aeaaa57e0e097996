pub mod constants;
pub mod error;
pub mod generator;
pub mod model;
pub mod orchestrator;
