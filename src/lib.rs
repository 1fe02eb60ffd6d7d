pub mod config;
pub mod domain;
pub mod error;
pub mod scenario;
pub mod telemetry;

pub use error::{Result, ScenarioError};
