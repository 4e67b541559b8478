pub mod config;
pub mod error;
pub mod grid;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::AnalysisConfig;
pub use error::{AssemblyError, GridError, HexDomainError, InputError, Result, WalkError};
