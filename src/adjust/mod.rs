pub mod lookup;
pub mod normal;
pub mod rescale;
pub mod stats;

use thiserror::Error;

use crate::model::config::ConfigError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdjustError {
    #[error("no valid scores available")]
    EmptyInput,
    #[error("scores have zero variance; standardization is undefined")]
    DegenerateInput,
    #[error("invalid adjustment configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
