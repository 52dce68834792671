use filter_syntax::FilterError;
use planner::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter input: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Failed to parse the input as JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Failed to compile the filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Invalid compiler configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid env file: {0}")]
    EnvFile(String),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
