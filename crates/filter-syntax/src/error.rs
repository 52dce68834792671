use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// `$not`, `$nor` or any `$`-prefixed key outside the operator catalog.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Malformed filter at `{path}`: {reason}")]
    MalformedFilter { path: String, reason: String },

    #[error("Filter nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Invalid filter JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl FilterError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::MalformedFilter {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
