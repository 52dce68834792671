use filter_syntax::{DEFAULT_MAX_DEPTH, FilterBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{var}' with value '{value}' as {expected_type}")]
    EnvParse {
        var: String,
        value: String,
        expected_type: String,
    },

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Knobs for filter compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCompilerConfig")]
pub struct CompilerConfig {
    /// Maximum number of nested filter objects, counting the root.
    pub max_depth: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Unvalidated form read by serde; missing keys keep their defaults.
#[derive(Deserialize)]
struct RawCompilerConfig {
    max_depth: Option<usize>,
}

impl TryFrom<RawCompilerConfig> for CompilerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCompilerConfig) -> Result<Self, Self::Error> {
        match raw.max_depth {
            Some(max_depth) => Self::default().with_max_depth(max_depth),
            None => Ok(Self::default()),
        }
    }
}

impl CompilerConfig {
    pub const MAX_DEPTH_VAR: &'static str = "FILTER_MAX_DEPTH";

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::MAX_DEPTH_VAR) {
            let max_depth = raw.trim().parse::<usize>().map_err(|_| ConfigError::EnvParse {
                var: Self::MAX_DEPTH_VAR.to_string(),
                value: raw.clone(),
                expected_type: "usize".to_string(),
            })?;
            config = config.with_max_depth(max_depth)?;
        }
        Ok(config)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    pub fn builder(&self) -> FilterBuilder {
        FilterBuilder::new(self.max_depth)
    }
}
