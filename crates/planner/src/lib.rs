//! Compiles document-style filters into SQL `WHERE` expressions.
//!
//! ```text
//! {"age": {"$gte": 18}, "$or": [{"role": "admin"}, {"banned": null}]}
//! => (`age` >= 18 AND (`role` = "admin" OR `banned` IS NULL))
//! ```

pub mod config;
pub mod filter;
pub mod query;
pub mod quote;

pub use config::{CompilerConfig, ConfigError};
pub use filter::{
    SqlFilter, compile, compile_parameterized, compile_str, compile_where, compile_with_config,
    render, render_parameterized,
};
pub use quote::{
    escape, render_identifier, render_identifiers, render_table, render_value, render_values,
};
