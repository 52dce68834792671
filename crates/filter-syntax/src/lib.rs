//! Typed representation of document-style filters and the builder that
//! produces it from JSON.

pub mod ast;
pub mod builder;
pub mod error;

pub use ast::node::FilterNode;
pub use ast::operator::{ComparisonOp, LogicalOp};
pub use builder::{DEFAULT_MAX_DEPTH, FilterBuilder, parse, parse_str};
pub use error::{FilterError, Result};
