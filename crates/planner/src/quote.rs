//! Free-standing quoting helpers for callers building SQL around a compiled
//! filter (column lists, table names). All of them use the [`MySql`] profile.

use crate::query::dialect::{Dialect, MySql};
use model::core::value::Value;

pub use crate::query::escape::escape;

pub fn render_identifier(name: &str) -> String {
    MySql.quote_identifier(name)
}

pub fn render_identifiers(names: &[&str]) -> Vec<String> {
    MySql.quote_identifiers(names)
}

pub fn render_table(name: &str) -> String {
    MySql.quote_table(name)
}

pub fn render_value(value: &Value) -> String {
    MySql.render_value(value)
}

pub fn render_values(values: &[Value]) -> Vec<String> {
    MySql.render_values(values)
}
