//! Defines the `Dialect` trait for database-specific SQL syntax.

use super::escape::escape;
use model::core::value::Value;

/// Timestamp literal layout, hour without zero padding (`2016-01-02 3:04:05`).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %-H:%M:%S";

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Table names share the identifier syntax unless a dialect says otherwise.
    fn quote_table(&self, table: &str) -> String {
        self.quote_identifier(table)
    }

    fn quote_identifiers(&self, idents: &[&str]) -> Vec<String> {
        idents.iter().map(|i| self.quote_identifier(i)).collect()
    }

    /// Renders a value as an inline SQL literal. Lists render element-wise
    /// and are joined with `, `; never fails.
    fn render_value(&self, value: &Value) -> String;

    fn render_values(&self, values: &[Value]) -> Vec<String> {
        values.iter().map(|v| self.render_value(v)).collect()
    }

    /// Returns the placeholder for a parameterized query.
    fn get_placeholder(&self, index: usize) -> String;
}

/// Backtick identifiers, double-quoted string literals, bare `true`/`false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        // A doubled backtick is a literal backtick inside a quoted identifier
        format!("`{}`", escape(ident).replace('`', "``"))
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Float(v) if v.is_finite() => v.to_string(),
            // NaN and infinities have no literal form
            Value::Float(_) => "NULL".into(),
            Value::Boolean(v) => v.to_string(),
            Value::Text(s) => quote_string(s),
            Value::Timestamp(ts) => quote_string(&ts.format(DATETIME_FORMAT).to_string()),
            Value::List(items) => self.render_values(items).join(", "),
            Value::Null => "NULL".into(),
        }
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }
}

fn quote_string(s: &str) -> String {
    format!("\"{}\"", escape(s))
}
