//! Defines the core rendering trait and context for converting a filter
//! tree to SQL.

use crate::query::dialect::Dialect;
use model::core::value::Value;

pub mod filter;

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and, in parameterized mode, the bound
/// values, and provides access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    inline: bool,
}

impl<'a> Renderer<'a> {
    /// Literals are written into the SQL text.
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            inline: true,
        }
    }

    /// Literals are replaced by placeholders and collected in `params`.
    pub fn parameterized(dialect: &'a dyn Dialect) -> Self {
        Self {
            inline: false,
            ..Self::new(dialect)
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn push_value(&mut self, value: &Value) {
        if let Value::List(items) = value {
            self.push_value_list(items);
        } else if self.inline {
            let literal = self.dialect.render_value(value);
            self.sql.push_str(&literal);
        } else {
            self.add_param(value.clone());
        }
    }

    /// Writes each list item separated by `, `; one placeholder per item
    /// when parameterized.
    pub fn push_value_list(&mut self, values: &[Value]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value);
        }
    }

    /// Renders `items` joined by `sep`, wrapped in parentheses.
    pub fn push_grouped<T: Render>(&mut self, items: &[T], sep: &str) {
        self.sql.push('(');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            item.render(self);
        }
        self.sql.push(')');
    }
}
