use crate::{
    config::CompilerConfig,
    query::{
        dialect::{Dialect, MySql},
        renderer::{Render, Renderer},
    },
};
use filter_syntax::{FilterNode, Result};
use model::core::value::Value;
use serde_json::Value as Json;
use tracing::debug;

/// Compiles a filter document into a SQL boolean expression with inline
/// literals, e.g. `` (`a` = 1 AND `b` IS NULL) ``.
///
/// The result has no leading keyword; see [`compile_where`] for that.
pub fn compile(doc: &Json) -> Result<String> {
    compile_with_config(doc, &CompilerConfig::default())
}

pub fn compile_with_config(doc: &Json, config: &CompilerConfig) -> Result<String> {
    let node = config.builder().build(doc)?;
    let sql = render(&node, &MySql);
    debug!(max_depth = config.max_depth, len = sql.len(), "compiled filter");
    Ok(sql)
}

/// Same as [`compile`] for filter JSON text.
pub fn compile_str(input: &str) -> Result<String> {
    let doc: Json = serde_json::from_str(input)?;
    compile(&doc)
}

/// Compiles a filter into ` WHERE <expr>`, ready to append to a statement.
pub fn compile_where(doc: &Json) -> Result<String> {
    let filter = SqlFilter::from_document(doc, &CompilerConfig::default())?;
    Ok(filter.to_sql(&MySql))
}

/// Compiles a filter with every literal replaced by a `?` placeholder.
/// Returns the expression and the values to bind, in placeholder order.
pub fn compile_parameterized(doc: &Json) -> Result<(String, Vec<Value>)> {
    let node = CompilerConfig::default().builder().build(doc)?;
    let (sql, params) = render_parameterized(&node, &MySql);
    debug!(params = params.len(), "compiled parameterized filter");
    Ok((sql, params))
}

/// Renders an already built filter tree with inline literals.
pub fn render(node: &FilterNode, dialect: &dyn Dialect) -> String {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish().0
}

pub fn render_parameterized(node: &FilterNode, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::parameterized(dialect);
    node.render(&mut renderer);
    renderer.finish()
}

/// An optional filter attached to a statement.
#[derive(Debug, Clone, Default)]
pub struct SqlFilter {
    pub expr: Option<FilterNode>,
}

impl SqlFilter {
    pub fn new() -> Self {
        SqlFilter { expr: None }
    }

    pub fn with_expr(expr: FilterNode) -> Self {
        SqlFilter { expr: Some(expr) }
    }

    pub fn from_document(doc: &Json, config: &CompilerConfig) -> Result<Self> {
        let expr = config.builder().build(doc)?;
        Ok(SqlFilter::with_expr(expr))
    }

    /// Render " WHERE ..." or empty string if no expr.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        self.expr
            .as_ref()
            .map(|e| format!(" WHERE {}", render(e, dialect)))
            .unwrap_or_default()
    }

    pub fn columns(&self) -> Vec<String> {
        self.expr.as_ref().map(|e| e.columns()).unwrap_or_default()
    }
}
