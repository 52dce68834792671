use crate::query::renderer::{Render, Renderer};
use filter_syntax::{ComparisonOp, FilterNode, LogicalOp};
use model::core::value::Value;

impl Render for FilterNode {
    fn render(&self, r: &mut Renderer) {
        match self {
            FilterNode::Comparison { field, op, value } => render_comparison(field, *op, value, r),
            FilterNode::IsNull { field } => {
                r.push_identifier(field);
                r.sql.push_str(" IS NULL");
            }
            FilterNode::Regex {
                field,
                pattern,
                case_insensitive,
            } => {
                r.push_identifier(field);
                // MySQL REGEXP follows the column collation; BINARY forces a case-sensitive match
                r.sql.push_str(if *case_insensitive {
                    " REGEXP "
                } else {
                    " REGEXP BINARY "
                });
                r.push_value(&Value::Text(pattern.clone()));
            }
            FilterNode::Logical { op, children } => {
                let sep = match op {
                    LogicalOp::And => " AND ",
                    LogicalOp::Or => " OR ",
                };
                r.push_grouped(children, sep);
            }
            FilterNode::Group(children) => r.push_grouped(children, " AND "),
        }
    }
}

fn render_comparison(field: &str, op: ComparisonOp, value: &Value, r: &mut Renderer) {
    r.push_identifier(field);
    r.sql.push(' ');
    r.sql.push_str(&op.to_string());
    r.sql.push(' ');

    if op.is_set() {
        r.sql.push('(');
        r.push_value(value);
        r.sql.push(')');
    } else {
        r.push_value(value);
    }
}
