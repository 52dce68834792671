use super::operator::{ComparisonOp, LogicalOp};
use model::core::value::Value;
use serde::{Deserialize, Serialize};

/// A validated filter tree.
///
/// Produced by [`crate::builder::FilterBuilder`] from a raw document, or
/// assembled directly by callers that already know the shape of their
/// predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterNode {
    /// `field <op> value`; for `$in`/`$nin` the value is a [`Value::List`].
    Comparison {
        field: String,
        op: ComparisonOp,
        value: Value,
    },

    IsNull {
        field: String,
    },

    /// `field REGEXP pattern`, case sensitive unless the `i` flag was given.
    Regex {
        field: String,
        pattern: String,
        case_insensitive: bool,
    },

    /// An explicit `$and`/`$or` of 1+ sub-filters. Always parenthesized.
    Logical {
        op: LogicalOp,
        children: Vec<FilterNode>,
    },

    /// The implicit conjunction of the keys of one mapping. Only built with
    /// two or more children; a single key stands on its own.
    Group(Vec<FilterNode>),
}

impl FilterNode {
    pub fn comparison(field: impl Into<String>, op: ComparisonOp, value: impl Into<Value>) -> Self {
        FilterNode::Comparison {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::comparison(field, ComparisonOp::Eq, value)
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        FilterNode::IsNull {
            field: field.into(),
        }
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterNode::Logical {
            op: LogicalOp::And,
            children,
        }
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterNode::Logical {
            op: LogicalOp::Or,
            children,
        }
    }

    /// Implicit conjunction of sibling keys; a lone node is returned as is.
    pub fn group(mut nodes: Vec<FilterNode>) -> Self {
        if nodes.len() == 1 {
            nodes.remove(0)
        } else {
            FilterNode::Group(nodes)
        }
    }

    /// Return a deduplicated list of all columns referenced in this filter.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = match self {
            FilterNode::Comparison { field, .. }
            | FilterNode::IsNull { field }
            | FilterNode::Regex { field, .. } => vec![field.clone()],
            FilterNode::Logical { children, .. } | FilterNode::Group(children) => {
                children.iter().flat_map(FilterNode::columns).collect()
            }
        };
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}
