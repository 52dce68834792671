use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys starting with this character are operators, everything else is a field.
pub const OPERATOR_SIGIL: char = '$';

/// Column-to-value comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
    In,
    Nin,
}

impl ComparisonOp {
    /// The document keyword, e.g. `$gte`.
    pub fn keyword(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "$eq",
            ComparisonOp::Gt => "$gt",
            ComparisonOp::Gte => "$gte",
            ComparisonOp::Lt => "$lt",
            ComparisonOp::Lte => "$lte",
            ComparisonOp::Ne => "$ne",
            ComparisonOp::In => "$in",
            ComparisonOp::Nin => "$nin",
        }
    }

    /// `$in` and `$nin` compare against a list rather than a single value.
    pub fn is_set(&self) -> bool {
        matches!(self, ComparisonOp::In | ComparisonOp::Nin)
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Eq => write!(f, "="),
            ComparisonOp::Gt => write!(f, ">"),
            ComparisonOp::Gte => write!(f, ">="),
            ComparisonOp::Lt => write!(f, "<"),
            ComparisonOp::Lte => write!(f, "<="),
            ComparisonOp::Ne => write!(f, "!="),
            ComparisonOp::In => write!(f, "IN"),
            ComparisonOp::Nin => write!(f, "NOT IN"),
        }
    }
}

/// Boolean combinators over sibling filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "$and",
            LogicalOp::Or => "$or",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Comparison(ComparisonOp),
    Logical(LogicalOp),
    Regex,
    /// Flags for a sibling `$regex`
    Options,
}

/// A filter document key after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Operator(Operator),
    Field(&'a str),
}

impl<'a> Key<'a> {
    pub fn classify(raw: &'a str) -> Result<Self> {
        if !raw.starts_with(OPERATOR_SIGIL) {
            return Ok(Key::Field(raw));
        }

        let op = match raw {
            "$eq" => Operator::Comparison(ComparisonOp::Eq),
            "$gt" => Operator::Comparison(ComparisonOp::Gt),
            "$gte" => Operator::Comparison(ComparisonOp::Gte),
            "$lt" => Operator::Comparison(ComparisonOp::Lt),
            "$lte" => Operator::Comparison(ComparisonOp::Lte),
            "$ne" => Operator::Comparison(ComparisonOp::Ne),
            "$in" => Operator::Comparison(ComparisonOp::In),
            "$nin" => Operator::Comparison(ComparisonOp::Nin),
            "$and" => Operator::Logical(LogicalOp::And),
            "$or" => Operator::Logical(LogicalOp::Or),
            "$regex" => Operator::Regex,
            "$options" => Operator::Options,
            // $not and $nor have no SQL rendering yet
            _ => return Err(FilterError::UnsupportedOperator(raw.to_string())),
        };
        Ok(Key::Operator(op))
    }
}
