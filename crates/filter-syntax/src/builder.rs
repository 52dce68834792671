use crate::{
    ast::{
        node::FilterNode,
        operator::{ComparisonOp, Key, LogicalOp, Operator},
    },
    error::{FilterError, Result},
};
use model::core::value::Value;
use serde_json::{Map, Value as Json};
use tracing::{debug, trace};

/// Nesting limit applied when the caller does not configure one.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Parse a filter document into a typed tree using the default depth limit.
pub fn parse(doc: &Json) -> Result<FilterNode> {
    FilterBuilder::default().build(doc)
}

/// Parse filter JSON text into a typed tree using the default depth limit.
pub fn parse_str(input: &str) -> Result<FilterNode> {
    let doc: Json = serde_json::from_str(input)?;
    parse(&doc)
}

/// Turns a raw filter document into a [`FilterNode`] in a single pass.
///
/// Every key is classified once; the resulting tree no longer carries any
/// `$`-prefixed strings. Nesting deeper than `max_depth` mappings fails
/// before anything is built.
#[derive(Debug, Clone, Copy)]
pub struct FilterBuilder {
    max_depth: usize,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl FilterBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn build(&self, doc: &Json) -> Result<FilterNode> {
        let map = doc.as_object().ok_or_else(|| {
            FilterError::malformed(
                KeyPath::root().as_str(),
                format!("filter must be an object, found {}", json_type(doc)),
            )
        })?;
        self.build_mapping(map, None, &KeyPath::root(), 1)
    }

    fn build_mapping(
        &self,
        map: &Map<String, Json>,
        field: Option<&str>,
        path: &KeyPath,
        depth: usize,
    ) -> Result<FilterNode> {
        if depth > self.max_depth {
            return Err(FilterError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        if map.is_empty() {
            return Err(FilterError::malformed(path.as_str(), "empty filter object"));
        }

        let options = map.get("$options");
        if options.is_some() && !map.contains_key("$regex") {
            return Err(FilterError::malformed(
                path.child("$options").as_str(),
                "$options is only valid alongside $regex",
            ));
        }

        let mut nodes = Vec::with_capacity(map.len());
        for (key, value) in map {
            let key_path = path.child(key);
            let node = match Key::classify(key)? {
                // Consumed by the sibling $regex
                Key::Operator(Operator::Options) => continue,
                Key::Operator(Operator::Comparison(op)) => {
                    let field = require_field(field, key, &key_path)?;
                    build_comparison(field, op, value, &key_path)?
                }
                Key::Operator(Operator::Regex) => {
                    let field = require_field(field, key, &key_path)?;
                    build_regex(field, value, options, &key_path)?
                }
                Key::Operator(Operator::Logical(op)) => {
                    self.build_logical(op, value, &key_path, depth)?
                }
                Key::Field(name) => self.build_field(name, value, &key_path, depth)?,
            };
            trace!(path = %key_path.as_str(), "built filter node");
            nodes.push(node);
        }

        Ok(FilterNode::group(nodes))
    }

    fn build_field(
        &self,
        name: &str,
        value: &Json,
        path: &KeyPath,
        depth: usize,
    ) -> Result<FilterNode> {
        match value {
            Json::Null => Ok(FilterNode::is_null(name)),
            Json::Object(inner) => self.build_mapping(inner, Some(name), path, depth + 1),
            Json::Array(_) => Err(FilterError::malformed(
                path.as_str(),
                "a field cannot be compared to an array directly, use $in",
            )),
            scalar => Ok(FilterNode::equals(name, Value::from(scalar))),
        }
    }

    fn build_logical(
        &self,
        op: LogicalOp,
        value: &Json,
        path: &KeyPath,
        depth: usize,
    ) -> Result<FilterNode> {
        let items = value.as_array().ok_or_else(|| {
            FilterError::malformed(
                path.as_str(),
                format!("{} expects an array of filters, found {}", op.keyword(), json_type(value)),
            )
        })?;
        if items.is_empty() {
            return Err(FilterError::malformed(
                path.as_str(),
                format!("{} needs at least one filter", op.keyword()),
            ));
        }

        let children = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_path = path.index(i);
                let map = item.as_object().ok_or_else(|| {
                    FilterError::malformed(
                        item_path.as_str(),
                        format!("expected a filter object, found {}", json_type(item)),
                    )
                })?;
                self.build_mapping(map, None, &item_path, depth + 1)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FilterNode::Logical { op, children })
    }
}

fn require_field<'a>(field: Option<&'a str>, key: &str, path: &KeyPath) -> Result<&'a str> {
    field.ok_or_else(|| {
        FilterError::malformed(path.as_str(), format!("{key} must be nested under a field"))
    })
}

fn build_comparison(
    field: &str,
    op: ComparisonOp,
    value: &Json,
    path: &KeyPath,
) -> Result<FilterNode> {
    if op.is_set() {
        let items = value.as_array().ok_or_else(|| {
            FilterError::malformed(
                path.as_str(),
                format!("{} expects an array, found {}", op.keyword(), json_type(value)),
            )
        })?;
        if items.is_empty() {
            return Err(FilterError::malformed(
                path.as_str(),
                format!("{} needs at least one value", op.keyword()),
            ));
        }
        if let Some(nested) = items.iter().find(|v| v.is_array()) {
            return Err(FilterError::malformed(
                path.as_str(),
                format!("{} values must be scalars, found {}", op.keyword(), json_type(nested)),
            ));
        }
        return Ok(FilterNode::comparison(field, op, Value::from(value)));
    }

    match (op, value) {
        (_, Json::Array(_)) => Err(FilterError::malformed(
            path.as_str(),
            format!("{} expects a single value, found array", op.keyword()),
        )),
        (_, Json::Object(_)) => {
            debug!(
                path = %path.as_str(),
                "object operand has no literal form, comparing against NULL"
            );
            Ok(FilterNode::comparison(field, op, Value::Null))
        }
        (_, scalar) => Ok(FilterNode::comparison(field, op, Value::from(scalar))),
    }
}

fn build_regex(
    field: &str,
    value: &Json,
    options: Option<&Json>,
    path: &KeyPath,
) -> Result<FilterNode> {
    let pattern = value.as_str().ok_or_else(|| {
        FilterError::malformed(
            path.as_str(),
            format!("$regex expects a string pattern, found {}", json_type(value)),
        )
    })?;

    let case_insensitive = match options {
        None => false,
        Some(Json::String(flags)) if flags.chars().all(|c| c == 'i') => !flags.is_empty(),
        Some(other) => {
            return Err(FilterError::malformed(
                path.as_str(),
                format!("unsupported $options {other}, only \"i\" is recognized"),
            ));
        }
    };

    Ok(FilterNode::Regex {
        field: field.to_string(),
        pattern: pattern.to_string(),
        case_insensitive,
    })
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Dotted location of a node inside the document, used in error messages.
#[derive(Debug, Clone)]
struct KeyPath(String);

impl KeyPath {
    fn root() -> Self {
        KeyPath(String::new())
    }

    fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            KeyPath(key.to_string())
        } else {
            KeyPath(format!("{}.{key}", self.0))
        }
    }

    fn index(&self, i: usize) -> Self {
        KeyPath(format!("{}[{i}]", self.0))
    }

    fn as_str(&self) -> &str {
        if self.0.is_empty() { "(root)" } else { &self.0 }
    }
}
