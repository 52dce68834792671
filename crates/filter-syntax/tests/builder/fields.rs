use filter_syntax::{ComparisonOp, FilterNode, parse, parse_str};
use model::core::value::Value;
use serde_json::json;

#[test]
fn test_scalar_field_is_implicit_equality() {
    let node = parse(&json!({"test": "test"})).unwrap();
    assert_eq!(node, FilterNode::equals("test", "test"));
}

#[test]
fn test_null_field_is_null_check() {
    let node = parse(&json!({"deleted_at": null})).unwrap();
    assert_eq!(node, FilterNode::is_null("deleted_at"));
}

#[test]
fn test_operator_under_field() {
    let node = parse(&json!({"age": {"$gte": 18}})).unwrap();
    assert_eq!(node, FilterNode::comparison("age", ComparisonOp::Gte, 18));
}

#[test]
fn test_multiple_operators_under_field_form_group() {
    let node = parse(&json!({"age": {"$gt": 1, "$lt": 5}})).unwrap();
    assert_eq!(
        node,
        FilterNode::Group(vec![
            FilterNode::comparison("age", ComparisonOp::Gt, 1),
            FilterNode::comparison("age", ComparisonOp::Lt, 5),
        ])
    );
}

#[test]
fn test_set_operators_keep_value_list() {
    let node = parse(&json!({"id": {"$nin": [1, "two"]}})).unwrap();
    assert_eq!(
        node,
        FilterNode::Comparison {
            field: "id".into(),
            op: ComparisonOp::Nin,
            value: Value::List(vec![Value::Int(1), Value::Text("two".into())]),
        }
    );
}

#[test]
fn test_null_operands_stay_comparisons() {
    assert_eq!(
        parse(&json!({"a": {"$eq": null}})).unwrap(),
        FilterNode::comparison("a", ComparisonOp::Eq, Value::Null)
    );
    assert_eq!(
        parse(&json!({"a": {"$ne": null}})).unwrap(),
        FilterNode::comparison("a", ComparisonOp::Ne, Value::Null)
    );
    assert_eq!(
        parse(&json!({"a": {"$gt": null}})).unwrap(),
        FilterNode::comparison("a", ComparisonOp::Gt, Value::Null)
    );
}

#[test]
fn test_nested_field_takes_its_own_name() {
    let node = parse(&json!({"outer": {"inner": 1}})).unwrap();
    assert_eq!(node, FilterNode::equals("inner", 1));

    let node = parse(&json!({"outer": {"inner": {"$lte": 7}}})).unwrap();
    assert_eq!(node, FilterNode::comparison("inner", ComparisonOp::Lte, 7));
}

#[test]
fn test_regex_with_options() {
    let node = parse(&json!({"name": {"$regex": "value.*", "$options": "i"}})).unwrap();
    assert_eq!(
        node,
        FilterNode::Regex {
            field: "name".into(),
            pattern: "value.*".into(),
            case_insensitive: true,
        }
    );

    let node = parse(&json!({"name": {"$regex": "value.*"}})).unwrap();
    assert!(matches!(node, FilterNode::Regex { case_insensitive: false, .. }));
}

#[test]
fn test_key_order_is_preserved() {
    let node = parse_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let FilterNode::Group(children) = node else {
        panic!("expected a group");
    };
    let fields: Vec<_> = children
        .iter()
        .map(|c| match c {
            FilterNode::Comparison { field, .. } => field.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(fields, vec!["z", "a", "m"]);
}
