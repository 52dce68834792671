use filter_syntax::{FilterError, parse, parse_str};
use serde_json::json;
use tracing_test::traced_test;

fn malformed_path(doc: serde_json::Value) -> String {
    match parse(&doc) {
        Err(FilterError::MalformedFilter { path, .. }) => path,
        other => panic!("expected MalformedFilter for {doc}, got {other:?}"),
    }
}

#[test]
fn test_not_and_nor_are_unsupported() {
    for doc in [json!({"$not": [{"a": 1}]}), json!({"$nor": [{"a": 1}]})] {
        assert!(matches!(parse(&doc), Err(FilterError::UnsupportedOperator(_))));
    }
}

#[test]
fn test_unknown_operator_is_rejected_not_treated_as_field() {
    match parse(&json!({"a": {"$foo": 1}})) {
        Err(FilterError::UnsupportedOperator(op)) => assert_eq!(op, "$foo"),
        other => panic!("expected UnsupportedOperator, got {other:?}"),
    }
    assert!(matches!(
        parse(&json!({"$where": "1 = 1"})),
        Err(FilterError::UnsupportedOperator(_))
    ));
}

#[test]
fn test_unsupported_operator_deep_in_tree_fails_whole_filter() {
    let doc = json!({"a": 1, "$or": [{"b": 2}, {"$and": [{"c": {"$not": {"$gt": 1}}}]}]});
    assert!(matches!(parse(&doc), Err(FilterError::UnsupportedOperator(_))));
}

#[test]
fn test_logical_requires_non_empty_array_of_objects() {
    assert_eq!(malformed_path(json!({"$or": {"a": 1}})), "$or");
    assert_eq!(malformed_path(json!({"$and": []})), "$and");
    assert_eq!(malformed_path(json!({"$and": [{"a": 1}, 5]})), "$and[1]");
}

#[test]
fn test_set_operators_require_non_empty_array() {
    assert_eq!(malformed_path(json!({"id": {"$in": 1}})), "id.$in");
    assert_eq!(malformed_path(json!({"id": {"$nin": []}})), "id.$nin");
    assert_eq!(malformed_path(json!({"id": {"$in": [[1]]}})), "id.$in");
}

#[test]
fn test_shape_errors() {
    assert_eq!(malformed_path(json!({})), "(root)");
    assert_eq!(malformed_path(json!([{"a": 1}])), "(root)");
    assert_eq!(malformed_path(json!({"a": {}})), "a");
    assert_eq!(malformed_path(json!({"a": [1, 2]})), "a");
    assert_eq!(malformed_path(json!({"a": {"$eq": [1]}})), "a.$eq");
    assert_eq!(malformed_path(json!({"$gt": 1})), "$gt");
}

#[test]
fn test_regex_errors() {
    assert_eq!(malformed_path(json!({"a": {"$regex": 1}})), "a.$regex");
    assert_eq!(malformed_path(json!({"a": {"$regex": "x", "$options": "m"}})), "a.$regex");
    assert_eq!(malformed_path(json!({"a": {"$options": "i"}})), "a.$options");
}

#[test]
fn test_invalid_json_text() {
    assert!(matches!(parse_str("{not json"), Err(FilterError::InvalidJson(_))));
}

#[traced_test]
#[test]
fn test_object_operand_is_logged() {
    assert!(parse(&json!({"a": {"$lt": {"nested": true}}})).is_ok());
    assert!(logs_contain("object operand has no literal form"));
}
