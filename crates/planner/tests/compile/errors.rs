use filter_syntax::FilterError;
use planner::{CompilerConfig, compile, compile_str, compile_with_config};
use serde_json::json;

#[test]
fn test_not_is_unsupported() {
    let err = compile(&json!({"$not": [{"a": 1}]})).unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedOperator(ref op) if op == "$not"));
    assert_eq!(err.to_string(), "Unsupported operator: $not");
}

#[test]
fn test_nor_is_unsupported() {
    assert!(matches!(
        compile(&json!({"$nor": [{"a": 1}, {"b": 2}]})),
        Err(FilterError::UnsupportedOperator(_))
    ));
}

#[test]
fn test_unknown_operator_never_becomes_a_column() {
    let err = compile(&json!({"a": 1, "$foo": 2})).unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedOperator(ref op) if op == "$foo"));
}

#[test]
fn test_malformed_filter_message() {
    let err = compile(&json!({"$or": [{"a": 1}, "b"]})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed filter at `$or[1]`: expected a filter object, found string"
    );
}

#[test]
fn test_depth_guard_fails_closed() {
    let mut doc = json!({"leaf": 1});
    for _ in 0..100 {
        doc = json!({"$and": [doc]});
    }
    assert!(matches!(
        compile(&doc),
        Err(FilterError::DepthLimitExceeded { limit: 32 })
    ));

    let config = CompilerConfig::default().with_max_depth(200).unwrap();
    let sql = compile_with_config(&doc, &config).unwrap();
    assert!(sql.starts_with("(((("));
    assert!(sql.contains("`leaf` = 1"));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(compile_str("{\"a\": "), Err(FilterError::InvalidJson(_))));
}
