use model::core::value::Value;
use planner::compile_parameterized;
use serde_json::json;

#[test]
fn test_literals_become_placeholders() {
    let (sql, params) = compile_parameterized(&json!({
        "name": "O'Brien",
        "age": {"$gte": 21},
        "$or": [{"team": {"$nin": ["red", "blue"]}}, {"team": null}]
    }))
    .unwrap();

    assert_eq!(
        sql,
        "(`name` = ? AND `age` >= ? AND (`team` NOT IN (?, ?) OR `team` IS NULL))"
    );
    assert_eq!(
        params,
        vec![
            Value::from("O'Brien"),
            Value::Int(21),
            Value::from("red"),
            Value::from("blue"),
        ]
    );
}

#[test]
fn test_regex_pattern_is_bound() {
    let (sql, params) =
        compile_parameterized(&json!({"title": {"$regex": "^a", "$options": "i"}})).unwrap();
    assert_eq!(sql, "`title` REGEXP ?");
    assert_eq!(params, vec![Value::from("^a")]);
}
