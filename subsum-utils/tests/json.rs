use serde_json::{json, Value};
use subsum_utils::{compress_obj, decompress_obj, dejsonify, jsonify};

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({
        "weights": [3, 1],
        "capacity": 5,
        "nested": [{"b": 1, "a": 2}],
    });
    assert_eq!(
        jsonify(&value),
        r#"{"capacity":5,"nested":[{"a":2,"b":1}],"weights":[3,1]}"#
    );
}

#[test]
fn test_dejsonify_rejects_garbage() {
    assert!(dejsonify::<Value>("{not json").is_err());
}

#[test]
fn test_compress_obj() {
    let value = json!({"items": [0, 2, 4], "total_weight": 9});
    let compressed = compress_obj(&value).unwrap();
    let restored: Value = decompress_obj(&compressed).unwrap();
    assert_eq!(restored, value);
    assert!(decompress_obj::<Value>(b"definitely not zlib").is_err());
}
