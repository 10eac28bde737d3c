//! Integration tests for LightMap.
//!
//! These tests exercise the public API the way a caller would: building maps,
//! deriving new ones and converting them to their external forms.

use lightmap::{Hint, LightMap, LightMapOptions, Primitive, Value, is_instance_of};
use rstest::{fixture, rstest};
use std::collections::HashMap;

#[fixture]
fn keyed() -> LightMap {
    LightMap::from_entries([("key", "value"), ("key1", "value1"), ("key2", "value2")])
}

fn keys_of(map: &LightMap) -> Vec<String> {
    map.keys().map(ToString::to_string).collect()
}

fn values_of(map: &LightMap) -> Vec<String> {
    map.values().map(ToString::to_string).collect()
}

// =============================================================================
// Filter and Find Tests
// =============================================================================

#[rstest]
fn test_filter_passes_keys_values_and_receiver() {
    let map = LightMap::from_entries([("key", "value")]);
    let mut captured = Vec::new();

    let _ = map.filter(|value, key, receiver| {
        captured.push((key.clone(), value.clone(), is_instance_of(receiver)));
        false
    });

    assert_eq!(captured, vec![(Value::from("key"), Value::from("value"), true)]);
}

#[rstest]
fn test_filter_returns_new_map_of_filtered_items() {
    let mut map = LightMap::new();
    map.set(Value::from("key"), Value::from("value"))
        .set(Value::from("key1"), Value::from("value1"));

    let result = map.filter(|_, key, _| key == "key");

    assert!(is_instance_of(&result));
    assert!(result.has("key"));
    assert_eq!(result.get("key"), Some(&Value::from("value")));
    assert!(!result.has("key1"));
    assert_eq!(result.get("key1"), None);
    assert!(map.has("key1"));
    assert_eq!(map.get("key1"), Some(&Value::from("value1")));
}

#[rstest]
fn test_find_all_is_filter(keyed: LightMap) {
    let by_find_all = keyed.find_all(|value, _, _| value != "value1");
    let by_filter = keyed.filter(|value, _, _| value != "value1");
    assert_eq!(keys_of(&by_find_all), keys_of(&by_filter));
    assert_eq!(keys_of(&by_find_all), vec!["key", "key2"]);
}

#[rstest]
fn test_find_returns_first_pair_or_none(keyed: LightMap) {
    let found = keyed.find(|value, _, _| value.as_str().is_some_and(|text| text.starts_with("value")));
    assert_eq!(found, Some((&Value::from("key"), &Value::from("value"))));
    assert_eq!(keyed.find(|value, _, _| value == "absent"), None);
}

// =============================================================================
// Map Tests
// =============================================================================

#[rstest]
fn test_map_passes_keys_values_and_receiver() {
    let map = LightMap::from_entries([("key", "value")]);
    let mut captured = None;

    let _ = map.map(|value, key, receiver| {
        captured = Some((key.clone(), value.clone(), receiver.len()));
        None
    });

    assert_eq!(captured, Some((Value::from("key"), Value::from("value"), 1)));
}

#[rstest]
fn test_map_returns_new_map_of_mapped_items() {
    let map = LightMap::from_entries([("key", "value")]);

    let result = map.map(|value, key, _| Some((key.clone(), Value::from(format!("{value}1")))));

    assert!(is_instance_of(&result));
    assert_eq!(map.get("key"), Some(&Value::from("value")));
    assert_eq!(result.get("key"), Some(&Value::from("value1")));
}

#[rstest]
fn test_map_with_falsy_projection_keeps_key_and_drops_value() {
    let map = LightMap::from_entries([("key", "value")]);

    let nothing = map.map(|_, _, _| None);
    let empty_key = map.map(|_, _, _| Some((Value::from(""), Value::from("other"))));
    let null_value = map.map(|_, key, _| Some((key.clone(), Value::Null)));

    assert_eq!(nothing.get("key"), Some(&Value::Null));
    assert_eq!(empty_key.get("key"), Some(&Value::from("other")));
    assert_eq!(null_value.get("key"), Some(&Value::Null));
}

// =============================================================================
// Reduce Tests
// =============================================================================

#[rstest]
fn test_reduce_passes_carriage_pair_key_and_receiver() {
    let map = LightMap::from_entries([("key", "value")]);
    let mut captured = None;

    map.reduce(
        |carriage, (key, value), same_key, receiver| {
            captured = Some((
                carriage.to_string(),
                key.clone(),
                value.clone(),
                same_key.clone(),
                receiver.to_string_tag(),
            ));
            carriage
        },
        "test",
    );

    assert_eq!(
        captured,
        Some((
            "test".to_string(),
            Value::from("key"),
            Value::from("value"),
            Value::from("key"),
            "LightMap"
        ))
    );
}

#[rstest]
fn test_reduce_returns_string_of_keys_and_values() {
    let map = LightMap::from_entries([("key", "value")]);

    let result = map.reduce(
        |mut text, (key, value), _, _| {
            text.push_str(&format!("Key: {key}\n"));
            text.push_str(&format!("Value: {value}\n"));
            text
        },
        String::new(),
    );

    assert_eq!(result, "Key: key\nValue: value\n");
}

// =============================================================================
// Sort Tests
// =============================================================================

#[rstest]
fn test_sort_keys_sorts_alphanumerically() {
    let map = LightMap::from_entries([("key2", "value2"), ("key1", "value1"), ("key", "value")]);

    let result = map.sort_keys();

    assert_eq!(keys_of(&map), vec!["key2", "key1", "key"]);
    assert_eq!(keys_of(&result), vec!["key", "key1", "key2"]);
    assert_eq!(values_of(&result), vec!["value", "value1", "value2"]);
}

#[rstest]
fn test_sort_keys_places_accented_letters_with_their_base_letter() {
    let map = LightMap::from_entries([("f", 1), ("é", 2), ("e", 3), ("_z", 4), ("0", 5)]);

    let result = map.sort_keys();

    assert_eq!(keys_of(&result), vec!["_z", "0", "e", "é", "f"]);
}

#[rstest]
fn test_sort_values_sorts_entries_by_value() {
    let map = LightMap::from_entries([("key", "value2"), ("key1", "value1"), ("key2", "value")]);

    let result = map.sort_values();

    assert_eq!(values_of(&result), vec!["value", "value1", "value2"]);
    assert_eq!(keys_of(&result), vec!["key2", "key1", "key"]);
    assert_eq!(keys_of(&map), vec!["key", "key1", "key2"]);
}

#[rstest]
fn test_sort_values_by_numeric_comparator() {
    let map = LightMap::from_entries([("a", 10), ("b", 9), ("c", 100)]);

    let as_strings = map.sort_values();
    let as_numbers = map.sort_values_by(|left, right| {
        left.as_i64().unwrap_or_default().cmp(&right.as_i64().unwrap_or_default())
    });

    assert_eq!(keys_of(&as_strings), vec!["a", "c", "b"]);
    assert_eq!(keys_of(&as_numbers), vec!["b", "a", "c"]);
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[rstest]
fn test_map_to_array_and_to_json_return_pairs() {
    let mut map = LightMap::new();
    map.set(
        Value::from("key"),
        Value::from(LightMap::from_entries([("key1", "value1")])),
    );

    let pairs = map.map_to_array();
    let json = map.to_json();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, Value::from("key"));
    assert_eq!(pairs[0].1, Value::from(vec![("key1", "value1")]));
    assert_eq!(json, serde_json::json!([["key", [["key1", "value1"]]]]));
}

#[rstest]
fn test_index_of_and_search_return_insert_index(keyed: LightMap) {
    assert_eq!(keyed.index_of("key1"), Some(1));
    assert_eq!(keyed.index_of("key3"), None);
    assert_eq!(keyed.position("key1"), 1);
    assert_eq!(keyed.position("key3"), -1);
    assert_eq!(keyed.search("key1"), 1);
    assert_eq!(keyed.search("key3"), -1);
}

#[rstest]
fn test_substitute_into_replaces_placeholders() {
    let mut map = LightMap::new();
    map.set(Value::from("{{ name }}"), Value::from("LightMap"))
        .set(Value::from("{{ version }}"), Value::from(lightmap::version()));

    assert_eq!(
        map.substitute_into("Module: {{ name }} {{ version }}"),
        format!("Module: LightMap {}", lightmap::version())
    );
}

#[rstest]
fn test_to_string_returns_json_text() {
    let mut map = LightMap::new();
    map.set(
        Value::from("key"),
        Value::from(LightMap::from_entries([("a", "b")])),
    );

    let text = map.to_string();

    assert_eq!(text, r#"[["key",[["a","b"]]]]"#);
    assert_eq!(map.to_primitive(Hint::String), Primitive::String(text.clone()));
    assert_eq!(map.to_display_string(), text);
}

#[rstest]
fn test_numeric_coercion_returns_size() {
    let map = LightMap::from_entries([("key", "value")]);
    assert_eq!(map.size(), 1);
    assert_eq!(map.to_number(), 1);
    assert_eq!(map.to_primitive(Hint::Number), Primitive::Number(1));
}

#[rstest]
fn test_to_object_on_nested_tree() {
    let map = LightMap::from_entries([(
        "key",
        Value::from(vec![
            ("keyA", Value::from("valueA")),
            ("keyB", Value::from(vec![("key2", "value2")])),
        ]),
    )]);

    assert_eq!(
        serde_json::Value::Object(map.to_object()),
        serde_json::json!({ "key": { "keyA": "valueA", "keyB": { "key2": "value2" } } })
    );
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_deep_construction_promotes_pair_arrays() {
    let map = LightMap::from_entries([("x", Value::from(vec![("y", 1)]))]);
    let nested = map.get("x").and_then(Value::as_map);
    assert_eq!(nested.map(LightMap::len), Some(1));
}

#[rstest]
fn test_deep_construction_skips_non_pair_arrays() {
    let map = LightMap::from_entries([("x", Value::from(vec![Value::Null]))]);
    assert!(!map.get("x").is_some_and(Value::is_map));
}

#[rstest]
fn test_deep_construction_can_be_disabled() {
    let options = LightMapOptions::default().deep_transform_to_map(false);
    let map = LightMap::with_options([("x", Value::from(vec![("y", 1)]))], options);
    assert!(map.get("x").is_some_and(|value| value.as_array().is_some()));
}

#[rstest]
fn test_from_json_str_round_trip() {
    let text = r#"[["key",[["keyA","valueA"],["keyB",[["key2","value2"]]]]],["n",1]]"#;
    let map = LightMap::from_json_str(text).unwrap();
    assert_eq!(map.to_string(), text);
    assert_eq!(map.get("n"), Some(&Value::from(1)));
}

#[rstest]
fn test_serde_round_trip() {
    let original = LightMap::from_entries([
        ("a", Value::from(vec![("b", Value::from(vec![("c", true)]))])),
        ("d", Value::from(vec![1, 2, 3])),
    ]);

    let text = serde_json::to_string(&original).unwrap();
    let restored: LightMap = serde_json::from_str(&text).unwrap();

    assert_eq!(restored, original);
    assert_eq!(keys_of(&restored), keys_of(&original));
}

// =============================================================================
// Identity and Equality Tests
// =============================================================================

#[rstest]
fn test_string_tag_is_lightmap() {
    assert_eq!(LightMap::<i32, i32>::new().to_string_tag(), "LightMap");
    assert!(format!("{:?}", LightMap::<i32, i32>::new()).starts_with("LightMap"));
}

#[rstest]
fn test_is_instance_of_rejects_other_maps() {
    assert!(!is_instance_of(&HashMap::<String, String>::new()));
    assert!(!is_instance_of(&(LightMap::<i32, i32>::new(), 1_u8)));
    assert!(!is_instance_of(&[LightMap::<i32, i32>::new()]));
}

#[rstest]
fn test_is_instance_of_accepts_lightmaps() {
    assert!(is_instance_of(&LightMap::<String, String>::new()));
    assert!(is_instance_of(&LightMap::from_entries([("a", 1)])));
}

#[rstest]
fn test_equals_compares_contents(keyed: LightMap) {
    let copy = keyed.clone();
    let reordered = keyed.sort_values_by(|left, right| right.to_string().cmp(&left.to_string()));
    let mut changed = keyed.clone();
    changed.set(Value::from("key"), Value::from("other"));

    assert!(keyed.equals(&copy));
    assert!(keyed.equals(&reordered));
    assert!(!keyed.equals(&changed));
    assert!(!keyed.equals(&LightMap::new()));
}

#[rstest]
fn test_derived_maps_are_independent(keyed: LightMap) {
    let mut derived = keyed.filter(|_, _, _| true);
    derived.set(Value::from("key3"), Value::from("value3"));
    derived.delete("key");

    assert_eq!(keyed.len(), 3);
    assert!(keyed.has("key"));
    assert!(!keyed.has("key3"));
}
