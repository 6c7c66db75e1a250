//! Integration tests for the typed getters.

use chrono::{DateTime, TimeZone, Utc};

use quillpath::path;
use quillpath::path::{get_bool, get_int, get_string, get_time};
use quillpath::value::{epoch, Integer, Record, Value};

fn document() -> Value {
    Value::from(serde_json::json!({
        "name": "quill",
        "count": 42,
        "ratio": 0.5,
        "enabled": true,
        "created": "2023-06-15T08:30:00Z",
        "updated": "2023-06-15T08:30:00.123456789+02:00",
        "bad_time": "yesterday",
        "tags": ["a", "b"],
        "empty": ""
    }))
}

#[test]
fn test_get_string() {
    let root = document();
    assert_eq!(get_string(&root, path!["name"].as_slice()), "quill");
    assert_eq!(get_string(&root, path!["tags", 1].as_slice()), "b");
    assert_eq!(get_string(&root, path!["count"].as_slice()), "");
    assert_eq!(get_string(&root, path!["missing"].as_slice()), "");
    assert_eq!(get_string(&root, path![0].as_slice()), "");
}

#[test]
fn test_get_string_accepts_number_text() {
    let json = serde_json::json!({"price": 12.50});
    let root = Value::from_json_preserving_numbers(json);
    assert_eq!(get_string(&root, path!["price"].as_slice()), "12.5");
}

#[test]
fn test_get_int() {
    let root = document();
    assert_eq!(get_int(&root, path!["count"].as_slice()), 42);
    assert_eq!(get_int(&root, path!["ratio"].as_slice()), 0);
    assert_eq!(get_int(&root, path!["name"].as_slice()), 0);
    assert_eq!(get_int(&root, path!["missing"].as_slice()), 0);
}

#[test]
fn test_get_int_from_record_widths() {
    let root = Value::Record(
        Record::new("Stats")
            .field("Small", 7u8)
            .field("Negative", -9i16)
            .field("Raw", Value::Number("123".to_string())),
    );
    assert_eq!(get_int(&root, path!["small"].as_slice()), 7);
    assert_eq!(get_int(&root, path!["negative"].as_slice()), -9);
    assert_eq!(get_int(&root, path!["raw"].as_slice()), 123);
}

#[test]
fn test_get_bool() {
    let root = document();
    assert!(get_bool(&root, path!["enabled"].as_slice()));
    assert!(get_bool(&root, path!["name"].as_slice()));
    assert!(!get_bool(&root, path!["empty"].as_slice()));
    assert!(get_bool(&root, path!["count"].as_slice()));
    assert!(get_bool(&root, path!["ratio"].as_slice()));
    assert!(!get_bool(&root, path!["tags"].as_slice()));
    assert!(!get_bool(&root, path!["missing"].as_slice()));

    let zero = Value::Int(Integer::U64(0));
    assert!(!get_bool(&zero, &[]));
}

#[test]
fn test_get_time() {
    let root = document();
    assert_eq!(
        get_time(&root, path!["created"].as_slice()),
        Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap()
    );
    let updated = get_time(&root, path!["updated"].as_slice());
    assert_eq!(updated.timestamp_subsec_nanos(), 123_456_789);
    assert_eq!(updated.offset().local_minus_utc(), 2 * 3600);
}

#[test]
fn test_get_time_passes_timestamps_through() {
    let when: DateTime<Utc> = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
    let root = Value::Record(Record::new("Event").field("At", when));
    assert_eq!(get_time(&root, path!["at"].as_slice()), when);
}

#[test]
fn test_get_time_falls_back_to_epoch() {
    let root = document();
    assert_eq!(get_time(&root, path!["bad_time"].as_slice()), epoch());
    assert_eq!(get_time(&root, path!["count"].as_slice()), epoch());
    assert_eq!(get_time(&root, path!["missing"].as_slice()), epoch());
    assert_eq!(get_time(&root, path![1].as_slice()), epoch());
}

#[test]
fn test_getters_ignore_failure_kind() {
    // a type error and a missing key look the same through a getter
    let root = document();
    assert_eq!(
        get_string(&root, path!["tags", "x"].as_slice()),
        get_string(&root, path!["tags", 9].as_slice())
    );
}
