//! Integration tests against binary VDF fixture files.

use std::path::Path;

use binary_vdf::{Cursor, DecodeConfig, Entries, MapItem, Tag, Value, binary, decode, encode};
use pretty_assertions::assert_eq;

fn read_fixture(name: &str) -> Vec<u8> {
    let path = Path::new("tests/fixtures").join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn expected_read_test() -> Entries<'static> {
    let mut key3 = Entries::new();
    key3.insert("key4", "value2");
    key3.insert("key5", "value3");

    let mut expected = Entries::new();
    expected.insert("key1", "value1");
    expected.insert("key2", 3u32);
    expected.insert("key3", key3);
    expected
}

#[test]
fn test_decode_read_test() {
    let data = read_fixture("read-test.vdf");
    let result = decode(&data);
    assert!(result.is_ok(), "Failed to decode read-test.vdf: {:?}", result.err());

    let entries = result.unwrap();
    assert_eq!(entries, expected_read_test());
    assert_eq!(entries["key3"]["key5"].as_str(), Some("value3"));
}

#[test]
fn test_read_test_round_trip_is_byte_stable() {
    let data = read_fixture("read-test.vdf");
    let entries = decode(&data).unwrap();
    let encoded = encode(&entries).unwrap();
    assert_eq!(encoded, data);
    assert_eq!(decode(&encoded).unwrap(), expected_read_test());
}

#[test]
fn test_decode_map_test() {
    let data = read_fixture("map-test.vdf");
    let mut cursor = Cursor::new(&data);
    let entries = binary::decode_map(&mut cursor, &DecodeConfig::default()).unwrap();

    let expected: Entries = [("key1", Value::from("value1")), ("key2", Value::Number(3))]
        .into_iter()
        .collect();
    assert_eq!(entries, expected);
    assert!(cursor.is_at_end());
}

#[test]
fn test_decode_item_fixtures() {
    let config = DecodeConfig::default();

    let data = read_fixture("map-only-test.vdf");
    let item = binary::decode_item(&mut Cursor::new(&data), &config).unwrap();
    let nested: Entries = [("key2", "value1"), ("key3", "value2")].into_iter().collect();
    assert_eq!(
        item,
        MapItem {
            tag: Tag::MapStart,
            name: Some("key1".into()),
            value: Some(Value::Map(nested)),
        }
    );

    let data = read_fixture("string-test.vdf");
    let item = binary::decode_item(&mut Cursor::new(&data), &config).unwrap();
    assert_eq!(
        item,
        MapItem {
            tag: Tag::String,
            name: Some("key".into()),
            value: Some("value".into()),
        }
    );

    let data = read_fixture("number-test.vdf");
    let item = binary::decode_item(&mut Cursor::new(&data), &config).unwrap();
    assert_eq!(
        item,
        MapItem {
            tag: Tag::Number,
            name: Some("key".into()),
            value: Some(Value::Number(3)),
        }
    );
}

#[test]
fn test_every_truncation_of_read_test_fails_with_eof() {
    let data = read_fixture("read-test.vdf");
    for len in 0..data.len() {
        let err = decode(&data[..len]).expect_err("truncated input must not decode");
        assert!(err.is_eof(), "len {}: unexpected error {:?}", len, err);
        assert!(err.offset() <= len, "len {}: offset {} past end", len, err.offset());
    }
}

#[test]
fn test_string_fixture_alone_is_not_a_document() {
    // A single item without the closing 0x08 of the top-level map
    let data = read_fixture("string-test.vdf");
    assert!(decode(&data).unwrap_err().is_eof());
}
