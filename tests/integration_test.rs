//! Integration tests for store operations

use kvstash::{Error, Store, StoreConfig};

fn ephemeral() -> Store {
    Store::open(StoreConfig::default()).expect("open ephemeral store")
}

// ============================================================================
// String and Byte Operations
// ============================================================================

#[test]
fn test_string_round_trip() {
    let store = ephemeral();

    store.set_string("greeting", "hello").unwrap();
    assert_eq!(store.get_string("greeting").unwrap(), "hello");

    store.set_string("unicode", "grüße, 世界").unwrap();
    assert_eq!(store.get_string("unicode").unwrap(), "grüße, 世界");

    store.close().unwrap();
}

#[test]
fn test_bytes_round_trip() {
    let store = ephemeral();

    let value = [0u8, 1, 2, 255, 254];
    store.set_bytes(b"blob", &value).unwrap();
    assert_eq!(store.get_bytes(b"blob").unwrap(), value);

    store.close().unwrap();
}

#[test]
fn test_overwrite_returns_latest_value() {
    let store = ephemeral();

    store.set_string("k", "first").unwrap();
    store.set_string("k", "second").unwrap();
    assert_eq!(store.get_string("k").unwrap(), "second");

    store.close().unwrap();
}

#[test]
fn test_missing_key_is_not_found() {
    let store = ephemeral();

    assert!(matches!(
        store.get_string("never-written"),
        Err(Error::NotFound)
    ));
    assert!(matches!(
        store.get_bytes(b"never-written"),
        Err(Error::NotFound)
    ));

    store.close().unwrap();
}

#[test]
fn test_empty_value_is_distinct_from_missing() {
    let store = ephemeral();

    store.set_string("empty", "").unwrap();
    assert_eq!(store.get_string("empty").unwrap(), "");
    assert_eq!(store.get_bytes(b"empty").unwrap(), Vec::<u8>::new());

    store.close().unwrap();
}

#[test]
fn test_non_utf8_value_fails_string_decode() {
    let store = ephemeral();

    store.set_bytes(b"bin", &[0xff, 0xfe, 0xfd]).unwrap();
    assert!(matches!(store.get_string("bin"), Err(Error::Utf8(_))));

    // Still readable byte-exact
    assert_eq!(store.get_bytes(b"bin").unwrap(), [0xff, 0xfe, 0xfd]);

    store.close().unwrap();
}

// ============================================================================
// Hashed Presence Tracking
// ============================================================================

#[test]
fn test_touch_then_exists() {
    let store = ephemeral();

    assert!(!store.exists_hashed("user:42").unwrap());
    store.touch_hashed("user:42").unwrap();
    assert!(store.exists_hashed("user:42").unwrap());
    assert!(!store.exists_hashed("user:43").unwrap());

    store.close().unwrap();
}

#[test]
fn test_touch_is_idempotent() {
    let store = ephemeral();

    store.touch_hashed("dup").unwrap();
    store.touch_hashed("dup").unwrap();
    assert!(store.exists_hashed("dup").unwrap());

    store.close().unwrap();
}

#[test]
fn test_value_set_under_digest_counts_as_present() {
    let store = ephemeral();

    let key = kvstash::hash::digest("payload:7");
    store.set_bytes(&key, b"payload").unwrap();
    assert!(store.exists_hashed("payload:7").unwrap());

    store.close().unwrap();
}
