//! Integration test: load every fixture under `tests/testdata/` and check
//! the normalized document or the error classification.

use std::path::PathBuf;

use upkeep_enforcement::{load, DriverExclude, EnforcementDocument, ErrorKind};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn required_file() {
    let doc = load(testdata("required.json")).expect("required.json loads");
    assert_eq!(
        doc,
        EnforcementDocument {
            required: ids(&["4018073", "67891011"]),
            ..Default::default()
        }
    );
}

#[test]
fn hidden_file() {
    let doc = load(testdata("hidden.json")).expect("hidden.json loads");
    assert_eq!(
        doc,
        EnforcementDocument {
            hidden: ids(&["4018073", "67891011"]),
            ..Default::default()
        }
    );
}

#[test]
fn excluded_drivers_file() {
    let doc = load(testdata("excluded-drivers.json")).expect("excluded-drivers.json loads");
    assert_eq!(
        doc.excluded_drivers,
        vec![
            DriverExclude::class("UnitTest"),
            DriverExclude::update("deadbeef-dead-beef-dead-beefdeadbeef"),
            DriverExclude::new("OtherSnacks", "cafef00d-cafe-f00d-cafe-f00dcafef00d"),
        ]
    );
    assert!(doc.required.is_empty());
    assert!(doc.hidden.is_empty());
}

#[test]
fn duplicates_file_is_normalized() {
    let doc = load(testdata("duplicates.json")).expect("duplicates.json loads");
    assert_eq!(doc.required, ids(&["4018073", "67891011"]));
    assert_eq!(doc.hidden, ids(&["5000001", "5000002"]));
    assert_eq!(
        doc.excluded_drivers,
        vec![
            DriverExclude::class("Dupe"),
            DriverExclude::class("Unique"),
            DriverExclude::update("DupeID"),
            DriverExclude::new("Dupe", "DupeID"),
        ]
    );
}

#[test]
fn empty_object_loads_empty_document() {
    let doc = load(testdata("empty.json")).expect("empty.json loads");
    assert!(doc.is_empty());
}

#[test]
fn invalid_json_is_parsing_error() {
    let err = load(testdata("invalid.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
}

#[test]
fn wrong_shape_is_parsing_error() {
    let err = load(testdata("wrong-shape.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
}

#[test]
fn array_root_is_parsing_error() {
    let err = load(testdata("array-root.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
}

#[test]
fn lenient_keys_file_loads_like_original_decoder() {
    let doc = load(testdata("lenient-keys.json")).expect("lenient-keys.json loads");
    assert_eq!(doc.required, ids(&["4018073"]));
    assert_eq!(doc.hidden, ids(&["67891011"]));
    assert_eq!(
        doc.excluded_drivers,
        vec![DriverExclude::update("abc"), DriverExclude::class("Printer")]
    );
}

#[test]
fn missing_file_is_invalid_file_error() {
    let err = load(testdata("missing.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFile);
}

#[test]
fn wrong_filetype_is_file_type_error() {
    // The fixture holds a valid document; only the extension is wrong.
    let err = load(testdata("wrong-filetype.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileType);
}

#[test]
fn clean_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let source = EnforcementDocument {
        required: ids(&["1", "2", "3"]),
        hidden: ids(&["9", "8"]),
        excluded_drivers: vec![
            DriverExclude::class("Display"),
            DriverExclude::new("Net", "abc"),
        ],
    };
    let path = dir.path().join("clean.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&source).unwrap()).unwrap();

    assert_eq!(load(&path).unwrap(), source);
}

#[test]
fn repeated_loads_are_identical() {
    let first = load(testdata("duplicates.json")).unwrap();
    let second = load(testdata("duplicates.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_loads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| load(testdata("duplicates.json"))))
        .collect();

    let expected = load(testdata("duplicates.json")).unwrap();
    for handle in handles {
        let doc = handle.join().expect("thread panicked").unwrap();
        assert_eq!(doc, expected);
    }
}

#[test]
fn load_never_modifies_source() {
    let path = testdata("duplicates.json");
    let before = std::fs::read(&path).unwrap();
    let _ = load(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), before);
}
