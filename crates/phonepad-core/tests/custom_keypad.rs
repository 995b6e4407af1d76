//! Installing a custom layout for the global table.
//!
//! Runs as its own test binary: the global table is process-wide, so the
//! whole sequence lives in one test.

use phonepad_core::{decode, KeyTable, KeypadConfigError};

const CUSTOM: &str = r#"
[keys]
"2" = "xyz"
"3" = "Q"
"#;

#[test]
fn custom_layout_is_used_and_cannot_be_replaced() {
    KeyTable::init_custom(CUSTOM.to_string()).unwrap();

    assert_eq!(decode("22#"), "y");
    assert_eq!(decode("2223#"), "zQ");
    // 4 is not on this pad
    assert_eq!(decode("44#"), "");

    let err = KeyTable::init_custom("[keys]\n\"2\" = \"ABC\"\n".to_string()).unwrap_err();
    assert!(matches!(err, KeypadConfigError::AlreadyInitialized));
    assert_eq!(decode("22#"), "y");
}
