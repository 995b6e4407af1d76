//! A custom layout offered after the global table is built is refused.
//!
//! Runs as its own test binary so the global table starts unbuilt.

use phonepad_core::{decode, KeyTable, KeypadConfigError};

#[test]
fn init_custom_after_global_is_refused() {
    assert_eq!(decode("22#"), "B");

    let err = KeyTable::init_custom("[keys]\n\"2\" = \"xyz\"\n".to_string()).unwrap_err();
    assert!(matches!(err, KeypadConfigError::AlreadyInitialized));

    assert_eq!(decode("22#"), "B");
}
