//! Decoding of multi-tap phone keypad input into text.
//!
//! - [`keypad`] holds the key-to-letters table and its TOML configuration.
//! - [`decoder`] turns a key sequence such as `"4433555 555666#"` into `"HELLO"`.

pub mod decoder;
pub mod keypad;

pub use decoder::{decode, decode_with};
pub use keypad::{KeyTable, KeypadConfigError};
