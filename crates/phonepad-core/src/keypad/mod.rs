//! Keypad layout: which letters each numeric key produces.
//!
//! The layout is read from TOML. The default layout is embedded in the binary
//! and can be replaced once, before the first [`KeyTable::global`] call.

mod config;
mod table;

pub use config::{parse_keypad_toml, KeypadConfigError};
pub use table::KeyTable;

pub(crate) const DEFAULT_KEYPAD_TOML: &str = include_str!("default_keypad.toml");

/// Returns the embedded default keypad TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_KEYPAD_TOML
}
