use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_keypad_toml, KeypadConfigError};
use super::DEFAULT_KEYPAD_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<KeyTable> = OnceLock::new();

/// Immutable mapping from a key digit to the letters it cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    keys: BTreeMap<char, Vec<char>>,
}

impl KeyTable {
    /// Set custom TOML before first `global()` call.
    ///
    /// Fails with `AlreadyInitialized` once a custom layout is installed or
    /// the global table has been built.
    pub fn init_custom(toml_content: String) -> Result<(), KeypadConfigError> {
        // Validate eagerly
        parse_keypad_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(KeypadConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KeypadConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KeyTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_KEYPAD_TOML);
            KeyTable::from_toml(toml_str).expect("keypad TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, KeypadConfigError> {
        Ok(Self {
            keys: parse_keypad_toml(toml_str)?,
        })
    }

    /// Letters for `key` in press order. `None` if the key is not on the pad;
    /// an empty slice for a key that produces nothing.
    pub fn letters(&self, key: char) -> Option<&[char]> {
        self.keys.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: char) -> bool {
        self.keys.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::from_toml(DEFAULT_KEYPAD_TOML).expect("keypad TOML must be valid")
    }
}
