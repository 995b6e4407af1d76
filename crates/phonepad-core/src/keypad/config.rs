use std::collections::BTreeMap;

use serde::Deserialize;

/// Symbols that drive the decoder and can never be produced by a key.
const RESERVED_LETTERS: [char; 2] = ['*', '#'];

#[derive(Deserialize)]
struct KeypadConfig {
    keys: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KeypadConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[keys] table is empty")]
    Empty,
    #[error("key must be a single digit 0-9: {0:?}")]
    InvalidKey(String),
    #[error("key {key} maps to reserved symbol {letter:?}")]
    ReservedLetter { key: char, letter: char },
    #[error("keypad table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<key, letters>`.
pub fn parse_keypad_toml(toml_str: &str) -> Result<BTreeMap<char, Vec<char>>, KeypadConfigError> {
    let config: KeypadConfig =
        toml::from_str(toml_str).map_err(|e| KeypadConfigError::Parse(e.to_string()))?;

    if config.keys.is_empty() {
        return Err(KeypadConfigError::Empty);
    }

    let mut keys = BTreeMap::new();
    for (raw_key, letters) in config.keys {
        let key = single_digit(&raw_key).ok_or(KeypadConfigError::InvalidKey(raw_key))?;
        if let Some(letter) = letters.chars().find(|c| RESERVED_LETTERS.contains(c)) {
            return Err(KeypadConfigError::ReservedLetter { key, letter });
        }
        keys.insert(key, letters.chars().collect());
    }

    Ok(keys)
}

fn single_digit(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[keys]
"2" = "ABC"
"7" = "PQRS"
"#;
        let map = parse_keypad_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&'2'], vec!['A', 'B', 'C']);
        assert_eq!(map[&'7'], vec!['P', 'Q', 'R', 'S']);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_keypad_toml(super::super::DEFAULT_KEYPAD_TOML).unwrap();
        assert_eq!(map.len(), 10);
        assert!(map[&'1'].is_empty());
        assert_eq!(map[&'0'], vec![' ']);
        assert_eq!(map[&'9'], vec!['W', 'X', 'Y', 'Z']);
    }

    #[test]
    fn empty_value_is_allowed() {
        let map = parse_keypad_toml("[keys]\n\"1\" = \"\"\n").unwrap();
        assert!(map[&'1'].is_empty());
    }

    #[test]
    fn error_empty_keys() {
        let err = parse_keypad_toml("[keys]\n").unwrap_err();
        assert!(matches!(err, KeypadConfigError::Empty));
    }

    #[test]
    fn error_missing_keys_table() {
        let err = parse_keypad_toml("[other]\nx = 1\n").unwrap_err();
        assert!(matches!(err, KeypadConfigError::Parse(_)));
    }

    #[test]
    fn error_multi_char_key() {
        let err = parse_keypad_toml("[keys]\n\"22\" = \"AB\"\n").unwrap_err();
        assert!(matches!(err, KeypadConfigError::InvalidKey(ref k) if k == "22"));
    }

    #[test]
    fn error_non_digit_key() {
        let err = parse_keypad_toml("[keys]\na = \"ABC\"\n").unwrap_err();
        assert!(matches!(err, KeypadConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_reserved_letter() {
        let err = parse_keypad_toml("[keys]\n\"2\" = \"A#C\"\n").unwrap_err();
        assert!(matches!(
            err,
            KeypadConfigError::ReservedLetter { key: '2', letter: '#' }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_keypad_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, KeypadConfigError::Parse(_)));
    }
}
