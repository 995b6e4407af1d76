fn main() {
    // Validate the embedded keypad table at compile time.
    validate_toml(
        "src/keypad/default_keypad.toml",
        include_str!("src/keypad/default_keypad.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
