use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn keypad_export() {
    print!("{}", phonepad_core::keypad::default_toml());
}

pub fn keypad_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(
        phonepad_core::keypad::parse_keypad_toml(&content),
        "Error: {}"
    );
    println!("OK: {} keys", map.len());
}
