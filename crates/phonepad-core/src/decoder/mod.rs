//! Multi-tap keypad decoder.
//!
//! Input is a sequence of key presses ended by `#`:
//!
//! - repeated presses of one digit cycle through that key's letters,
//! - a different digit, a space, or `#` commits the pending letter,
//! - `*` is backspace: the first `*` of a streak drops the pending letter,
//!   each further `*` in the same streak deletes one committed letter,
//! - any other character is ignored.
//!
//! Input that is empty or does not end with `#` decodes to an empty string.

mod run;
mod symbol;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::keypad::KeyTable;

use run::DecoderRun;
use symbol::{Symbol, TERMINATOR};

/// Decode keypad input using the global key table.
///
/// ```
/// assert_eq!(phonepad_core::decode("4433555 555666#"), "HELLO");
/// assert_eq!(phonepad_core::decode("4433555 555666"), "");
/// ```
pub fn decode(input: &str) -> String {
    decode_with(KeyTable::global(), input)
}

/// Decode keypad input using an explicit key table.
pub fn decode_with(table: &KeyTable, input: &str) -> String {
    let _span = debug_span!("decode", len = input.len()).entered();

    if !input.ends_with(TERMINATOR) {
        debug!("rejected: missing terminator");
        return String::new();
    }

    let mut state = DecoderRun::new(table);
    for ch in input.chars() {
        match Symbol::classify(ch, table) {
            Symbol::Terminator => break,
            Symbol::Undo => state.undo(),
            Symbol::Separator => state.separate(),
            Symbol::Key(key) => state.press(key),
            Symbol::Other(_) => state.skip(),
        }
    }

    // The precondition guarantees a terminator was reached, so the loop
    // only ever leaves through `break`.
    let output = state.finish();
    debug!(%output, "decoded message");
    output
}
