
use crate::keypad::KeyTable;

pub(super) fn decode_default(input: &str) -> String {
    super::decode_with(&KeyTable::default(), input)
}
