use crate::keypad::KeyTable;

pub(crate) const TERMINATOR: char = '#';
pub(crate) const UNDO: char = '*';
pub(crate) const SEPARATOR: char = ' ';

/// One input character, classified against a key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Symbol {
    Terminator,
    Undo,
    Separator,
    Key(char),
    /// Anything the pad does not know about, including digits missing from
    /// a custom table.
    Other(char),
}

impl Symbol {
    pub(crate) fn classify(ch: char, table: &KeyTable) -> Self {
        match ch {
            TERMINATOR => Symbol::Terminator,
            UNDO => Symbol::Undo,
            SEPARATOR => Symbol::Separator,
            c if table.contains(c) => Symbol::Key(c),
            c => Symbol::Other(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_symbols() {
        let table = KeyTable::default();
        assert_eq!(Symbol::classify('#', &table), Symbol::Terminator);
        assert_eq!(Symbol::classify('*', &table), Symbol::Undo);
        assert_eq!(Symbol::classify(' ', &table), Symbol::Separator);
    }

    #[test]
    fn test_digits_are_keys() {
        let table = KeyTable::default();
        for d in '0'..='9' {
            assert_eq!(Symbol::classify(d, &table), Symbol::Key(d));
        }
    }

    #[test]
    fn test_noise_is_other() {
        let table = KeyTable::default();
        assert_eq!(Symbol::classify('x', &table), Symbol::Other('x'));
        assert_eq!(Symbol::classify('\t', &table), Symbol::Other('\t'));
    }

    #[test]
    fn test_digit_missing_from_table_is_other() {
        let table = KeyTable::from_toml("[keys]\n\"2\" = \"ABC\"\n").unwrap();
        assert_eq!(Symbol::classify('2', &table), Symbol::Key('2'));
        assert_eq!(Symbol::classify('3', &table), Symbol::Other('3'));
    }
}
