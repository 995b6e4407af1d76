use tracing::debug;

use crate::keypad::KeyTable;

/// Consecutive presses of one key that have not been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyRun {
    pub key: char,
    /// Always >= 1.
    pub presses: usize,
}

/// Scan state for a single decode call.
#[derive(Debug)]
pub(crate) struct DecoderRun<'t> {
    table: &'t KeyTable,
    active: Option<KeyRun>,
    consecutive_undos: usize,
    output: String,
}

impl<'t> DecoderRun<'t> {
    pub(crate) fn new(table: &'t KeyTable) -> Self {
        Self {
            table,
            active: None,
            consecutive_undos: 0,
            output: String::new(),
        }
    }

    /// A key press: extends the active run if it is the same key, otherwise
    /// commits the active run and starts a new one.
    pub(crate) fn press(&mut self, key: char) {
        self.consecutive_undos = 0;
        match self.active {
            Some(ref mut run) if run.key == key => run.presses += 1,
            _ => {
                self.commit();
                self.active = Some(KeyRun { key, presses: 1 });
            }
        }
    }

    /// The first undo of a streak only drops the pending run. Every further
    /// undo in the same streak removes one committed character.
    pub(crate) fn undo(&mut self) {
        self.consecutive_undos += 1;
        if self.consecutive_undos > 1 {
            self.output.pop();
        }
        self.active = None;
        debug!(
            consecutive_undos = self.consecutive_undos,
            output = %self.output,
            "undo"
        );
    }

    pub(crate) fn separate(&mut self) {
        self.consecutive_undos = 0;
        self.commit();
    }

    /// Unknown symbols break an undo streak but leave the active run alone.
    pub(crate) fn skip(&mut self) {
        self.consecutive_undos = 0;
    }

    /// Commits the pending run and returns the decoded text.
    pub(crate) fn finish(mut self) -> String {
        self.commit();
        self.output
    }

    fn commit(&mut self) {
        let Some(run) = self.active.take() else {
            return;
        };
        if let Some(ch) = letter_for(self.table, run) {
            self.output.push(ch);
        }
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<KeyRun> {
        self.active
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &str {
        &self.output
    }
}

/// Letter selected by a run; presses past the last letter wrap around.
/// `None` for keys that produce nothing.
pub(crate) fn letter_for(table: &KeyTable, run: KeyRun) -> Option<char> {
    let letters = table.letters(run.key)?;
    if letters.is_empty() {
        return None;
    }
    Some(letters[(run.presses - 1) % letters.len()])
}
