//! Line-oriented interactive shell around the decoder.
//!
//! Each line is one keypad input. `exit` (any case), a blank line or end of
//! input ends the session; lines not ending with `#` are refused before they
//! reach the decoder.

use std::io::{self, BufRead, Write};

use tracing::{debug, error, info};

use phonepad_core::{decode_with, KeyTable};

const BANNER: &str = "\
Welcome to the Old Phone Pad App!
Type 'exit' to quit.
Enter your input sequence (e.g., 4433555 555666#):";

/// What the shell does with one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand<'a> {
    Exit,
    Invalid,
    Decode(&'a str),
}

/// Classify a raw line as read from the input, line ending included.
pub fn classify_line(line: &str) -> LineCommand<'_> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() || line.eq_ignore_ascii_case("exit") {
        LineCommand::Exit
    } else if !line.ends_with('#') {
        LineCommand::Invalid
    } else {
        LineCommand::Decode(line)
    }
}

/// Per-session line counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellSummary {
    pub decoded: usize,
    pub rejected: usize,
    pub errors: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct Shell<'t> {
    table: &'t KeyTable,
}

impl<'t> Shell<'t> {
    pub fn new(table: &'t KeyTable) -> Self {
        Self { table }
    }

    /// Run the read-decode-print loop until exit or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped. Any other read
    /// failure, and every write failure, ends the session with an error.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut out: W,
    ) -> Result<ShellSummary, ShellError> {
        info!("shell started");
        writeln!(out, "{BANNER}")?;

        let mut summary = ShellSummary::default();
        let mut line = String::new();
        loop {
            write!(out, "Input: ")?;
            out.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    error!(error = %e, "failed to read input line");
                    summary.errors += 1;
                    writeln!(out, "An error occurred. Please try again.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            match classify_line(&line) {
                LineCommand::Exit => break,
                LineCommand::Invalid => {
                    debug!(line = line.trim_end(), "rejected line");
                    summary.rejected += 1;
                    writeln!(out, "Invalid input. Make sure your input ends with '#'.")?;
                }
                LineCommand::Decode(keys) => {
                    let message = decode_with(self.table, keys);
                    summary.decoded += 1;
                    writeln!(out, "Decoded Message: {message}")?;
                }
            }
        }

        writeln!(out, "Exiting application. Goodbye!")?;
        info!(
            decoded = summary.decoded,
            rejected = summary.rejected,
            errors = summary.errors,
            "shell finished"
        );
        Ok(summary)
    }
}
