use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use serde::Serialize;
use tracing::debug_span;

use phonepad_core::{decode, decode_with, KeyTable};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One decoded line of a batch file.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub input: String,
    pub output: String,
    /// False when the line was refused for lacking the terminator.
    pub valid: bool,
}

pub fn decode_cmd(inputs: &[String]) {
    for input in inputs {
        println!("{}", decode(input));
    }
}

pub fn batch_cmd(file: &str, json: bool) {
    let f = die!(File::open(file), "Error opening {file}: {}");
    let entries = die!(
        decode_batch(KeyTable::global(), BufReader::new(f)),
        "Error reading {file}: {}"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(write_entries(&mut out, &entries, json), "Error writing output: {}");
}

/// Decode every non-blank line of `reader`.
pub fn decode_batch<R: BufRead>(table: &KeyTable, reader: R) -> io::Result<Vec<BatchEntry>> {
    let _span = debug_span!("decode_batch").entered();

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let input = line.strip_suffix('\r').unwrap_or(&line);
        if input.trim().is_empty() {
            continue;
        }
        let valid = input.ends_with('#');
        entries.push(BatchEntry {
            input: input.to_string(),
            output: decode_with(table, input),
            valid,
        });
    }
    Ok(entries)
}

/// Write entries as `input<TAB>output` lines, or as JSON lines.
pub fn write_entries<W: Write>(out: &mut W, entries: &[BatchEntry], json: bool) -> io::Result<()> {
    for entry in entries {
        if json {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{}", entry.input, entry.output)?;
        }
    }
    out.flush()
}
