use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;

use phonepad_cli::commands::{decode_ops, keypad_ops};
use phonepad_cli::shell::Shell;
use phonepad_cli::trace_init::init_tracing;
use phonepad_core::KeyTable;

#[derive(Parser)]
#[command(name = "padtool", about = "Old phone keypad decoder")]
struct Cli {
    /// Custom keypad layout (TOML, see `keypad-export`)
    #[arg(long, global = true)]
    keypad: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Write JSON logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive shell, one input per line (default)
    Repl,
    /// Decode each argument and print the result
    Decode {
        /// Key sequences, e.g. "4433555 555666#"
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Decode every line of a file
    Batch {
        /// Input file (one key sequence per line)
        file: String,
        /// Output as JSON lines instead of tab-separated text
        #[arg(long)]
        json: bool,
    },
    /// Print the default keypad layout
    KeypadExport,
    /// Check a keypad layout file
    KeypadValidate {
        /// Keypad TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref(), &cli.log_level);

    if let Some(ref path) = cli.keypad {
        load_keypad(path);
    }

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let shell = Shell::new(KeyTable::global());
            if let Err(e) = shell.run(io::stdin().lock(), io::stdout().lock()) {
                error!(error = %e, "shell aborted");
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Command::Decode { inputs } => decode_ops::decode_cmd(&inputs),
        Command::Batch { file, json } => decode_ops::batch_cmd(&file, json),
        Command::KeypadExport => keypad_ops::keypad_export(),
        Command::KeypadValidate { file } => keypad_ops::keypad_validate(&file),
    }
}

fn load_keypad(path: &Path) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read keypad file {}: {}", path.display(), e);
        process::exit(1);
    });
    if let Err(e) = KeyTable::init_custom(content) {
        eprintln!("Invalid keypad file {}: {}", path.display(), e);
        process::exit(1);
    }
}
