//! Command-line front end for the keypad decoder: the interactive shell,
//! batch decoding and keypad config tooling behind `padtool`.

pub mod commands;
pub mod shell;
pub mod trace_init;
