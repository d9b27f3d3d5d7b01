//! # newsrec-cli
//!
//! Command-line arguments, terminal rendering and the interactive
//! recommendation loop behind the `newsrec` binary.

pub mod args;
pub mod display;
pub mod repl;

pub use args::{Cli, FormatArg};
pub use repl::{run, LoopExit};
