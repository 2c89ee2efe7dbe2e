//! Shell scripts and automation need a way to emit a single log line without
//! linking the library.
//!
//! Usage:
//!   aglog [OPTIONS] <LEVEL> [MESSAGE]...
//!   aglog --level warn --format json error "disk full" '{"free":0}'

use aglog::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    run(&Cli::parse())
}
