// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Transcodec CLI
//!
//! Command-line tool for text/binary conversions.
//!
//! ## Usage
//!
//! ```sh
//! # Run every codec over the input and list the candidates
//! transcodec convert "68656c6c6f"
//!
//! # Apply a single codec by name
//! transcodec encode base64 "hello"
//! transcodec decode hex "68 65 6c 6c 6f"
//!
//! # Inspect a buffer
//! transcodec dump --file data.bin
//!
//! # List the registered codecs
//! transcodec codecs
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{CodecsCmd, ConvertCmd, DecodeCmd, DumpCmd, EncodeCmd};
use common::Result;

/// Transcodec - text/binary conversion toolkit
///
/// Run a fixed catalog of bidirectional codecs over an input buffer, apply a
/// single codec by name, or inspect raw bytes as a hex dump.
#[derive(Parser, Clone)]
#[command(name = "transcodec")]
#[command(about = "Text/binary conversion toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Run every codec over the input and list conversion candidates
    Convert(ConvertCmd),

    /// Encode the input with a single codec
    Encode(EncodeCmd),

    /// Decode the input with a single codec
    Decode(DecodeCmd),

    /// Show buffer statistics and a hex dump of the input
    Dump(DumpCmd),

    /// List registered codecs in registry order
    Codecs(CodecsCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(cmd) => cmd.run(),
        Commands::Encode(cmd) => cmd.run(),
        Commands::Decode(cmd) => cmd.run(),
        Commands::Dump(cmd) => cmd.run(),
        Commands::Codecs(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
