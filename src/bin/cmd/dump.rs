// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dump command - show buffer statistics and a hex dump.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, Result};
use transcodec::{hexdump, BufferStats};

/// Inspect the input buffer.
#[derive(Args, Clone, Debug)]
pub struct DumpCmd {
    /// Input text (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl DumpCmd {
    pub fn run(self) -> Result<()> {
        let input = read_input(self.text, self.file)?;

        println!("{}", BufferStats::of(&input));
        println!();
        print!("{}", hexdump(&input));

        Ok(())
    }
}
