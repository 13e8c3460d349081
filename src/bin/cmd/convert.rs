// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - run every codec over the input and list candidates.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, render_bytes, Result};
use transcodec::convert;

/// Run the conversion pipeline over the input.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// Input text (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Include empty and identity results
    #[arg(long)]
    all: bool,
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        let input = read_input(self.text, self.file)?;
        let results = convert(&input);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        println!("=== Decode ===");
        for result in &results {
            let decoded = if self.all {
                result.decoded.as_deref()
            } else {
                result.presentable_decoded(&input)
            };
            if let Some(bytes) = decoded {
                println!("{:>10}  {}", result.name, render_bytes(bytes));
            }
        }

        println!();
        println!("=== Encode ===");
        for result in &results {
            let encoded = if self.all {
                result.encoded.as_deref()
            } else {
                result.presentable_encoded(&input)
            };
            if let Some(text) = encoded {
                println!("{:>10}  {}", result.name, text);
            }
        }

        Ok(())
    }
}
