// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode/decode commands - apply a single codec by name.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, render_bytes, Result};
use transcodec::{global_registry, Codec};

/// Encode the input with one codec.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// Codec name (see `transcodec codecs`)
    #[arg(value_name = "CODEC")]
    codec: String,

    /// Input text (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let codec = lookup(&self.codec)?;
        let input = read_input(self.text, self.file)?;
        println!("{}", codec.encode(&input)?);
        Ok(())
    }
}

/// Decode the input with one codec.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Codec name (see `transcodec codecs`)
    #[arg(value_name = "CODEC")]
    codec: String,

    /// Input text (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let codec = lookup(&self.codec)?;
        let input = read_input(self.text, self.file)?;
        println!("{}", render_bytes(&codec.decode(&input)?));
        Ok(())
    }
}

fn lookup(name: &str) -> Result<&'static dyn Codec> {
    global_registry().get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown codec '{name}' (known: {})",
            global_registry().names().join(", ")
        )
    })
}
