// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::Read as _;
use std::path::PathBuf;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Read the input buffer from an argument, a file, or stdin.
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }
    if let Some(path) = file {
        return Ok(std::fs::read(&path)?);
    }

    let mut buffer = Vec::new();
    std::io::stdin().read_to_end(&mut buffer)?;
    // a trailing newline from an interactive shell or `echo` is not input
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    Ok(buffer)
}

/// Render decoded bytes for terminal output.
///
/// Valid UTF-8 prints as text; anything else falls back to lowercase hex.
pub fn render_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => hex::encode(bytes),
    }
}
