// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codecs command - list the registered codecs.

use clap::Args;

use crate::common::Result;
use transcodec::global_registry;

/// List registered codecs in registry order.
#[derive(Args, Clone, Debug)]
pub struct CodecsCmd {}

impl CodecsCmd {
    pub fn run(self) -> Result<()> {
        for name in global_registry().names() {
            println!("{name}");
        }
        Ok(())
    }
}
