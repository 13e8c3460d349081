// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod codecs;
mod convert;
mod dump;
mod single;

pub use codecs::CodecsCmd;
pub use convert::ConvertCmd;
pub use dump::DumpCmd;
pub use single::{DecodeCmd, EncodeCmd};
