// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout transcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy for codec operations
//! - [`Result`] - Result alias over [`CodecError`]

pub mod error;

pub use error::{CodecError, Result};
