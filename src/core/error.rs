// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for transcodec.
//!
//! Provides error types for codec operations:
//! - Malformed input (validation failures)
//! - Not-applicable operations (input shape mismatches)
//! - Unsupported codec directions

use std::fmt;

/// Errors that can occur during codec operations.
///
/// The conversion pipeline maps every variant to an absent result without
/// inspecting its content; the reason strings exist for diagnostic logging.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Codec-specific validation failure
    Malformed {
        /// Codec that rejected the input
        codec: String,
        /// Validation error message
        reason: String,
    },

    /// Operation not meaningful for this input shape
    NotApplicable {
        /// Codec that declined the input
        codec: String,
        /// Why the input shape does not fit
        reason: String,
    },

    /// Codec direction intentionally not implemented
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create a malformed-input error.
    pub fn malformed(codec: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::Malformed {
            codec: codec.into(),
            reason: reason.into(),
        }
    }

    /// Create a not-applicable error.
    pub fn not_applicable(codec: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::NotApplicable {
            codec: codec.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an "input is not valid UTF-8" error for a text-interpreting codec.
    pub fn invalid_utf8(codec: impl Into<String>) -> Self {
        CodecError::Malformed {
            codec: codec.into(),
            reason: "input is not valid UTF-8".to_string(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Malformed { codec, reason } => {
                vec![("codec", codec.clone()), ("reason", reason.clone())]
            }
            CodecError::NotApplicable { codec, reason } => {
                vec![("codec", codec.clone()), ("reason", reason.clone())]
            }
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Malformed { codec, reason } => {
                write!(f, "Malformed input for {codec}: {reason}")
            }
            CodecError::NotApplicable { codec, reason } => {
                write!(f, "{codec} not applicable: {reason}")
            }
            CodecError::Unsupported { feature } => {
                write!(f, "Unsupported feature: '{feature}'")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for transcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
