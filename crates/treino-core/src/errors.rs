// ABOUTME: Error types for configuration loading and validation
// ABOUTME: Defines error variants for malformed synergist tables and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness Intelligence

//! Error types for configuration loading and validation.
//!
//! The calculation paths themselves are infallible: they perform no
//! validation and no I/O, so the only fallible surface in the engine is
//! loading an externalized configuration document.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A table entry is structurally invalid (empty key or empty value list)
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse a configuration document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
