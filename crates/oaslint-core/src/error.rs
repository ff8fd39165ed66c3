//! Error types for the oaslint core library
//!
//! Validation itself never fails: it always runs to completion and returns a
//! [`Report`](crate::Report), even for badly malformed documents. The only
//! fallible surface is configuration handling, covered by the types here.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for oaslint configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// An unknown severity keyword in a rule configuration
    #[error("invalid severity '{value}': expected 'error', 'warning', or 'off'")]
    InvalidSeverity { value: String },

    /// A rule configuration document with the wrong shape
    #[error("invalid rule configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
