//! oaslint-core - Context-aware semantic linter core for OpenAPI documents
//!
//! This crate walks an already-parsed OpenAPI/Swagger 2 or OpenAPI 3 document
//! tree and reports style and correctness violations as structured
//! diagnostics, split into `errors` and `warnings` streams with a
//! configurable severity per rule.
//!
//! # Main Components
//!
//! - **Walker**: pre-order recursive descent with per-depth semantic
//!   [`Context`], applying the position-dependent rules (`$ref` legality,
//!   `type`-keyword disambiguation, bound pairing)
//! - **Rule modules**: flat scans over pre-collected slices of the document
//!   (schema shapes, inline response schemas)
//! - **Severity plumbing**: every rule resolves against a [`RuleConfig`] at
//!   the moment it fires; `off` suppresses the diagnostic entirely
//!
//! The core performs no I/O, never resolves `$ref` targets, never mutates
//! the input, and never fails on malformed documents: validation always runs
//! to completion and returns a [`Report`].
//!
//! # Example
//!
//! ```
//! use oaslint_core::{validate, Dialect, RuleConfig};
//! use serde_json::json;
//!
//! let document = json!({
//!     "paths": {
//!         "/pets": {
//!             "get": {
//!                 "responses": {
//!                     "200": { "schema": { "$ref": "#/definitions/Pets" } }
//!                 }
//!             }
//!         }
//!     }
//! });
//!
//! let report = validate(&document, Dialect::Swagger2, &RuleConfig::new());
//! assert!(report.is_clean());
//! ```
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod path;
pub mod rules;
pub mod walker;

// Re-export main types for convenience
pub use config::{RuleConfig, Severity};
pub use context::{Context, Dialect, PositionKind};
pub use diagnostics::{Diagnostic, Report};
pub use error::{Error, Result};
pub use path::Path;

use serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate a parsed document and return the merged report
///
/// Runs every rule module over the tree and merges their reports in a fixed,
/// documented order: walker first, then the responses module, then the
/// schema-shape module. Within each module, diagnostics follow that module's
/// pre-order traversal of the document, so the result is deterministic for a
/// given `(document, dialect, config)` triple.
///
/// The call is pure and re-entrant: no state survives between calls, and
/// concurrent callers need no coordination.
pub fn validate(document: &Value, dialect: Dialect, config: &RuleConfig) -> Report {
    let mut report = walker::validate(document, dialect, config);
    report.merge(rules::responses::validate(document, dialect, config));
    report.merge(rules::schemas::validate(document, dialect, config));
    log::debug!(
        "validation finished: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_empty_document_is_clean() {
        let report = validate(&json!({}), Dialect::Swagger2, &RuleConfig::new());
        assert!(report.is_clean());
    }

    #[test]
    fn test_scalar_root_is_skipped_not_fatal() {
        let report = validate(&json!("not a spec"), Dialect::OpenApi3, &RuleConfig::new());
        assert!(report.is_clean());
    }
}
