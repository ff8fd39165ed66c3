//! Diagnostics and the per-run report
//!
//! A [`Diagnostic`] carries a document path and a stable, human-readable
//! message. Severity is never stored on the diagnostic itself: it is resolved
//! once, at the moment a rule fires, and decides which stream of the
//! [`Report`] receives the record (or whether it is dropped entirely).
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::config::Severity;
use crate::path::Path;
use serde::Serialize;

/// A single rule finding, anchored to a document location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Path of the offending node
    pub path: Path,
    /// Human-readable message; the exact text is part of the contract
    pub message: String,
}

impl Diagnostic {
    pub fn new<M: Into<String>>(path: Path, message: M) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

/// The accumulated result of one validation run
///
/// Within each stream, diagnostics appear in document traversal order of the
/// module that produced them. Merging appends and never reorders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a diagnostic according to its resolved severity
    ///
    /// `Severity::Off` drops the diagnostic with no other side effect.
    pub fn emit(&mut self, severity: Severity, diagnostic: Diagnostic) {
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
            Severity::Off => {}
        }
    }

    /// Append another report, preserving the order within both
    pub fn merge(&mut self, other: Report) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when neither stream holds a diagnostic
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
