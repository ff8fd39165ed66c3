//! Rule severity configuration
//!
//! Every rule is identified by a stable snake-case name and resolves to a
//! [`Severity`] at the moment it fires. Callers supply a flat
//! `rule name -> severity` map of overrides; anything left unconfigured falls
//! back to the built-in default table. Resolution is a pure per-call lookup,
//! so no process-wide default is ever mutated by a partial override.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// `$ref` targets must match the pattern allowed at their position
pub const INCORRECT_REF_PATTERN: &str = "incorrect_ref_pattern";
/// Keys sitting beside a `$ref` are silently ignored by JSON Reference
pub const REF_SIBLINGS: &str = "ref_siblings";
/// A structural `type` keyword must hold a string
pub const NON_STRING_TYPE: &str = "non_string_type";
/// A minimum-side bound must not exceed its maximum-side sibling
pub const INVERTED_BOUNDS: &str = "inverted_bounds";
/// Response schemas should be named refs, not inline objects
pub const INLINE_RESPONSE_SCHEMA: &str = "inline_response_schema";
/// Schema properties must use recognized type/format pairs
pub const INVALID_TYPE_FORMAT_PAIR: &str = "invalid_type_format_pair";
/// Array properties should not nest arrays directly
pub const ARRAY_OF_ARRAYS: &str = "array_of_arrays";
/// Schema properties need a non-blank description
pub const NO_PROPERTY_DESCRIPTION: &str = "no_property_description";
/// Descriptions should not present the model as a JSON object
pub const DESCRIPTION_MENTIONS_JSON: &str = "description_mentions_json";
/// Property names and enum values must be lower snake case
pub const SNAKE_CASE_ONLY: &str = "snake_case_only";

/// Default severity for every known rule; unknown rules resolve to `Off`
const DEFAULT_SEVERITIES: &[(&str, Severity)] = &[
    (INCORRECT_REF_PATTERN, Severity::Error),
    (REF_SIBLINGS, Severity::Off),
    (NON_STRING_TYPE, Severity::Error),
    (INVERTED_BOUNDS, Severity::Error),
    (INLINE_RESPONSE_SCHEMA, Severity::Warning),
    (INVALID_TYPE_FORMAT_PAIR, Severity::Error),
    (ARRAY_OF_ARRAYS, Severity::Warning),
    (NO_PROPERTY_DESCRIPTION, Severity::Warning),
    (DESCRIPTION_MENTIONS_JSON, Severity::Warning),
    (SNAKE_CASE_ONLY, Severity::Warning),
];

/// Resolved severity for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routed to the `errors` stream
    Error,
    /// Routed to the `warnings` stream
    Warning,
    /// Suppressed entirely: no observable side effect
    Off,
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "off" => Ok(Severity::Off),
            other => Err(Error::InvalidSeverity {
                value: other.to_string(),
            }),
        }
    }
}

/// Per-run rule configuration: overrides layered over the default table
///
/// Immutable during a validation run. The default configuration (no
/// overrides) enables every rule at its built-in severity, with
/// [`REF_SIBLINGS`] off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleConfig {
    overrides: HashMap<String, Severity>,
}

impl RuleConfig {
    /// Configuration with no overrides: built-in defaults apply
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style override for a single rule
    pub fn with_rule<N: Into<String>>(mut self, rule: N, severity: Severity) -> Self {
        self.overrides.insert(rule.into(), severity);
        self
    }

    /// Configuration with every known rule switched off
    pub fn all_off() -> Self {
        let mut config = Self::new();
        for (rule, _) in DEFAULT_SEVERITIES {
            config.overrides.insert((*rule).to_string(), Severity::Off);
        }
        config
    }

    /// Parse a flat `rule name -> severity` JSON mapping
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| Error::InvalidConfig {
            message: "expected an object mapping rule names to severities".to_string(),
        })?;

        let mut config = Self::new();
        for (rule, severity) in map {
            let keyword = severity.as_str().ok_or_else(|| Error::InvalidConfig {
                message: format!("severity for rule '{rule}' must be a string"),
            })?;
            config.overrides.insert(rule.clone(), keyword.parse()?);
        }
        Ok(config)
    }

    /// Resolve the effective severity for a rule
    ///
    /// Overrides win over the default table; rules unknown to both resolve
    /// to `Off`.
    pub fn resolve(&self, rule: &str) -> Severity {
        if let Some(severity) = self.overrides.get(rule) {
            return *severity;
        }
        DEFAULT_SEVERITIES
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, severity)| *severity)
            .unwrap_or(Severity::Off)
    }

    /// Names of every rule with a built-in default
    pub fn known_rules() -> impl Iterator<Item = &'static str> {
        DEFAULT_SEVERITIES.iter().map(|(name, _)| *name)
    }
}
