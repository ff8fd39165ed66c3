//! Context-aware document walker and its position-dependent rules
//!
//! The walker visits every node of the parsed tree in pre-order, deriving a
//! fresh [`Context`] per depth, and applies the checks that cannot be
//! expressed as flat per-key predicates: `$ref` target legality depends on
//! the enclosing position, the `type` keyword must be told apart from
//! properties and models that merely happen to be named "type", and bound
//! pairs are compared across sibling keys. `$ref` values are inspected as
//! strings only and never resolved, so cycles in the document cannot occur
//! during the walk.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::config::{self, RuleConfig};
use crate::context::{Context, Dialect};
use crate::diagnostics::{Diagnostic, Report};
use crate::path::Path;
use serde_json::{Map, Value};

/// Bound pairs checked on every mapping, with their literal messages
const BOUND_PAIRS: &[(&str, &str, &str)] = &[
    ("minimum", "maximum", "Minimum cannot be more than maximum"),
    (
        "minProperties",
        "maxProperties",
        "minProperties cannot be more than maxProperties",
    ),
    (
        "minLength",
        "maxLength",
        "minLength cannot be more than maxLength",
    ),
];

/// Example payloads are opaque values, not specification structure
const EXAMPLE_KEYS: &[&str] = &["example", "examples"];

/// Run the walker rule module over a whole document
pub fn validate(document: &Value, dialect: Dialect, config: &RuleConfig) -> Report {
    let mut report = Report::new();
    walk(
        document,
        &Path::root(),
        &Context::root(dialect),
        config,
        &mut report,
    );
    log::debug!(
        "walker pass finished: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    report
}

/// Pre-order recursive descent; side-effecting only through the report
fn walk(node: &Value, path: &Path, context: &Context, config: &RuleConfig, report: &mut Report) {
    match node {
        Value::Object(map) => {
            check_ref(map, path, context, config, report);
            check_type_key(map, path, context, config, report);
            check_bounds(map, path, config, report);

            for (key, value) in map {
                if EXAMPLE_KEYS.contains(&key.as_str()) {
                    continue;
                }
                let child_path = path.child(key);
                let child_context = context.derive(key);
                walk(value, &child_path, &child_context, config, report);
            }
        }
        Value::Array(elements) => {
            for (index, value) in elements.iter().enumerate() {
                let child_path = path.child_index(index);
                let child_context = context.derive_index(index);
                walk(value, &child_path, &child_context, config, report);
            }
        }
        // Scalars have no position-dependent rules of their own
        _ => {}
    }
}

/// `$ref` target legality and `$ref` sibling reporting
fn check_ref(
    map: &Map<String, Value>,
    path: &Path,
    context: &Context,
    config: &RuleConfig,
    report: &mut Report,
) {
    if !map.contains_key("$ref") {
        return;
    }

    if let Some(target) = map.get("$ref").and_then(Value::as_str) {
        if let Some((label, expected)) = context.kind.ref_target(context.dialect) {
            if !target.starts_with(expected) {
                report.emit(
                    config.resolve(config::INCORRECT_REF_PATTERN),
                    Diagnostic::new(
                        path.child("$ref"),
                        format!("{label} $refs must follow this format: *{expected}*"),
                    ),
                );
            }
        }
    }

    // Strict JSON Reference semantics ignore everything beside a $ref, so
    // each extra sibling is silently meaningless. One diagnostic per sibling,
    // anchored at the sibling itself; no sibling key is exempt.
    for key in map.keys().filter(|key| *key != "$ref") {
        report.emit(
            config.resolve(config::REF_SIBLINGS),
            Diagnostic::new(
                path.child(key),
                "Values sibling to a $ref will be ignored.",
            ),
        );
    }
}

/// The structural `type` keyword must be a string
///
/// Skipped when the containing mapping holds user-chosen names (a model,
/// property, or security scheme named "type" is not a keyword) and when the
/// mapping is a reference object.
fn check_type_key(
    map: &Map<String, Value>,
    path: &Path,
    context: &Context,
    config: &RuleConfig,
    report: &mut Report,
) {
    let Some(type_value) = map.get("type") else {
        return;
    };
    if type_value.is_string() || context.holds_names() || map.contains_key("$ref") {
        return;
    }
    report.emit(
        config.resolve(config::NON_STRING_TYPE),
        Diagnostic::new(path.child("type"), "\"type\" should be a string"),
    );
}

/// Pairwise bound consistency: min must not exceed max
///
/// Bounds may arrive as numbers or numeric-looking strings; a missing or
/// non-numeric side makes the pair not applicable.
fn check_bounds(
    map: &Map<String, Value>,
    path: &Path,
    config: &RuleConfig,
    report: &mut Report,
) {
    for (min_key, max_key, message) in BOUND_PAIRS {
        let min = map.get(*min_key).and_then(numeric);
        let max = map.get(*max_key).and_then(numeric);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                report.emit(
                    config.resolve(config::INVERTED_BOUNDS),
                    Diagnostic::new(path.child(*min_key), *message),
                );
            }
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
