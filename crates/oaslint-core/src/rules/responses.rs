//! Inline response schema rule
//!
//! Response payload schemas should be defined once under a named ref rather
//! than inline, so shared models stay shared. The two dialects keep response
//! schemas in different places: OAS2 directly under the response, OAS3 one
//! level deeper under `content.<mime>.schema`, plus reusable responses under
//! `components.responses`.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::config::{self, RuleConfig};
use crate::context::Dialect;
use crate::diagnostics::{Diagnostic, Report};
use crate::path::Path;
use serde_json::{Map, Value};

const MESSAGE: &str = "Response schemas should be defined with a named ref.";

/// Run the responses rule module over a whole document
pub fn validate(document: &Value, dialect: Dialect, config: &RuleConfig) -> Report {
    let mut report = Report::new();

    if let Some(paths) = document.get("paths").and_then(Value::as_object) {
        for (path_name, path_item) in paths {
            let Some(path_item) = path_item.as_object() else {
                continue;
            };
            for (operation_name, operation) in path_item {
                let Some(responses) = operation
                    .as_object()
                    .and_then(|op| op.get("responses"))
                    .and_then(Value::as_object)
                else {
                    continue;
                };
                let base = Path::from(["paths"])
                    .child(path_name)
                    .child(operation_name)
                    .child("responses");
                check_responses(responses, &base, dialect, config, &mut report);
            }
        }
    }

    // Reusable response components carry their own content schemas.
    if dialect.is_oas3() {
        if let Some(components) = document
            .get("components")
            .and_then(|c| c.get("responses"))
            .and_then(Value::as_object)
        {
            for (name, response) in components {
                if let Some(response) = response.as_object() {
                    let path = Path::from(["components", "responses"]).child(name);
                    check_response(response, &path, dialect, config, &mut report);
                }
            }
        }
    }

    log::debug!(
        "responses pass finished: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    report
}

fn check_responses(
    responses: &Map<String, Value>,
    base: &Path,
    dialect: Dialect,
    config: &RuleConfig,
    report: &mut Report,
) {
    for (code, response) in responses {
        // Vendor extensions among the response codes are not responses.
        if code.starts_with("x-") {
            continue;
        }
        if let Some(response) = response.as_object() {
            check_response(response, &base.child(code), dialect, config, report);
        }
    }
}

fn check_response(
    response: &Map<String, Value>,
    path: &Path,
    dialect: Dialect,
    config: &RuleConfig,
    report: &mut Report,
) {
    match dialect {
        Dialect::Swagger2 => {
            if let Some(schema) = response.get("schema").and_then(Value::as_object) {
                if !schema.contains_key("$ref") {
                    report.emit(
                        config.resolve(config::INLINE_RESPONSE_SCHEMA),
                        Diagnostic::new(path.child("schema"), MESSAGE),
                    );
                }
            }
        }
        Dialect::OpenApi3 => {
            let Some(content) = response.get("content").and_then(Value::as_object) else {
                return;
            };
            for (mime, media) in content {
                let Some(schema) = media
                    .as_object()
                    .and_then(|m| m.get("schema"))
                    .and_then(Value::as_object)
                else {
                    continue;
                };
                if !schema.contains_key("$ref") {
                    report.emit(
                        config.resolve(config::INLINE_RESPONSE_SCHEMA),
                        Diagnostic::new(
                            path.child("content").child(mime).child("schema"),
                            MESSAGE,
                        ),
                    );
                }
            }
        }
    }
}
