//! Schema-shape rules
//!
//! Operates over a flat list of schema subtrees gathered up front: named
//! definitions, every mapping reached through a structural `schema` key, and
//! inline parameter objects (which carry schema keywords like `items` and
//! `enum` directly). Each collected schema is then scanned recursively
//! through its `properties` and `items`, so the generic walker never has to
//! re-derive schema semantics.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::config::{self, RuleConfig};
use crate::context::Dialect;
use crate::diagnostics::{Diagnostic, Report};
use crate::path::Path;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

static SNAKE_CASE: OnceLock<Regex> = OnceLock::new();

fn snake_case() -> &'static Regex {
    SNAKE_CASE.get_or_init(|| Regex::new("^[a-z][a-z0-9_]*$").expect("snake case pattern"))
}

/// Run the schema-shape rule module over a whole document
pub fn validate(document: &Value, _dialect: Dialect, config: &RuleConfig) -> Report {
    let mut report = Report::new();
    let schemas = collect_schemas(document);
    log::debug!("schema pass collected {} schemas", schemas.len());

    for (schema, path) in &schemas {
        scan_schema(schema, path, config, &mut report);
    }
    report
}

/// Gather every schema subtree with the path it was found at
///
/// Named definitions come first, then `components.schemas`, then everything
/// discovered by a pre-order sweep: `schema`-keyed mappings (both dialects
/// keep response, body-parameter, and media-type schemas under that key) and
/// inline elements of `parameters` sequences. The resulting order is stable
/// for a given document.
fn collect_schemas(document: &Value) -> Vec<(&Map<String, Value>, Path)> {
    let mut schemas = Vec::new();

    if let Some(definitions) = document.get("definitions").and_then(Value::as_object) {
        for (name, definition) in definitions {
            if let Some(schema) = definition.as_object() {
                schemas.push((schema, Path::from(["definitions"]).child(name)));
            }
        }
    }

    if let Some(named) = document
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(Value::as_object)
    {
        for (name, definition) in named {
            if let Some(schema) = definition.as_object() {
                schemas.push((schema, Path::from(["components", "schemas"]).child(name)));
            }
        }
    }

    sweep(document, &Path::root(), &mut schemas);
    schemas
}

fn sweep<'a>(node: &'a Value, path: &Path, out: &mut Vec<(&'a Map<String, Value>, Path)>) {
    match node {
        Value::Object(map) => {
            let key = path.last();
            let parent_key = parent_segment(path);

            if key == Some("schema")
                && parent_key != Some("properties")
                && !map.contains_key("$ref")
            {
                out.push((map, path.clone()));
            }

            for (child_key, value) in map {
                // Example payloads may mimic schema shapes; they are values,
                // not structure, and are skipped wholesale.
                if child_key == "example" || child_key == "examples" {
                    continue;
                }
                sweep(value, &path.child(child_key), out);
            }
        }
        Value::Array(elements) => {
            let in_parameters = path.last() == Some("parameters");
            for (index, element) in elements.iter().enumerate() {
                let element_path = path.child_index(index);
                if in_parameters {
                    if let Some(parameter) = element.as_object() {
                        if !parameter.contains_key("$ref") {
                            out.push((parameter, element_path.clone()));
                        }
                    }
                }
                sweep(element, &element_path, out);
            }
        }
        _ => {}
    }
}

fn parent_segment(path: &Path) -> Option<&str> {
    let segments = path.segments();
    match segments.len() {
        0 | 1 => None,
        len => Some(segments[len - 2].as_str()),
    }
}

/// Recursive scan of one collected schema
fn scan_schema(schema: &Map<String, Value>, path: &Path, config: &RuleConfig, report: &mut Report) {
    check_enum_values(schema, path, config, report);

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            let Some(property) = property.as_object() else {
                continue;
            };
            // A $ref property defers everything to the referenced definition.
            if property.contains_key("$ref") {
                continue;
            }
            let property_path = path.child("properties").child(name);

            if !name.starts_with("x-") {
                check_property_name(name, &property_path, config, report);
                check_description(property, &property_path, config, report);
            }
            check_type_format(property, &property_path, config, report);
            scan_schema(property, &property_path, config, report);
        }
    }

    if let Some(items) = schema.get("items").and_then(Value::as_object) {
        if !items.contains_key("$ref") {
            scan_schema(items, &path.child("items"), config, report);
        }
    }
}

fn check_property_name(name: &str, path: &Path, config: &RuleConfig, report: &mut Report) {
    if !snake_case().is_match(name) {
        report.emit(
            config.resolve(config::SNAKE_CASE_ONLY),
            Diagnostic::new(path.clone(), "Property names must be lower snake case."),
        );
    }
}

fn check_enum_values(
    schema: &Map<String, Value>,
    path: &Path,
    config: &RuleConfig,
    report: &mut Report,
) {
    let Some(values) = schema.get("enum").and_then(Value::as_array) else {
        return;
    };
    for (index, value) in values.iter().enumerate() {
        if let Some(member) = value.as_str() {
            if !snake_case().is_match(member) {
                report.emit(
                    config.resolve(config::SNAKE_CASE_ONLY),
                    Diagnostic::new(
                        path.child("enum").child_index(index),
                        "Enum values must be lower snake case.",
                    ),
                );
            }
        }
    }
}

fn check_description(
    property: &Map<String, Value>,
    path: &Path,
    config: &RuleConfig,
    report: &mut Report,
) {
    let description_path = path.child("description");
    let description = property
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");

    if description.is_empty() {
        report.emit(
            config.resolve(config::NO_PROPERTY_DESCRIPTION),
            Diagnostic::new(
                description_path,
                "Schema properties must have a description with content in it.",
            ),
        );
    } else if description.to_lowercase().contains("json") {
        // Not every client SDK language materializes models as JSON objects;
        // descriptions should describe the abstract model.
        report.emit(
            config.resolve(config::DESCRIPTION_MENTIONS_JSON),
            Diagnostic::new(
                description_path,
                "Not all languages use JSON, so descriptions should not state that the model is a JSON object.",
            ),
        );
    }
}

fn check_type_format(
    property: &Map<String, Value>,
    path: &Path,
    config: &RuleConfig,
    report: &mut Report,
) {
    // A property without a string `type` is skipped here: the walker owns
    // the non-string `type` diagnostic.
    let Some(type_name) = property.get("type").and_then(Value::as_str) else {
        return;
    };

    match type_name {
        "array" => {
            let Some(items) = property.get("items").and_then(Value::as_object) else {
                return;
            };
            if items.contains_key("$ref") {
                return;
            }
            if items.get("type").and_then(Value::as_str) == Some("array") {
                report.emit(
                    config.resolve(config::ARRAY_OF_ARRAYS),
                    Diagnostic::new(
                        path.child("items").child("type"),
                        "Array properties should avoid having items of type array.",
                    ),
                );
            }
            if !format_valid(items) {
                report.emit(
                    config.resolve(config::INVALID_TYPE_FORMAT_PAIR),
                    Diagnostic::new(
                        path.child("items").child("type"),
                        "Property type+format is not well-defined.",
                    ),
                );
            }
        }
        "object" => {}
        _ => {
            if !format_valid(property) {
                report.emit(
                    config.resolve(config::INVALID_TYPE_FORMAT_PAIR),
                    Diagnostic::new(
                        path.child("type"),
                        "Property type+format is not well-defined.",
                    ),
                );
            }
        }
    }
}

/// Whether a schema node's declared type/format pair is recognized
fn format_valid(schema: &Map<String, Value>) -> bool {
    if schema.contains_key("$ref") {
        return true;
    }
    let Some(type_name) = schema.get("type").and_then(Value::as_str) else {
        return true;
    };
    let format = schema
        .get("format")
        .and_then(Value::as_str)
        .map(str::to_lowercase);

    match type_name {
        "integer" => allowed(format.as_deref(), &["int32", "int64"]),
        "number" => allowed(format.as_deref(), &["float", "double"]),
        "string" => allowed(
            format.as_deref(),
            &["byte", "binary", "date", "date-time", "password"],
        ),
        // Booleans have no valid formats at all; the key should be omitted.
        "boolean" => !schema.contains_key("format"),
        "object" => true,
        "array" => schema
            .get("items")
            .and_then(Value::as_object)
            .map(format_valid)
            .unwrap_or(true),
        _ => false,
    }
}

fn allowed(format: Option<&str>, whitelist: &[&str]) -> bool {
    match format {
        None => true,
        Some(format) => whitelist.contains(&format),
    }
}
