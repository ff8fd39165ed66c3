//! Semantic position tracking for the document walker
//!
//! The same tree shape means different things depending on where it sits:
//! a mapping under `responses.200` is a response, one under `parameters.0`
//! is a parameter, and a mapping reached through a `schema` key is a schema.
//! The two dialects redefine these positions at the same shapes, so position
//! is derived purely from the sequence of keys taken to reach a node, never
//! from node content, and is reconstructed top-down as the walker descends.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Specification dialect of the document under validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// OpenAPI 2.0 (the `swagger: "2.0"` family)
    Swagger2,
    /// OpenAPI 3.x (the `openapi: "3..."` family)
    OpenApi3,
}

impl Dialect {
    pub fn is_oas3(self) -> bool {
        matches!(self, Dialect::OpenApi3)
    }

    /// Inspect the top-level version key of a parsed document
    ///
    /// Convenience for acquisition layers: an `openapi` key means OAS3,
    /// anything else (including a malformed root) falls back to Swagger 2.
    pub fn detect(document: &Value) -> Dialect {
        match document.get("openapi") {
            Some(_) => Dialect::OpenApi3,
            None => Dialect::Swagger2,
        }
    }
}

/// Semantic role of a node, inferred from ancestry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    /// The document root
    Root,
    /// A named schema under `definitions` (OAS2) or `components.schemas` (OAS3)
    Definition,
    /// A mapping reached through a structural `schema` key
    Schema,
    /// An entry of a `responses` mapping
    Response,
    /// An element of a `parameters` sequence, or a named component parameter
    Parameter,
    /// A `requestBody` or a named entry under `components.requestBodies`
    RequestBody,
    /// An entry of a `headers` mapping
    Header,
    /// A named entry under `components.securitySchemes`
    SecurityScheme,
    /// Any position without special meaning
    Other,
}

impl PositionKind {
    /// The `$ref` target restriction for this position, if any
    ///
    /// Returns the human label used in diagnostics and the required target
    /// prefix. Positions without a restriction return `None` and their refs
    /// are left alone.
    pub fn ref_target(self, dialect: Dialect) -> Option<(&'static str, &'static str)> {
        match (self, dialect) {
            (PositionKind::Schema, Dialect::Swagger2) => Some(("schema", "#/definitions")),
            (PositionKind::Schema, Dialect::OpenApi3) => Some(("schema", "#/components/schemas")),
            (PositionKind::Response, Dialect::Swagger2) => Some(("responses", "#/responses")),
            (PositionKind::Response, Dialect::OpenApi3) => {
                Some(("responses", "#/components/responses"))
            }
            (PositionKind::Parameter, Dialect::Swagger2) => Some(("parameters", "#/parameters")),
            (PositionKind::Parameter, Dialect::OpenApi3) => {
                Some(("parameters", "#/components/parameters"))
            }
            (PositionKind::Header, Dialect::OpenApi3) => Some(("headers", "#/components/headers")),
            _ => None,
        }
    }
}

/// Immutable per-depth context threaded through the walk
///
/// Holds the node's semantic role, the dialect, and the key used to enter the
/// node. The parent chain is the walker's call stack: contexts are derived on
/// descent and discarded on ascent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub kind: PositionKind,
    pub dialect: Dialect,
    key: Option<String>,
}

/// Mapping keys whose children are user-chosen names, not keywords
///
/// A model may be called `type`, a property may be called `parameters`: keys
/// of these containers never carry structural meaning themselves.
const NAME_CONTAINERS: &[&str] = &[
    "properties",
    "definitions",
    "schemas",
    "securitySchemes",
    "requestBodies",
    "headers",
    "parameters",
    "responses",
    "links",
    "callbacks",
];

impl Context {
    /// Context for the document root
    pub fn root(dialect: Dialect) -> Self {
        Self {
            kind: PositionKind::Root,
            dialect,
            key: None,
        }
    }

    /// The key used to reach this node, if it is not the root
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// True when this node's mapping keys are user-chosen names
    pub fn holds_names(&self) -> bool {
        matches!(self.key(), Some(key) if NAME_CONTAINERS.contains(&key))
    }

    /// Derive the context for a child entered through `key`
    ///
    /// Pure function of the parent context and the key: sequence elements use
    /// their decimal index as the key, so an element of a `parameters` array
    /// derives the Parameter kind through its parent's entry key.
    pub fn derive<S: Into<String>>(&self, key: S) -> Self {
        let key = key.into();
        Self {
            kind: derive_kind(self, &key),
            dialect: self.dialect,
            key: Some(key),
        }
    }

    /// Derive the context for a sequence element
    pub fn derive_index(&self, index: usize) -> Self {
        self.derive(index.to_string())
    }
}

fn derive_kind(parent: &Context, key: &str) -> PositionKind {
    // A `schema` key flips into schema position everywhere except inside
    // `properties`, where it is just a property named "schema".
    if key == "schema" && parent.key() != Some("properties") {
        return PositionKind::Schema;
    }
    if key == "requestBody" {
        return PositionKind::RequestBody;
    }
    match parent.key() {
        Some("responses") => PositionKind::Response,
        Some("parameters") => PositionKind::Parameter,
        Some("headers") => PositionKind::Header,
        Some("definitions") | Some("schemas") => PositionKind::Definition,
        Some("securitySchemes") => PositionKind::SecurityScheme,
        Some("requestBodies") => PositionKind::RequestBody,
        _ => PositionKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descend(dialect: Dialect, keys: &[&str]) -> Context {
        let mut context = Context::root(dialect);
        for key in keys {
            context = context.derive(*key);
        }
        context
    }

    #[test]
    fn test_schema_key_enters_schema_position() {
        let context = descend(
            Dialect::Swagger2,
            &["paths", "/pets", "get", "responses", "200", "schema"],
        );
        assert_eq!(context.kind, PositionKind::Schema);
    }

    #[test]
    fn test_property_named_schema_is_not_a_schema_position() {
        let context = descend(Dialect::Swagger2, &["definitions", "M", "properties", "schema"]);
        assert_eq!(context.kind, PositionKind::Other);
    }

    #[test]
    fn test_responses_entry_is_response_position() {
        let context = descend(Dialect::Swagger2, &["paths", "/pets", "get", "responses", "200"]);
        assert_eq!(context.kind, PositionKind::Response);
    }

    #[test]
    fn test_parameter_element_is_parameter_position() {
        let context = descend(Dialect::Swagger2, &["paths", "/pets", "get", "parameters"])
            .derive_index(0);
        assert_eq!(context.kind, PositionKind::Parameter);
    }

    #[test]
    fn test_property_named_parameters_is_not_a_parameter_position() {
        let context = descend(
            Dialect::Swagger2,
            &["definitions", "ServicePlan", "properties", "parameters"],
        );
        assert_eq!(context.kind, PositionKind::Other);
    }

    #[test]
    fn test_named_containers_by_dialect() {
        assert_eq!(
            descend(Dialect::Swagger2, &["definitions", "Pet"]).kind,
            PositionKind::Definition
        );
        assert_eq!(
            descend(Dialect::OpenApi3, &["components", "schemas", "Pet"]).kind,
            PositionKind::Definition
        );
        assert_eq!(
            descend(Dialect::OpenApi3, &["components", "securitySchemes", "basic"]).kind,
            PositionKind::SecurityScheme
        );
        assert_eq!(
            descend(Dialect::OpenApi3, &["components", "requestBodies", "Body"]).kind,
            PositionKind::RequestBody
        );
    }

    #[test]
    fn test_ref_targets_per_dialect() {
        assert_eq!(
            PositionKind::Schema.ref_target(Dialect::Swagger2),
            Some(("schema", "#/definitions"))
        );
        assert_eq!(
            PositionKind::Schema.ref_target(Dialect::OpenApi3),
            Some(("schema", "#/components/schemas"))
        );
        assert_eq!(
            PositionKind::Response.ref_target(Dialect::Swagger2),
            Some(("responses", "#/responses"))
        );
        assert_eq!(PositionKind::Header.ref_target(Dialect::Swagger2), None);
        assert_eq!(PositionKind::Other.ref_target(Dialect::OpenApi3), None);
    }

    #[test]
    fn test_dialect_detection() {
        assert_eq!(
            Dialect::detect(&json!({"openapi": "3.0.0"})),
            Dialect::OpenApi3
        );
        assert_eq!(
            Dialect::detect(&json!({"swagger": "2.0"})),
            Dialect::Swagger2
        );
        assert_eq!(Dialect::detect(&json!(null)), Dialect::Swagger2);
    }
}
