//! Document paths for diagnostics and traversal
//!
//! A [`Path`] is the ordered sequence of keys taken to reach a node in the
//! parsed document tree. Array indices are rendered as their decimal string
//! form, so the path to any node is exactly the path to its parent plus the
//! one key used to reach it. Paths are attached to every diagnostic and must
//! reproduce the document's own addressing scheme.
//!
//! Copyright (c) 2026 Oaslint Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::fmt;

/// An immutable location in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// The root of the document (no segments)
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from an explicit segment list
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a child path with one more key segment
    pub fn child<S: Into<String>>(&self, segment: S) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Create a child path for an array index
    pub fn child_index(&self, index: usize) -> Self {
        self.child(index.to_string())
    }

    /// The ordered key segments of this path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, if any
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}
