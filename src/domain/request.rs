//! Typed view of an incoming redirect request.
//!
//! Mirrors the invocation shape `{ pathParameters?: { shortPath?: string } }`.
//! The HTTP layer builds it from the matched route; it also deserializes
//! directly from that JSON shape.

use serde::Deserialize;

/// Path parameters captured for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathParameters {
    #[serde(rename = "shortPath", default)]
    pub short_path: Option<String>,
}

/// A redirect request. `path_parameters` is `None` when the route captured nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RedirectRequest {
    #[serde(rename = "pathParameters", default)]
    pub path_parameters: Option<PathParameters>,
}

impl RedirectRequest {
    /// Request without a path-parameter container.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Request carrying a `shortPath` entry.
    pub fn with_short_path(short_path: impl Into<String>) -> Self {
        Self {
            path_parameters: Some(PathParameters {
                short_path: Some(short_path.into()),
            }),
        }
    }

    /// Extracts the short path, or `None` when the default page applies.
    ///
    /// Checked in order: missing container, missing entry, empty entry.
    pub fn short_path(&self) -> Option<&str> {
        let params = self.path_parameters.as_ref()?;
        let short_path = params.short_path.as_deref()?;

        if short_path.is_empty() {
            return None;
        }

        Some(short_path)
    }
}
