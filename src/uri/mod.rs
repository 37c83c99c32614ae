//! Request URI information.

use std::collections::HashMap;

use crate::routing::PathParams;

/// A read-only view of the request URI, handed to handlers as part of their
/// context: the configured base path, the matched path, and the parameter
/// values extracted from both the path and the query string.
#[derive(Debug, Clone, Default)]
pub struct UriInfo {
    base_path: String,
    path: String,
    path_params: PathParams,
    query_params: HashMap<String, String>,
}

impl UriInfo {
    /// Assemble URI information for a matched route.
    pub fn new(
        base_path: impl Into<String>,
        path: impl Into<String>,
        path_params: PathParams,
        query_params: HashMap<String, String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            path: path.into(),
            path_params,
            query_params,
        }
    }

    /// The application base path ("" when unset).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The request path relative to the base path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The full request path including the base path.
    pub fn absolute_path(&self) -> String {
        format!("{base}{path}", base = self.base_path, path = self.path)
    }

    /// Parameters extracted from the matched path template.
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }

    /// Parameters parsed from the query string.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }
}
