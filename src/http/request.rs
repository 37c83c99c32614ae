//! In-memory HTTP request representation.

use std::collections::HashMap;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::http::error::Error;
use crate::http::media_type::MediaType;
use crate::http::method::Method;

/// Represents an incoming HTTP request.
///
/// Instances are constructed by the embedding host from whatever transport it
/// uses; the routing core only ever reads them. The request path is stored
/// with the query string already split off into [`Request::query_params`].
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, without host or query string
    pub path: String,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    /// Query parameters parsed from the request URI
    pub query_params: HashMap<String, String>,
}

impl Request {
    /// Create a new HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The request path; a query string, if present, is parsed
    ///   into the query parameter map and removed from the stored path
    /// * `headers` - The HTTP headers
    ///
    /// # Returns
    ///
    /// A new HTTP request with an empty body
    pub fn new(method: Method, path: impl Into<String>, headers: HashMap<String, String>) -> Self {
        let path = path.into();

        // Split off and parse the query string, if any
        let (path, query_params) = match path.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_urlencoded(query)),
            None => (path, HashMap::new()),
        };

        Self {
            method,
            path,
            headers,
            body: Vec::new(),
            query_params,
        }
    }

    /// Create a new HTTP request with a body.
    pub fn with_body(
        method: Method,
        path: impl Into<String>,
        headers: HashMap<String, String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        let mut request = Self::new(method, path, headers);
        request.body = body.into();
        request
    }

    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn get_header(&self, name: &str) -> Option<&String> {
        // Headers are case-insensitive, so we need to do a case-insensitive lookup
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// The media type of the request body, with any parameters (such as
    /// `;charset=utf-8`) stripped. `None` when the request declares no
    /// Content-Type or declares one that is not a valid `type/subtype` pair.
    pub fn content_type(&self) -> Option<MediaType> {
        self.get_header("Content-Type")
            .and_then(|value| MediaType::from_str(value).ok())
    }

    /// The raw Accept header value, if the client sent one.
    pub fn accept(&self) -> Option<&String> {
        self.get_header("Accept")
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }

    /// Check if a query parameter exists.
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params.contains_key(name)
    }

    /// Parse the request body as `application/x-www-form-urlencoded` pairs.
    ///
    /// Note: the body is decoded as form pairs regardless of the declared
    /// Content-Type. Callers that care must check [`Request::content_type`]
    /// themselves.
    pub fn form_params(&self) -> HashMap<String, String> {
        let body = String::from_utf8_lossy(&self.body);
        parse_urlencoded(&body)
    }

    /// Parse the request body as JSON.
    ///
    /// # Returns
    ///
    /// The parsed JSON value, or an error if the body is not valid JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        // Check if the Content-Type header is application/json
        if !self.is_json() {
            return Err(Error::MissingHeader(
                "Content-Type: application/json".to_string(),
            ));
        }

        // Parse the body as JSON
        let json = serde_json::from_slice(&self.body)?;
        Ok(json)
    }

    /// Check if the request has a JSON body.
    pub fn is_json(&self) -> bool {
        if let Some(content_type) = self.get_header("Content-Type") {
            content_type.starts_with(MediaType::APPLICATION_JSON)
        } else {
            false
        }
    }

    /// Convenience method for determining if the request is a GET request.
    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }

    /// Convenience method for determining if the request is a POST request.
    pub fn is_post(&self) -> bool {
        self.method == Method::POST
    }

    /// Convenience method for determining if the request is a PUT request.
    pub fn is_put(&self) -> bool {
        self.method == Method::PUT
    }

    /// Convenience method for determining if the request is a DELETE request.
    pub fn is_delete(&self) -> bool {
        self.method == Method::DELETE
    }
}

/// Parse a `key=value&key=value` string into a map.
///
/// Keys without a value are kept with an empty string value. No
/// percent-decoding is applied; values are taken verbatim.
pub(crate) fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    input
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            if let Some((k, v)) = pair.split_once('=') {
                (k.to_string(), v.to_string())
            } else {
                (pair.to_string(), String::new())
            }
        })
        .collect()
}
