//! Media type abstraction.

use std::fmt;
use std::str::FromStr;

use crate::http::error::Error;

/// An immutable `type/subtype` media type pair.
///
/// Media type parameters (such as `;charset=utf-8`) are stripped during
/// parsing; routing and negotiation compare bare type pairs only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    type_: String,
    subtype: String,
}

impl MediaType {
    /// "application/x-www-form-urlencoded"
    pub const APPLICATION_FORM_URLENCODED: &'static str = "application/x-www-form-urlencoded";

    /// "application/json"
    pub const APPLICATION_JSON: &'static str = "application/json";

    /// "application/octet-stream"
    pub const APPLICATION_OCTET_STREAM: &'static str = "application/octet-stream";

    /// "application/xml"
    pub const APPLICATION_XML: &'static str = "application/xml";

    /// "text/html"
    pub const TEXT_HTML: &'static str = "text/html";

    /// "text/plain"
    pub const TEXT_PLAIN: &'static str = "text/plain";

    /// "*"
    pub const MEDIA_TYPE_WILDCARD: &'static str = "*";

    /// "*/*"
    pub const WILDCARD: &'static str = "*/*";

    /// Create a new media type from its two components.
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        let type_ = type_.into();
        let subtype = subtype.into();
        Self {
            type_: if type_.is_empty() {
                Self::MEDIA_TYPE_WILDCARD.to_string()
            } else {
                type_
            },
            subtype: if subtype.is_empty() {
                Self::MEDIA_TYPE_WILDCARD.to_string()
            } else {
                subtype
            },
        }
    }

    /// The `*/*` media type.
    pub fn wildcard() -> Self {
        Self::new(Self::MEDIA_TYPE_WILDCARD, Self::MEDIA_TYPE_WILDCARD)
    }

    /// Get the primary type. For `application/json` this is "application".
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Get the subtype. For `application/json` this is "json".
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Check if the primary type is the wildcard.
    pub fn is_wildcard_type(&self) -> bool {
        self.type_ == Self::MEDIA_TYPE_WILDCARD
    }

    /// Check if the subtype is the wildcard.
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == Self::MEDIA_TYPE_WILDCARD
    }

    /// Check if another media type falls within the range described by this
    /// one. Wildcard components match anything, so `*/*` is compatible with
    /// every type and `text/*` with every `text` subtype.
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        (self.is_wildcard_type() || self.type_ == other.type_)
            && (self.is_wildcard_subtype()
                || other.is_wildcard_subtype()
                || self.subtype == other.subtype)
    }
}

// Parses strings such as "application/json" or "text/html; charset=utf-8".
// Anything after the first ';' is a parameter and is discarded.
impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = match s.find(';') {
            Some(offset) => &s[..offset],
            None => s,
        };
        let essence = essence.trim();

        match essence.split_once('/') {
            Some((type_, subtype)) if !type_.is_empty() && !subtype.is_empty() => {
                Ok(Self::new(type_, subtype))
            }
            _ => Err(Error::InvalidMediaType(s.to_string())),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{type_}/{subtype}", type_ = self.type_, subtype = self.subtype)
    }
}
