//! Handler argument resolution types.

use crate::dispatch::error::Error;
use crate::dispatch::handler::Renderable;
use crate::http::MediaType;

/// The request source a handler parameter draws its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    /// A named variable extracted from the matched path template.
    Path,
    /// A query string parameter.
    Query,
    /// A request header (looked up case-insensitively).
    Header,
    /// A field of the form-encoded request body.
    Form,
    /// The whole request body, decoded on demand via
    /// [`Renderable::unrender`].
    Body,
}

/// Binding of one handler parameter position to a `(source, name)` pair.
///
/// The binding table is built at configuration time; the dispatcher resolves
/// it with plain lookups, with no runtime inspection of the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamBinding {
    /// Where the value comes from.
    pub source: ParamSource,
    /// The name looked up in that source. Ignored for [`ParamSource::Body`].
    pub name: String,
}

impl ParamBinding {
    /// Create a new binding.
    pub fn new(source: ParamSource, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
        }
    }
}

/// One resolved handler argument.
#[derive(Debug, Clone)]
pub enum Argument {
    /// A textual value from a path, query, header or form source.
    Value(String),
    /// The raw request body along with its declared media type, for
    /// body-object bindings.
    Body {
        content: Vec<u8>,
        media_type: Option<MediaType>,
    },
}

impl Argument {
    /// The textual value, if this argument came from a named source.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::Value(value) => Some(value),
            Argument::Body { .. } => None,
        }
    }

    /// Decode a body argument into an instance via [`Renderable::unrender`],
    /// using the request's declared media type (or `*/*` when the request
    /// did not declare one).
    pub fn decode<T: Renderable>(&self) -> Result<T, Error> {
        match self {
            Argument::Body {
                content,
                media_type,
            } => {
                let media_type = media_type.clone().unwrap_or_else(MediaType::wildcard);
                T::unrender(content, &media_type)
            }
            Argument::Value(_) => Err(Error::MalformedRepresentation(
                "argument is not a body binding".to_string(),
            )),
        }
    }
}

/// Resolved handler arguments, indexed by parameter position.
///
/// Positions whose binding found no value stay `None`; the handler decides
/// what an absent argument means.
#[derive(Debug, Clone, Default)]
pub struct CallArguments {
    args: Vec<Option<Argument>>,
}

impl CallArguments {
    /// Get the argument at a parameter position, if one was resolved.
    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.args.get(index).and_then(Option::as_ref)
    }

    /// Get the textual value at a parameter position.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Argument::as_str)
    }

    /// Decode the body argument at a parameter position.
    pub fn decode<T: Renderable>(&self, index: usize) -> Result<T, Error> {
        self.get(index)
            .ok_or(Error::MissingArgument(index))?
            .decode()
    }

    /// The number of parameter positions in the binding table.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check whether the binding table was empty.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub(crate) fn push(&mut self, argument: Option<Argument>) {
        self.args.push(argument);
    }
}
