//! Path template compilation and matching.

use regex::Regex;

use crate::routing::error::RouteError;

/// Path parameters extracted by a successful template match.
///
/// Entries keep the order in which their variables first appear in the
/// template, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    params: Vec<(String, String)>,
}

impl PathParams {
    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of extracted parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check whether the match extracted any parameters at all.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn push(&mut self, name: String, value: String) {
        self.params.push((name, value));
    }
}

/// One compiled segment of a path template.
#[derive(Debug, Clone)]
enum Segment {
    /// A plain segment with no variables; matched by string equality.
    Literal(String),
    /// A segment containing one or more `{name}` / `{name:regex}` variables,
    /// compiled into a single anchored regular expression.
    Pattern { regex: Regex, names: Vec<String> },
}

/// A compiled path template.
///
/// Templates are segment-separated by `/`; a segment is either a literal or
/// embeds variable tokens of the form `{name}` or `{name:regex}`. Templates
/// are compiled once at configuration time and matched per request.
///
/// Matching requires identical segment counts on both sides; there are no
/// trailing wildcards or variable-length matches.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compile a template path.
    ///
    /// # Arguments
    ///
    /// * `template` - The template path, e.g. `/users/{id:\d+}/orders`
    ///
    /// # Returns
    ///
    /// The compiled template, or [`RouteError::InvalidConstraint`] when a
    /// variable carries a regular expression that fails to compile.
    pub fn compile(template: &str) -> Result<Self, RouteError> {
        let segments = split_segments(template)
            .into_iter()
            .map(compile_segment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// The template string this instance was compiled from.
    pub fn path(&self) -> &str {
        &self.raw
    }

    /// Match a concrete request path against this template.
    ///
    /// Returns the extracted path parameters on success, `None` on the first
    /// segment that fails to match. A match against a template without
    /// variables yields an empty parameter collection.
    pub fn matches(&self, concrete: &str) -> Option<PathParams> {
        let concrete_segments = split_segments(concrete);

        // segment counts must match
        if concrete_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (segment, concrete_segment) in self.segments.iter().zip(concrete_segments) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != concrete_segment {
                        return None;
                    }
                }
                Segment::Pattern { regex, names } => {
                    let captures = regex.captures(concrete_segment)?;

                    // A variable must capture exactly one value; a constraint
                    // that introduces extra capture groups breaks the
                    // name-to-value pairing and the segment cannot match.
                    let values: Vec<&str> = (1..captures.len())
                        .filter_map(|i| captures.get(i))
                        .map(|m| m.as_str())
                        .collect();
                    if values.len() != names.len() {
                        return None;
                    }

                    for (name, value) in names.iter().zip(values) {
                        params.push(name.clone(), value.to_string());
                    }
                }
            }
        }

        Some(params)
    }
}

/// Split a path into segments, trimming leading and trailing slashes.
/// The root path yields an empty segment list.
pub(crate) fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Compile a single template segment.
///
/// Each `{name}` token becomes a permissive `([^/]+)` capture group; each
/// `{name:regex}` token becomes `(regex)` with the constraint trimmed of
/// surrounding whitespace. Literal text between tokens is regex-escaped and
/// the whole expression is anchored to the full segment.
fn compile_segment(segment: &str) -> Result<Segment, RouteError> {
    let mut names = Vec::new();
    let mut pattern = String::from("^");
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        let (literal, token_start) = rest.split_at(open);
        pattern.push_str(&regex::escape(literal));

        let Some(close) = find_closing_brace(token_start) else {
            // No closing brace: the remainder is literal text.
            pattern.push_str(&regex::escape(token_start));
            rest = "";
            break;
        };

        let token = &token_start[1..close];
        match token.split_once(':') {
            Some((name, constraint)) => {
                names.push(name.to_string());
                pattern.push('(');
                pattern.push_str(constraint.trim());
                pattern.push(')');
            }
            None => {
                names.push(token.to_string());
                pattern.push_str("([^/]+)");
            }
        }

        rest = &token_start[close + 1..];
    }
    pattern.push_str(&regex::escape(rest));
    pattern.push('$');

    if names.is_empty() {
        return Ok(Segment::Literal(segment.to_string()));
    }

    let regex = Regex::new(&pattern).map_err(|source| RouteError::InvalidConstraint {
        segment: segment.to_string(),
        source,
    })?;

    Ok(Segment::Pattern { regex, names })
}

/// Find the index of the brace closing the token that starts at `input[0]`.
/// Braces inside the constraint (e.g. repetition counts like `\d{4}`) are
/// tracked by depth.
fn find_closing_brace(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
