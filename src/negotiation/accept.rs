//! Accept header parsing.

/// One entry of an Accept header: a media range and its quality factor.
///
/// Entries are parsed fresh for each request; the header may differ from
/// request to request so nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEntry {
    /// The primary type, possibly the wildcard `*`.
    pub type_: String,
    /// The subtype, possibly the wildcard `*`.
    pub subtype: String,
    /// The quality factor in `[0, 1]`; 1.0 when unspecified.
    pub quality: f32,
}

/// Parse an Accept header into its entries.
///
/// The header is split on commas into media ranges, each range on `;` into
/// the `type/subtype` pair and its parameters. An absent or malformed `q`
/// parameter defaults to 1.0. Ranges that are not a `type/subtype` pair are
/// skipped.
///
/// # Arguments
///
/// * `header` - The raw Accept header value
///
/// # Returns
///
/// The parsed entries, in header order
pub fn parse_accept_header(header: &str) -> Vec<AcceptEntry> {
    let mut entries = Vec::new();

    for range in header.split(',') {
        let mut parts = range.trim().split(';');
        let media_range = match parts.next() {
            Some(media_range) => media_range.trim(),
            None => continue,
        };
        let Some((type_, subtype)) = media_range.split_once('/') else {
            continue;
        };
        if type_.is_empty() || subtype.is_empty() {
            continue;
        }

        let mut quality = 1.0_f32;
        for param in parts {
            if let Some((key, value)) = param.split_once('=') {
                if key.trim() == "q" {
                    if let Ok(parsed) = value.trim().parse::<f32>() {
                        quality = parsed.clamp(0.0, 1.0);
                    }
                }
            }
        }

        entries.push(AcceptEntry {
            type_: type_.trim().to_string(),
            subtype: subtype.trim().to_string(),
            quality,
        });
    }

    entries
}
