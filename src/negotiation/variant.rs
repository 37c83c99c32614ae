//! Representation variants and selection.

use std::collections::HashMap;

use log::debug;

use crate::http::MediaType;
use crate::negotiation::accept::{parse_accept_header, AcceptEntry};

/// One negotiable response representation: a producible media type offered
/// by a candidate route. Variants are built per request from the candidate
/// set and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    media_type: MediaType,
}

impl Variant {
    /// Create a variant for a producible media type.
    pub fn new(media_type: MediaType) -> Self {
        Self { media_type }
    }

    /// The media type of the variant.
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }
}

/// Select the representation variant that best matches the request.
/// More explicit variants are chosen ahead of less explicit ones.
///
/// Steps, following RFC 2616 section 14.1 in simplified form:
///
/// 1. If no Accept header is present, assume the client accepts anything
///    (`*/*` with quality 1.0).
/// 2. Resolve each variant against the parsed entries in specificity
///    order: exact `type/subtype`, then `type/*`, then `*/*`. A variant
///    matching none of the three is excluded, as is a variant whose
///    resolved quality is exactly 0 (an explicit refusal).
/// 3. Score each surviving variant by its quality, with a one-point bonus
///    on the thousandfold scale for structured subtypes (a `+` in the
///    subtype); the bonus breaks ties but can never beat a quality
///    difference.
/// 4. The first variant in input order with the maximum score wins, which
///    keeps selection deterministic for stable input orderings.
///
/// # Arguments
///
/// * `accept` - The raw Accept header value, if the request carried one
/// * `variants` - The candidate variants, in candidate order
///
/// # Returns
///
/// The index of the selected variant, or `None` when no variant is
/// acceptable - the caller should treat that as a 406-class failure.
pub fn select_variant(accept: Option<&str>, variants: &[Variant]) -> Option<usize> {
    let entries = match accept {
        Some(header) => parse_accept_header(header),
        None => vec![AcceptEntry {
            type_: MediaType::MEDIA_TYPE_WILDCARD.to_string(),
            subtype: MediaType::MEDIA_TYPE_WILDCARD.to_string(),
            quality: 1.0,
        }],
    };

    // media range -> quality; a repeated range keeps the last quality
    let mut acceptable: HashMap<String, f32> = HashMap::new();
    for entry in entries {
        acceptable.insert(
            format!("{type_}/{subtype}", type_ = entry.type_, subtype = entry.subtype),
            entry.quality,
        );
    }

    let mut best: Option<(usize, i32)> = None;
    for (index, variant) in variants.iter().enumerate() {
        let media_type = variant.media_type();
        let exact = media_type.to_string();
        let type_range = format!("{type_}/*", type_ = media_type.type_());

        let quality = [exact.as_str(), type_range.as_str(), MediaType::WILDCARD]
            .iter()
            .find_map(|range| acceptable.get(*range).copied());
        let Some(quality) = quality else {
            continue;
        };
        if quality == 0.0 {
            // an explicit client refusal, never selectable
            continue;
        }

        let mut score = (quality * 1000.0).round() as i32;
        // Specificity gets a bonus.
        if media_type.subtype().contains('+') {
            score += 1;
        }

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    if best.is_none() {
        debug!("no acceptable variant among {count} candidate(s)", count = variants.len());
    }

    best.map(|(index, _)| index)
}
