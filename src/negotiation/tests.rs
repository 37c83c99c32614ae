//! Tests for content negotiation.

#[cfg(test)]
mod tests {
    use crate::http::MediaType;
    use crate::negotiation::{parse_accept_header, select_variant, Variant};

    fn variant(type_: &str, subtype: &str) -> Variant {
        Variant::new(MediaType::new(type_, subtype))
    }

    #[test]
    fn test_parse_single_entry() {
        let entries = parse_accept_header("text/html");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].type_, "text");
        assert_eq!(entries[0].subtype, "html");
        assert_eq!(entries[0].quality, 1.0);
    }

    #[test]
    fn test_parse_multiple_entries_with_quality() {
        let entries = parse_accept_header("text/html, text/plain;q=0.8, */*;q=0.1");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].quality, 1.0);
        assert_eq!(entries[1].subtype, "plain");
        assert_eq!(entries[1].quality, 0.8);
        assert_eq!(entries[2].type_, "*");
        assert_eq!(entries[2].quality, 0.1);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let entries = parse_accept_header(" text/html ; q = 0.5 ,  application/json ");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].quality, 0.5);
        assert_eq!(entries[1].type_, "application");
        assert_eq!(entries[1].subtype, "json");
    }

    #[test]
    fn test_parse_malformed_quality_defaults_to_one() {
        let entries = parse_accept_header("text/html;q=banana");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quality, 1.0);
    }

    #[test]
    fn test_parse_skips_malformed_ranges() {
        let entries = parse_accept_header("garbage, text/plain");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subtype, "plain");
    }

    #[test]
    fn test_parse_clamps_out_of_range_quality() {
        let entries = parse_accept_header("text/html;q=7");
        assert_eq!(entries[0].quality, 1.0);
    }

    #[test]
    fn test_higher_quality_wins() {
        let variants = vec![variant("application", "json"), variant("text", "plain")];
        let selected = select_variant(Some("text/plain, application/json;q=0.5"), &variants);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_structured_subtype_bonus_breaks_tie() {
        let variants = vec![
            variant("application", "xml"),
            variant("application", "html+xml"),
        ];
        let selected = select_variant(Some("application/html+xml, application/xml"), &variants);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_quality_dominates_structured_subtype_bonus() {
        let variants = vec![
            variant("application", "xml"),
            variant("application", "html+xml"),
        ];
        let selected = select_variant(
            Some("application/html+xml;q=0.4, application/xml;q=0.5"),
            &variants,
        );
        assert_eq!(selected, Some(0));
    }

    #[test]
    fn test_zero_quality_excludes_sole_candidate() {
        let variants = vec![variant("text", "html")];
        let selected = select_variant(Some("text/html;q=0"), &variants);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_zero_quality_wildcard_refuses_everything() {
        let variants = vec![variant("text", "html"), variant("application", "json")];
        let selected = select_variant(Some("*/*;q=0"), &variants);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_no_accept_header_selects_first_candidate() {
        let variants = vec![
            variant("application", "json"),
            variant("application", "xml"),
        ];
        let selected = select_variant(None, &variants);
        assert_eq!(selected, Some(0));
    }

    #[test]
    fn test_type_wildcard_resolution() {
        let variants = vec![variant("application", "json"), variant("text", "plain")];
        let selected = select_variant(Some("text/*"), &variants);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_specificity_resolution_order() {
        // The exact range wins over the type wildcard even at lower quality:
        // resolution stops at the most specific applicable range.
        let variants = vec![variant("text", "plain")];
        let selected = select_variant(Some("text/*;q=0.9, text/plain;q=0"), &variants);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_unlisted_type_is_excluded() {
        let variants = vec![variant("image", "png")];
        let selected = select_variant(Some("text/html, application/json"), &variants);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_tie_selects_first_in_input_order() {
        let variants = vec![
            variant("application", "json"),
            variant("application", "xml"),
        ];
        let selected = select_variant(Some("*/*"), &variants);
        assert_eq!(selected, Some(0));
    }

    #[test]
    fn test_empty_variant_list() {
        let selected = select_variant(Some("*/*"), &[]);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let variants = vec![
            variant("application", "xml"),
            variant("application", "html+xml"),
            variant("text", "plain"),
        ];
        let header = Some("application/*;q=0.7, text/plain;q=0.6");
        let first = select_variant(header, &variants);
        for _ in 0..10 {
            assert_eq!(select_variant(header, &variants), first);
        }
    }
}
