//! Billed length normalization

use super::rules::{BillingRule, TagKind};
use regex::Captures;
use std::borrow::Cow;

/// Apply `rules` to `text` in order, replacing each match with its fixed-width
/// placeholder. `on_pass` receives the match count of every rule.
pub(crate) fn run_passes<'a>(
    rules: &[BillingRule],
    text: &'a str,
    mut on_pass: impl FnMut(TagKind, usize),
) -> Cow<'a, str> {
    let mut out = Cow::Borrowed(text);
    for rule in rules {
        let placeholder = rule.placeholder();
        let mut matches = 0usize;
        let replaced = match rule.pattern.replace_all(&out, |_: &Captures<'_>| {
            matches += 1;
            placeholder.as_str()
        }) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = replaced {
            out = Cow::Owned(s);
        }
        on_pass(rule.kind, matches);
    }
    out
}

/// The message as billed: line breaks and tags swapped for placeholders.
pub fn normalize_with<'a>(rules: &[BillingRule], text: &'a str) -> Cow<'a, str> {
    run_passes(rules, text, |_, _| {})
}

/// Billed length in UTF-16 code units.
pub fn billed_length(rules: &[BillingRule], text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    utf16_len(&normalize_with(rules, text))
}

pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::rules::DEFAULT_RULES;

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(billed_length(&DEFAULT_RULES, ""), 0);
    }

    #[test]
    fn line_break_bills_two() {
        assert_eq!(billed_length(&DEFAULT_RULES, "\n"), 2);
        assert_eq!(billed_length(&DEFAULT_RULES, "a\nb"), 4);
        assert_eq!(billed_length(&DEFAULT_RULES, "\n\n\n"), 6);
    }

    #[test]
    fn carriage_return_counts_literally() {
        assert_eq!(billed_length(&DEFAULT_RULES, "a\r\nb"), 5);
    }

    #[test]
    fn url_tag_wins_over_generic_pattern() {
        let out = normalize_with(&DEFAULT_RULES, "{URL1}");
        assert_eq!(out.chars().count(), 20);
        assert_eq!(billed_length(&DEFAULT_RULES, "{URL}"), 20);
    }

    #[test]
    fn generic_tag_bills_nineteen() {
        assert_eq!(billed_length(&DEFAULT_RULES, "{survey}"), 19);
        assert_eq!(billed_length(&DEFAULT_RULES, "{URLx}"), 19);
    }

    #[test]
    fn malformed_tags_count_literally() {
        assert_eq!(billed_length(&DEFAULT_RULES, "{URL1"), 5);
        assert_eq!(billed_length(&DEFAULT_RULES, "URL1}"), 5);
        assert_eq!(billed_length(&DEFAULT_RULES, "{}"), 2);
        assert_eq!(billed_length(&DEFAULT_RULES, "{a b}"), 5);
    }

    #[test]
    fn nested_braces_match_inner_tag_only() {
        // "{" + 20 + "}"; the placeholder does not form a new generic tag.
        assert_eq!(billed_length(&DEFAULT_RULES, "{{URL1}}"), 22);
        assert_eq!(billed_length(&DEFAULT_RULES, "{{name}}"), 21);
    }

    #[test]
    fn line_break_inside_braces_breaks_the_tag() {
        // "{a" + 2 + "b}" stays literal apart from the line break
        assert_eq!(billed_length(&DEFAULT_RULES, "{a\nb}"), 6);
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        assert_eq!(billed_length(&DEFAULT_RULES, "😀"), 2);
        assert_eq!(billed_length(&DEFAULT_RULES, "é"), 1);
    }

    #[test]
    fn unmatched_text_is_borrowed() {
        assert!(matches!(normalize_with(&DEFAULT_RULES, "plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn run_passes_reports_counts_in_order() {
        let mut seen = Vec::new();
        run_passes(&DEFAULT_RULES, "{URL1}\n{URL}{name}\n", |kind, n| seen.push((kind, n)));
        assert_eq!(
            seen,
            vec![(TagKind::LineBreak, 2), (TagKind::UrlTag, 2), (TagKind::GenericTag, 1)]
        );
    }
}
