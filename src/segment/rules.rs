//! Billing rules
//!
//! ORDER MATTERS: the URL tag rule must come BEFORE the generic tag rule. `{URL1}`
//! also matches the generic pattern, and must be billed at the URL width rather
//! than the survey-link width.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character substituted for billed tokens during normalization.
///
/// Not a word character and not a brace, so a placeholder can never complete a
/// tag pattern in a later pass.
pub const PLACEHOLDER_CHAR: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    LineBreak,
    UrlTag,
    GenericTag,
}

/// Billed width of each token kind, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagWidths {
    pub line_break: usize,
    pub url_tag: usize,
    pub generic_tag: usize,
}

impl Default for TagWidths {
    fn default() -> Self {
        Self {
            line_break: 2,
            // Shortened HTTPS link. An HTTP link would be 19, but URL tags always
            // bill 20 regardless of scheme; possibly a latent bug, kept as observed.
            url_tag: 20,
            // Shortened HTTP survey link.
            generic_tag: 19,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BillingRule {
    pub kind: TagKind,
    pub name: &'static str,
    pub pattern: Regex,
    pub width: usize,
}

impl BillingRule {
    /// Fixed-width stand-in for one match of this rule.
    pub fn placeholder(&self) -> String {
        std::iter::repeat(PLACEHOLDER_CHAR).take(self.width).collect()
    }
}

static LINE_BREAK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n").expect("valid regex"));

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static URL_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{URL[0-9]*\}").expect("valid regex"));

static GENERIC_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[A-Za-z0-9_]+\}").expect("valid regex"));

/// Build the ordered rule list with the given widths.
pub fn build_rules(widths: TagWidths) -> Vec<BillingRule> {
    vec![
        BillingRule {
            kind: TagKind::LineBreak,
            name: "line_break",
            pattern: LINE_BREAK_PATTERN.clone(),
            width: widths.line_break,
        },
        BillingRule {
            kind: TagKind::UrlTag,
            name: "url_tag",
            pattern: URL_TAG_PATTERN.clone(),
            width: widths.url_tag,
        },
        BillingRule {
            kind: TagKind::GenericTag,
            name: "generic_tag",
            pattern: GENERIC_TAG_PATTERN.clone(),
            width: widths.generic_tag,
        },
    ]
}

pub static DEFAULT_RULES: Lazy<Vec<BillingRule>> = Lazy::new(|| build_rules(TagWidths::default()));
