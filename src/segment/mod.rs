//! SMS billed length and segment calculation
//!
//! A message template is billed with every line break counted as 2 characters,
//! every `{URL}`/`{URL<n>}` tag as a 20-character shortened link and every other
//! `{tag}` as a 19-character survey link. The billed length then splits into
//! carrier segments: 70 characters for a standalone SMS, 66 per concatenated part.

pub mod count;
pub mod length;
pub mod rules;

pub use count::{PolicyError, SegmentPolicy};
pub use rules::{BillingRule, TagKind, TagWidths};

use once_cell::sync::Lazy;
use serde::Serialize;
use std::borrow::Cow;

/// Full breakdown of a template, as shown by a live counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MessageStats {
    pub length: usize,
    pub segments: usize,
    pub remaining: usize,
    pub line_breaks: usize,
    pub url_tags: usize,
    pub generic_tags: usize,
}

/// Billing rules paired with a segmentation policy.
#[derive(Debug, Clone)]
pub struct SmsCalculator {
    rules: Vec<BillingRule>,
    policy: SegmentPolicy,
}

impl SmsCalculator {
    /// `rules` are applied in the given order.
    pub fn new(rules: Vec<BillingRule>, policy: SegmentPolicy) -> Self {
        Self { rules, policy }
    }

    pub fn with_widths(widths: TagWidths) -> Self {
        Self::new(rules::build_rules(widths), SegmentPolicy::STANDARD)
    }

    pub fn policy(mut self, policy: SegmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn segment_policy(&self) -> &SegmentPolicy {
        &self.policy
    }

    pub fn rules(&self) -> &[BillingRule] {
        &self.rules
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        length::normalize_with(&self.rules, text)
    }

    pub fn length(&self, text: &str) -> usize {
        length::billed_length(&self.rules, text)
    }

    pub fn segments(&self, text: &str) -> usize {
        self.policy.segments_for(self.length(text))
    }

    pub fn stats(&self, text: &str) -> MessageStats {
        let mut stats = MessageStats::default();
        let normalized = length::run_passes(&self.rules, text, |kind, n| match kind {
            TagKind::LineBreak => stats.line_breaks += n,
            TagKind::UrlTag => stats.url_tags += n,
            TagKind::GenericTag => stats.generic_tags += n,
        });
        stats.length = length::utf16_len(&normalized);
        stats.segments = self.policy.segments_for(stats.length);
        stats.remaining = self.policy.remaining_for(stats.length);
        stats
    }
}

impl Default for SmsCalculator {
    fn default() -> Self {
        Self::new(rules::DEFAULT_RULES.clone(), SegmentPolicy::STANDARD)
    }
}

static DEFAULT_CALCULATOR: Lazy<SmsCalculator> = Lazy::new(SmsCalculator::default);

/// Billed length of a message template. `None` counts as empty.
///
/// ```
/// use sms_segments::calculate_length;
///
/// assert_eq!(calculate_length("Hi\n{URL1}"), 24);
/// assert_eq!(calculate_length(None::<&str>), 0);
/// ```
pub fn calculate_length<'a>(text: impl Into<Option<&'a str>>) -> usize {
    let text: Option<&str> = text.into();
    text.map_or(0, |t| DEFAULT_CALCULATOR.length(t))
}

/// Number of carrier segments a message template occupies. `None` counts as empty.
pub fn calculate_message_count<'a>(text: impl Into<Option<&'a str>>) -> usize {
    let text: Option<&str> = text.into();
    text.map_or(0, |t| DEFAULT_CALCULATOR.segments(t))
}

pub fn normalize(text: &str) -> Cow<'_, str> {
    DEFAULT_CALCULATOR.normalize(text)
}

pub fn message_stats<'a>(text: impl Into<Option<&'a str>>) -> MessageStats {
    let text: Option<&str> = text.into();
    DEFAULT_CALCULATOR.stats(text.unwrap_or(""))
}
