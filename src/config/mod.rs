//! Configuration loading
//!
//! Calculator settings come from an optional config file and CLI flags, with
//! precedence CLI > File > Defaults.

pub mod loader;

pub use loader::load_config;

use crate::segment::count::{CONCAT_SEGMENT_CAPACITY, SINGLE_SEGMENT_CAPACITY};
use crate::segment::{PolicyError, SegmentPolicy, SmsCalculator, TagWidths};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub single_segment_capacity: usize,
    pub concat_segment_capacity: usize,
    pub line_break_width: usize,
    pub url_tag_width: usize,
    pub generic_tag_width: usize,
    /// Refuse templates that need more segments than this.
    pub max_segments: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let widths = TagWidths::default();
        Self {
            single_segment_capacity: SINGLE_SEGMENT_CAPACITY,
            concat_segment_capacity: CONCAT_SEGMENT_CAPACITY,
            line_break_width: widths.line_break,
            url_tag_width: widths.url_tag,
            generic_tag_width: widths.generic_tag,
            max_segments: None,
        }
    }
}

impl Config {
    pub fn tag_widths(&self) -> TagWidths {
        TagWidths {
            line_break: self.line_break_width,
            url_tag: self.url_tag_width,
            generic_tag: self.generic_tag_width,
        }
    }

    pub fn segment_policy(&self) -> Result<SegmentPolicy, PolicyError> {
        SegmentPolicy::new(self.single_segment_capacity, self.concat_segment_capacity)
    }

    pub fn to_calculator(&self) -> Result<SmsCalculator, PolicyError> {
        Ok(SmsCalculator::with_widths(self.tag_widths()).policy(self.segment_policy()?))
    }
}
