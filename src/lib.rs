//! sms-segments: billed length and carrier segment counts for SMS templates
//!
//! Measures message templates the way the send pipeline bills them, with
//! line breaks and placeholder tags widened to their on-the-wire size.

pub mod config;
pub mod segment;

pub use segment::{
    calculate_length, calculate_message_count, message_stats, normalize, MessageStats,
    SegmentPolicy, SmsCalculator, TagWidths,
};
