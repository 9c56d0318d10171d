//! Carrier segmentation policy

use thiserror::Error;

/// Payload of a standalone SMS.
pub const SINGLE_SEGMENT_CAPACITY: usize = 70;
/// Payload of each part of a concatenated SMS (the concatenation header eats the rest).
pub const CONCAT_SEGMENT_CAPACITY: usize = 66;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("{field} must be greater than zero")]
    ZeroCapacity { field: &'static str },
}

/// How a billed length splits into carrier segments.
///
/// Capacities are always non-zero, so every method is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPolicy {
    single_capacity: usize,
    concat_capacity: usize,
}

impl SegmentPolicy {
    pub const STANDARD: SegmentPolicy = SegmentPolicy {
        single_capacity: SINGLE_SEGMENT_CAPACITY,
        concat_capacity: CONCAT_SEGMENT_CAPACITY,
    };

    pub fn new(single_capacity: usize, concat_capacity: usize) -> Result<Self, PolicyError> {
        if single_capacity == 0 {
            return Err(PolicyError::ZeroCapacity { field: "single_segment_capacity" });
        }
        if concat_capacity == 0 {
            return Err(PolicyError::ZeroCapacity { field: "concat_segment_capacity" });
        }
        Ok(Self { single_capacity, concat_capacity })
    }

    pub fn single_capacity(&self) -> usize {
        self.single_capacity
    }

    pub fn concat_capacity(&self) -> usize {
        self.concat_capacity
    }

    /// Number of segments needed for `length` billed characters.
    ///
    /// The first segment holds `single_capacity`; every further started chunk of
    /// `concat_capacity` adds one.
    pub fn segments_for(&self, length: usize) -> usize {
        if length == 0 {
            0
        } else if length <= self.single_capacity {
            1
        } else {
            1 + (length - self.single_capacity).div_ceil(self.concat_capacity)
        }
    }

    /// Total billed characters that fit in `segments` segments, saturating at `usize::MAX`.
    pub fn capacity_of(&self, segments: usize) -> usize {
        match segments {
            0 => 0,
            n => self.single_capacity.saturating_add(self.concat_capacity.saturating_mul(n - 1)),
        }
    }

    /// Characters left before `length` spills into another segment.
    pub fn remaining_for(&self, length: usize) -> usize {
        let used = self.segments_for(length).max(1);
        self.capacity_of(used).saturating_sub(length)
    }
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_of_standard_policy() {
        let p = SegmentPolicy::STANDARD;
        assert_eq!(p.segments_for(0), 0);
        assert_eq!(p.segments_for(1), 1);
        assert_eq!(p.segments_for(70), 1);
        assert_eq!(p.segments_for(71), 2);
        assert_eq!(p.segments_for(136), 2);
        assert_eq!(p.segments_for(137), 3);
        assert_eq!(p.segments_for(202), 3);
        assert_eq!(p.segments_for(203), 4);
        assert_eq!(p.segments_for(660), 10);
    }

    #[test]
    fn remaining_tracks_current_segment() {
        let p = SegmentPolicy::STANDARD;
        assert_eq!(p.remaining_for(0), 70);
        assert_eq!(p.remaining_for(65), 5);
        assert_eq!(p.remaining_for(70), 0);
        assert_eq!(p.remaining_for(71), 65);
        assert_eq!(p.remaining_for(136), 0);
    }

    #[test]
    fn capacity_of_segments() {
        let p = SegmentPolicy::STANDARD;
        assert_eq!(p.capacity_of(0), 0);
        assert_eq!(p.capacity_of(1), 70);
        assert_eq!(p.capacity_of(10), 70 + 66 * 9);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            SegmentPolicy::new(0, 66),
            Err(PolicyError::ZeroCapacity { field: "single_segment_capacity" })
        );
        assert_eq!(
            SegmentPolicy::new(70, 0),
            Err(PolicyError::ZeroCapacity { field: "concat_segment_capacity" })
        );
    }

    #[test]
    fn gsm_style_policy() {
        let p = SegmentPolicy::new(160, 153).expect("valid policy");
        assert_eq!(p.segments_for(160), 1);
        assert_eq!(p.segments_for(161), 2);
        assert_eq!(p.segments_for(313), 2);
        assert_eq!(p.segments_for(314), 3);
    }

    #[test]
    fn huge_capacities_saturate() {
        let p = SegmentPolicy::new(1, usize::MAX).expect("valid policy");
        assert_eq!(p.segments_for(2), 2);
        assert_eq!(p.capacity_of(2), usize::MAX);
        assert_eq!(p.capacity_of(3), usize::MAX);
        assert_eq!(p.remaining_for(2), usize::MAX - 2);

        let p = SegmentPolicy::new(usize::MAX, usize::MAX).expect("valid policy");
        assert_eq!(p.segments_for(usize::MAX), 1);
        assert_eq!(p.remaining_for(usize::MAX), 0);
    }

    #[test]
    fn error_message_names_field() {
        let err = SegmentPolicy::new(70, 0).unwrap_err();
        assert_eq!(err.to_string(), "concat_segment_capacity must be greater than zero");
    }
}
