use serde::{Deserialize, Serialize};

pub type CaptionId = u64;

/// One timed caption. Times are seconds from the start of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub id: CaptionId,
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Caption {
    pub fn new(id: CaptionId, text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            id,
            text: text.into(),
            start,
            end,
        }
    }

    /// Inclusive on both bounds.
    pub fn covers(&self, seconds: f64) -> bool {
        seconds >= self.start && seconds <= self.end
    }

    /// Exact match on both bounds; overlapping intervals are not the same interval.
    pub fn same_interval(&self, start: f64, end: f64) -> bool {
        self.start == start && self.end == end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive() {
        let caption = Caption::new(1, "hello", 2.0, 4.0);

        assert!(caption.covers(2.0));
        assert!(caption.covers(3.0));
        assert!(caption.covers(4.0));
        assert!(!caption.covers(1.999));
        assert!(!caption.covers(4.001));
    }

    #[test]
    fn test_same_interval_requires_both_bounds() {
        let caption = Caption::new(1, "hello", 2.0, 6.0);

        assert!(caption.same_interval(2.0, 6.0));
        assert!(!caption.same_interval(2.0, 5.0));
        assert!(!caption.same_interval(3.0, 6.0));
        assert_eq!(caption.duration(), 4.0);
    }
}
