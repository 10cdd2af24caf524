//! Caption form controller.
//!
//! Holds the pending (text, start, end) triple and the advisory error shown
//! under the form. Edits never block; validation is authoritative only in
//! [`CaptionForm::submit`].

use log::{debug, info};
use thiserror::Error;

use crate::{
    confirm::Confirm,
    ids::IdGenerator,
    types::{Caption, CaptionId},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Start time cannot exceed end time.")]
    StartAfterEnd,

    #[error("End time cannot be less than start time.")]
    EndBeforeStart,

    #[error("Please enter valid start and end times with non-empty text.")]
    InvalidSubmission,
}

/// Where a successful submission lands. Implemented by the session; the
/// form only reads the collection and asks for inserts or replaces.
pub trait CaptionSink {
    fn captions(&self) -> &[Caption];
    fn add_caption(&mut self, caption: Caption);
    fn replace_caption(&mut self, caption: Caption);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing changed and the form keeps its input.
    Rejected,
    Added(CaptionId),
    Replaced(CaptionId),
    /// An exact-interval collision was found and the user kept the old caption.
    Declined,
}

#[derive(Debug, Default, Clone)]
pub struct CaptionForm {
    text: String,
    start: f64,
    end: f64,
    error: Option<FormError>,
    max_time: Option<f64>,
}

impl CaptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn max_time(&self) -> Option<f64> {
        self.max_time
    }

    /// The raw value is kept even when it makes the pair invalid.
    pub fn set_start(&mut self, value: f64) {
        self.start = value;
        self.error = (value > self.end).then_some(FormError::StartAfterEnd);
    }

    pub fn set_end(&mut self, value: f64) {
        self.end = value;
        self.error = (value < self.start).then_some(FormError::EndBeforeStart);
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Upper bound of the time inputs, taken from the video duration.
    pub fn set_max_time(&mut self, duration: f64) {
        self.max_time = (duration.is_finite() && duration >= 0.0).then_some(duration);
    }

    pub fn clear_max_time(&mut self) {
        self.max_time = None;
    }

    /// Presentation-side clamp into `[0, max_time]`.
    pub fn clamp_time(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        match self.max_time {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Both the submit guard and the enabled state of the submit action.
    pub fn can_submit(&self) -> bool {
        self.start < self.end && self.start >= 0.0 && !self.text.trim().is_empty()
    }

    pub fn submit(
        &mut self,
        sink: &mut dyn CaptionSink,
        confirm: &mut dyn Confirm,
        ids: &IdGenerator,
    ) -> SubmitOutcome {
        if !self.can_submit() {
            debug!(
                "rejecting submission start={} end={} text_len={}",
                self.start,
                self.end,
                self.text.len()
            );
            self.error = Some(FormError::InvalidSubmission);
            return SubmitOutcome::Rejected;
        }

        let existing = sink
            .captions()
            .iter()
            .find(|c| c.same_interval(self.start, self.end))
            .map(|c| c.id);

        let outcome = match existing {
            Some(id) => {
                let prompt = format!(
                    "A caption already exists for the timestamp ({}s - {}s). Do you want to replace it?",
                    self.start, self.end
                );
                if confirm.confirm(&prompt) {
                    sink.replace_caption(Caption::new(id, self.text.clone(), self.start, self.end));
                    SubmitOutcome::Replaced(id)
                } else {
                    info!("replace of caption id={id} declined");
                    SubmitOutcome::Declined
                }
            }
            None => {
                let id = ids.next();
                sink.add_caption(Caption::new(id, self.text.clone(), self.start, self.end));
                SubmitOutcome::Added(id)
            }
        };

        self.reset();
        outcome
    }

    fn reset(&mut self) {
        self.text.clear();
        self.start = 0.0;
        self.end = 0.0;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Always;

    #[derive(Default)]
    struct VecSink {
        captions: Vec<Caption>,
    }

    impl CaptionSink for VecSink {
        fn captions(&self) -> &[Caption] {
            &self.captions
        }

        fn add_caption(&mut self, caption: Caption) {
            self.captions.push(caption);
        }

        fn replace_caption(&mut self, caption: Caption) {
            for c in self.captions.iter_mut().filter(|c| c.id == caption.id) {
                *c = caption.clone();
            }
        }
    }

    fn filled(text: &str, start: f64, end: f64) -> CaptionForm {
        let mut form = CaptionForm::new();
        form.set_text(text);
        form.set_end(end);
        form.set_start(start);
        form
    }

    #[test]
    fn test_set_start_keeps_invalid_value() {
        let mut form = CaptionForm::new();
        form.set_end(3.0);
        form.set_start(5.0);

        assert_eq!(form.start(), 5.0);
        assert_eq!(form.error(), Some(FormError::StartAfterEnd));

        form.set_start(1.0);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_set_end_before_start_sets_error() {
        let mut form = CaptionForm::new();
        form.set_start(4.0);
        form.set_end(2.0);

        assert_eq!(form.end(), 2.0);
        assert_eq!(form.error(), Some(FormError::EndBeforeStart));
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("End time cannot be less than start time.")
        );
    }

    #[test]
    fn test_set_text_leaves_error_alone() {
        let mut form = CaptionForm::new();
        form.set_start(4.0);
        form.set_text("hello");

        assert_eq!(form.error(), Some(FormError::StartAfterEnd));
    }

    #[test]
    fn test_equal_bounds_are_not_submittable() {
        let mut form = filled("hi", 3.0, 3.0);
        let mut sink = VecSink::default();

        assert!(!form.can_submit());
        let outcome = form.submit(&mut sink, &mut Always(true), &IdGenerator::new());

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(form.error(), Some(FormError::InvalidSubmission));
        assert!(sink.captions.is_empty());
        assert_eq!(form.text(), "hi");
    }

    #[test]
    fn test_whitespace_text_is_rejected() {
        let mut form = filled("   \n\t", 0.0, 3.0);
        let mut sink = VecSink::default();

        assert!(!form.can_submit());
        assert_eq!(
            form.submit(&mut sink, &mut Always(true), &IdGenerator::new()),
            SubmitOutcome::Rejected
        );
        assert!(sink.captions.is_empty());
    }

    #[test]
    fn test_nan_bounds_are_rejected() {
        let form = filled("hi", f64::NAN, 3.0);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_can_submit_is_independent_of_error() {
        let mut form = CaptionForm::new();
        form.set_text("hi");
        form.set_end(3.0);
        form.set_start(3.0);

        assert_eq!(form.error(), None);
        assert!(!form.can_submit());

        form.set_start(1.0);
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_appends_and_resets() {
        let mut form = filled("Hello", 0.0, 3.0);
        let mut sink = VecSink::default();

        let outcome = form.submit(&mut sink, &mut Always(false), &IdGenerator::new());

        let SubmitOutcome::Added(id) = outcome else {
            panic!("expected Added, got {outcome:?}");
        };
        assert_eq!(sink.captions, vec![Caption::new(id, "Hello", 0.0, 3.0)]);
        assert_eq!(form.text(), "");
        assert_eq!(form.start(), 0.0);
        assert_eq!(form.end(), 0.0);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_collision_confirmed_replaces_with_original_id() {
        let mut sink = VecSink {
            captions: vec![Caption::new(7, "old", 2.0, 6.0)],
        };
        let mut form = filled("hi", 2.0, 6.0);
        let mut prompts = Vec::new();
        let mut confirm = |msg: &str| {
            prompts.push(msg.to_string());
            true
        };

        let outcome = form.submit(&mut sink, &mut confirm, &IdGenerator::new());

        assert_eq!(outcome, SubmitOutcome::Replaced(7));
        assert_eq!(sink.captions, vec![Caption::new(7, "hi", 2.0, 6.0)]);
        assert_eq!(
            prompts,
            vec![
                "A caption already exists for the timestamp (2s - 6s). Do you want to replace it?"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_collision_declined_leaves_store_and_clears_form() {
        let mut sink = VecSink {
            captions: vec![Caption::new(7, "old", 2.0, 6.0)],
        };
        let mut form = filled("hi", 2.0, 6.0);

        let outcome = form.submit(&mut sink, &mut Always(false), &IdGenerator::new());

        assert_eq!(outcome, SubmitOutcome::Declined);
        assert_eq!(sink.captions, vec![Caption::new(7, "old", 2.0, 6.0)]);
        assert_eq!(form.text(), "");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_overlap_is_not_a_collision() {
        let mut sink = VecSink {
            captions: vec![Caption::new(7, "old", 0.0, 5.0)],
        };
        let mut form = filled("new", 3.0, 8.0);
        let mut asked = false;
        let mut confirm = |_: &str| {
            asked = true;
            true
        };

        let outcome = form.submit(&mut sink, &mut confirm, &IdGenerator::new());

        assert!(matches!(outcome, SubmitOutcome::Added(_)));
        assert!(!asked);
        assert_eq!(sink.captions.len(), 2);
    }

    #[test]
    fn test_clamp_time_uses_duration() {
        let mut form = CaptionForm::new();
        assert_eq!(form.clamp_time(120.0), 120.0);

        form.set_max_time(60.0);
        assert_eq!(form.clamp_time(120.0), 60.0);
        assert_eq!(form.clamp_time(-3.0), 0.0);
        assert_eq!(form.clamp_time(f64::INFINITY), 0.0);
        assert_eq!(form.clamp_time(12.5), 12.5);
    }
}
