use crate::types::{Caption, CaptionId};

/// First caption in sequence order whose interval contains `seconds`.
/// Earlier-inserted captions win when intervals overlap.
pub fn resolve(seconds: f64, captions: &[Caption]) -> Option<&Caption> {
    captions.iter().find(|c| c.covers(seconds))
}

/// Every caption whose interval contains `seconds`, in sequence order.
pub fn covering(seconds: f64, captions: &[Caption]) -> impl Iterator<Item = &Caption> {
    captions.iter().filter(move |c| c.covers(seconds))
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayChange {
    Shown(Caption),
    Hidden,
    Unchanged,
}

/// Tracks the caption currently drawn over the video.
///
/// A caption edited in place keeps its id but may change text, so the
/// comparison is on the whole record rather than the id alone.
#[derive(Debug, Default, Clone)]
pub struct Overlay {
    current: Option<Caption>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Caption> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<CaptionId> {
        self.current.as_ref().map(|c| c.id)
    }

    pub fn update(&mut self, seconds: f64, captions: &[Caption]) -> OverlayChange {
        let next = resolve(seconds, captions);
        if next == self.current.as_ref() {
            return OverlayChange::Unchanged;
        }

        self.current = next.cloned();
        match &self.current {
            Some(caption) => OverlayChange::Shown(caption.clone()),
            None => OverlayChange::Hidden,
        }
    }
}
