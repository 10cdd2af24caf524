use log::debug;

use crate::types::{Caption, CaptionId};

/// Ordered caption collection. Sequence order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct CaptionStore {
    captions: Vec<Caption>,
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callers guarantee id uniqueness; no duplicate check happens here.
    pub fn append(&mut self, caption: Caption) {
        debug!("append caption id={}", caption.id);
        self.captions.push(caption);
    }

    /// Overwrites the entry with the same id in place. Returns false when no
    /// entry matched and the store was left untouched.
    pub fn replace(&mut self, caption: Caption) -> bool {
        match self.captions.iter_mut().find(|c| c.id == caption.id) {
            Some(slot) => {
                debug!("replace caption id={}", caption.id);
                *slot = caption;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: CaptionId) -> Option<Caption> {
        let index = self.captions.iter().position(|c| c.id == id)?;
        let removed = self.captions.remove(index);
        self.captions.retain(|c| c.id != id);
        debug!("remove caption id={id}");
        Some(removed)
    }

    pub fn get(&self, id: CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|c| c.id == id)
    }

    pub fn find_interval(&self, start: f64, end: f64) -> Option<&Caption> {
        self.captions.iter().find(|c| c.same_interval(start, end))
    }

    pub fn as_slice(&self) -> &[Caption] {
        &self.captions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Caption> {
        self.captions.iter()
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }
}
