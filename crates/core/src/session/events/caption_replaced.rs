use std::{any::Any, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    events::{Event, EventHeader},
    types::Caption,
};

#[derive(Clone, Serialize)]
pub struct CaptionReplaced {
    pub header: EventHeader,
    pub previous: Caption,
    pub caption: Caption,
}

impl CaptionReplaced {
    pub const EVENT_TYPE: &'static str = "caption.replaced";

    pub fn new(previous: Caption, caption: Caption) -> Self {
        Self {
            header: EventHeader::new(),
            previous,
            caption,
        }
    }
}

impl Event for CaptionReplaced {
    fn event_id(&self) -> Uuid {
        self.header.event_id
    }

    fn parent_ids(&self) -> &[Uuid] {
        &self.header.parent_ids
    }

    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn timestamp(&self) -> SystemTime {
        self.header.timestamp
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "#{} {:?} -> {:?}",
            self.caption.id, self.previous.text, self.caption.text
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
