use std::{any::Any, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    events::{Event, EventHeader},
    types::Caption,
};

#[derive(Clone, Serialize)]
pub struct CaptionRemoved {
    pub header: EventHeader,
    pub caption: Caption,
}

impl CaptionRemoved {
    pub const EVENT_TYPE: &'static str = "caption.removed";

    pub fn new(caption: Caption) -> Self {
        Self {
            header: EventHeader::new(),
            caption,
        }
    }
}

impl Event for CaptionRemoved {
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
        Some(format!("#{}", self.caption.id))
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
