use std::{any::Any, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::events::{Event, EventHeader};

#[derive(Clone, Serialize)]
pub struct VideoUrlChanged {
    pub header: EventHeader,
    pub url: String,
}

impl VideoUrlChanged {
    pub const EVENT_TYPE: &'static str = "video.url_changed";

    pub fn new(url: String) -> Self {
        Self {
            header: EventHeader::new(),
            url,
        }
    }
}

impl Event for VideoUrlChanged {
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
        Some(self.url.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
