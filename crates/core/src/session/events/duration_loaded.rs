use std::{any::Any, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::events::{Event, EventHeader};

#[derive(Clone, Serialize)]
pub struct DurationLoaded {
    pub header: EventHeader,
    pub total_seconds: f64,
}

impl DurationLoaded {
    pub const EVENT_TYPE: &'static str = "playback.duration_loaded";

    pub fn new(total_seconds: f64) -> Self {
        Self {
            header: EventHeader::new(),
            total_seconds,
        }
    }
}

impl Event for DurationLoaded {
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
        Some(format!("{}s", self.total_seconds))
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
