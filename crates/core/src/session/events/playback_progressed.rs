use std::{any::Any, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::events::{Event, EventHeader};

#[derive(Clone, Serialize)]
pub struct PlaybackProgressed {
    pub header: EventHeader,
    pub played_seconds: f64,
}

impl PlaybackProgressed {
    pub const EVENT_TYPE: &'static str = "playback.progressed";

    pub fn new(played_seconds: f64) -> Self {
        Self {
            header: EventHeader::new(),
            played_seconds,
        }
    }
}

impl Event for PlaybackProgressed {
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
        Some(format!("{:.1}s", self.played_seconds))
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
