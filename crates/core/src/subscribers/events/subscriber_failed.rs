use std::{any::Any, sync::Arc, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::events::{Event, EventHeader};

#[derive(Clone, Serialize)]
pub struct SubscriberFailed {
    pub header: EventHeader,
    pub subscriber: &'static str,
    pub failed_event_type: &'static str,
    pub message: String,
}

impl SubscriberFailed {
    pub const EVENT_TYPE: &'static str = "subscriber.failed";

    pub fn new(event: Arc<dyn Event>, subscriber_id: &'static str, message: String) -> Self {
        Self {
            header: EventHeader::child_of(event.event_id()),
            subscriber: subscriber_id,
            failed_event_type: event.event_type(),
            message,
        }
    }
}

impl Event for SubscriberFailed {
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
        Some(format!("{} failed: {}", self.subscriber, self.message))
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
