use std::{
    any::Any,
    sync::Arc,
    time::{Instant, SystemTime},
};

use erased_serde::Serialize as ErasedSerialize;
use uuid::Uuid;

pub trait Event: Send + Sync + ErasedSerialize + 'static {
    fn event_id(&self) -> Uuid;
    fn parent_ids(&self) -> &[Uuid];
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> SystemTime;

    /// Short line for logs and the CLI event trace.
    fn summary(&self) -> Option<String> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EventHeader {
    pub event_id: Uuid,
    pub parent_ids: Vec<Uuid>,
    pub timestamp: SystemTime,
}

impl EventHeader {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            parent_ids: Vec::new(),
            timestamp: SystemTime::now(),
        }
    }

    pub fn child_of(parent: Uuid) -> Self {
        Self {
            parent_ids: vec![parent],
            ..Self::new()
        }
    }
}

impl Default for EventHeader {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EnrichedEvent {
    pub event: Arc<dyn Event>,
    pub ingest_seq: u64,
    pub session_id: Uuid,
    pub ingested_at: Instant,
}

impl EnrichedEvent {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let event = erased_serde::serialize(self.event.as_ref(), serde_json::value::Serializer)?;
        Ok(serde_json::json!({
            "type": self.event.event_type(),
            "seq": self.ingest_seq,
            "session": self.session_id,
            "event": event,
        }))
    }
}

pub fn downcast_ref<T: 'static>(e: &Arc<dyn Event>) -> Option<&T> {
    e.as_any().downcast_ref::<T>()
}
