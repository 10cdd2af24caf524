use std::sync::Arc;

use anyhow::Result;
use log::warn;

use crate::{
    events::{EnrichedEvent, EventBus},
    subscribers::{SubscriberBatch, SubscriberFailed, SubscriberInputs, SubscriptionSpec},
};

/// A consumer of bus events. Handlers run on the caller's thread when the
/// owner calls [`Subscriber::drain`].
pub trait Subscriber {
    const SUBSCRIBER_ID: &'static str;

    fn subscription() -> SubscriptionSpec;

    fn handle(&mut self, event: Arc<EnrichedEvent>, bus: &EventBus) -> Result<()>;

    /// Handles everything currently queued and returns how many events were seen.
    fn drain(&mut self, inputs: &mut SubscriberInputs, bus: &EventBus) -> usize {
        let mut handled = 0;
        while let Some(batch) = inputs.try_next() {
            let events: Vec<Arc<EnrichedEvent>> = match batch {
                SubscriberBatch::Snapshots(updates) => {
                    updates.into_iter().map(|u| u.event).collect()
                }
                SubscriberBatch::FifoItem { event, .. } => vec![event],
            };

            for event in events {
                handled += 1;
                let parent = Arc::clone(&event.event);
                if let Err(e) = self.handle(event, bus) {
                    warn!("{} failed on {}: {e:#}", Self::SUBSCRIBER_ID, parent.event_type());
                    if parent.event_type() != SubscriberFailed::EVENT_TYPE {
                        bus.publish(Arc::new(SubscriberFailed::new(
                            parent,
                            Self::SUBSCRIBER_ID,
                            format!("{e:#}"),
                        )));
                    }
                }
            }
        }
        handled
    }
}
