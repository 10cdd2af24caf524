use std::sync::Arc;

use crate::{
    events::{EnrichedEvent, EventBus, downcast_ref},
    notify::Notifier,
    queues::QueueKind,
    session::events::{CaptionAdded, CaptionRemoved},
    subscribers::{InputSpec, Subscriber, SubscriptionSpec},
};

pub const CAPTION_ADDED_MESSAGE: &str = "Caption Added Successfully!";
pub const CAPTION_REMOVED_MESSAGE: &str = "Caption Removed Successfully!";

/// Turns add/remove events into toasts. Replacements are not routed here,
/// so they stay silent.
pub struct NotificationSubscriber {
    notifier: Box<dyn Notifier>,
}

impl NotificationSubscriber {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl Subscriber for NotificationSubscriber {
    const SUBSCRIBER_ID: &'static str = "session.notifications";

    fn subscription() -> SubscriptionSpec {
        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![
                InputSpec {
                    event_type: CaptionAdded::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 16 },
                },
                InputSpec {
                    event_type: CaptionRemoved::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 16 },
                },
            ],
        }
    }

    fn handle(&mut self, event: Arc<EnrichedEvent>, _bus: &EventBus) -> anyhow::Result<()> {
        if downcast_ref::<CaptionAdded>(&event.event).is_some() {
            self.notifier.notify(CAPTION_ADDED_MESSAGE);
        } else if downcast_ref::<CaptionRemoved>(&event.event).is_some() {
            self.notifier.notify(CAPTION_REMOVED_MESSAGE);
        } else {
            anyhow::bail!("unexpected event_type={}", event.event.event_type());
        }
        Ok(())
    }
}
