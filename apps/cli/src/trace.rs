use std::sync::Arc;

use captioner_core::{
    events::{EnrichedEvent, EventBus},
    queues::QueueKind,
    session::events::{
        CaptionAdded, CaptionRemoved, CaptionReplaced, DurationLoaded, PlaybackProgressed,
        VideoUrlChanged,
    },
    subscribers::{InputSpec, Subscriber, SubscriberFailed, SubscriptionSpec},
};
use console::style;

const DEFAULT_CAPACITY: usize = 64;

/// `--events`: prints every session event as one JSON line.
pub struct EventTrace;

impl EventTrace {
    pub fn subscription_with(capacity: usize) -> SubscriptionSpec {
        let fifo = |event_type: &'static str| InputSpec {
            event_type,
            queue_kind: QueueKind::FifoDropOldest { capacity },
        };

        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![
                fifo(VideoUrlChanged::EVENT_TYPE),
                fifo(DurationLoaded::EVENT_TYPE),
                fifo(CaptionAdded::EVENT_TYPE),
                fifo(CaptionReplaced::EVENT_TYPE),
                fifo(CaptionRemoved::EVENT_TYPE),
                fifo(SubscriberFailed::EVENT_TYPE),
                // Progress arrives twice a second; only the newest is worth printing.
                InputSpec {
                    event_type: PlaybackProgressed::EVENT_TYPE,
                    queue_kind: QueueKind::Latest1,
                },
            ],
        }
    }
}

impl Subscriber for EventTrace {
    const SUBSCRIBER_ID: &'static str = "cli.event_trace";

    fn subscription() -> SubscriptionSpec {
        Self::subscription_with(DEFAULT_CAPACITY)
    }

    fn handle(&mut self, event: Arc<EnrichedEvent>, _bus: &EventBus) -> anyhow::Result<()> {
        let json = event.to_json()?;
        println!("{}", style(json).dim());
        Ok(())
    }
}
