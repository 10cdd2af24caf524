use std::sync::Arc;

use log::info;

use crate::{
    events::EventBus,
    form::CaptionSink,
    session::{
        events::{CaptionAdded, CaptionRemoved, CaptionReplaced},
        notifications::NotificationSubscriber,
    },
    store::CaptionStore,
    subscribers::{Subscriber, SubscriberInputs},
    types::{Caption, CaptionId},
};

/// The store plus everything that has to happen after it changes: an event on
/// the bus and, for adds and removes, a notification.
pub struct CaptionCollection {
    store: CaptionStore,
    bus: EventBus,
    notifications: NotificationSubscriber,
    notification_inputs: SubscriberInputs,
}

impl CaptionCollection {
    pub fn new(
        bus: EventBus,
        notifications: NotificationSubscriber,
        notification_inputs: SubscriberInputs,
    ) -> Self {
        Self {
            store: CaptionStore::new(),
            bus,
            notifications,
            notification_inputs,
        }
    }

    pub fn store(&self) -> &CaptionStore {
        &self.store
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn append(&mut self, caption: Caption) {
        info!(
            "caption added id={} {}s-{}s",
            caption.id, caption.start, caption.end
        );
        self.store.append(caption.clone());
        self.bus.publish(Arc::new(CaptionAdded::new(caption)));
        self.flush_notifications();
    }

    pub fn replace(&mut self, caption: Caption) -> bool {
        let Some(previous) = self.store.get(caption.id).cloned() else {
            return false;
        };
        info!("caption replaced id={}", caption.id);
        self.store.replace(caption.clone());
        self.bus
            .publish(Arc::new(CaptionReplaced::new(previous, caption)));
        true
    }

    pub fn remove(&mut self, id: CaptionId) -> Option<Caption> {
        let removed = self.store.remove(id)?;
        info!("caption removed id={id}");
        self.bus.publish(Arc::new(CaptionRemoved::new(removed.clone())));
        self.flush_notifications();
        Some(removed)
    }

    fn flush_notifications(&mut self) {
        self.notifications
            .drain(&mut self.notification_inputs, &self.bus);
    }
}

impl CaptionSink for CaptionCollection {
    fn captions(&self) -> &[Caption] {
        self.store.as_slice()
    }

    fn add_caption(&mut self, caption: Caption) {
        self.append(caption);
    }

    fn replace_caption(&mut self, caption: Caption) {
        self.replace(caption);
    }
}
