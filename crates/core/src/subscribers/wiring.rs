use std::collections::HashMap;

use crate::{queues::QueueKind, subscribers::SubscriberInputs};

pub struct SubscriptionSpec {
    pub subscriber_id: &'static str,
    pub inputs: Vec<InputSpec>,
}

pub struct InputSpec {
    pub event_type: &'static str,
    pub queue_kind: QueueKind,
}

pub struct SubscriberWiring {
    inputs: HashMap<&'static str, SubscriberInputs>,
}

impl SubscriberWiring {
    pub fn new(inputs: HashMap<&'static str, SubscriberInputs>) -> Self {
        Self { inputs }
    }

    pub fn take(&mut self, subscriber_id: &'static str) -> Option<SubscriberInputs> {
        self.inputs.remove(subscriber_id)
    }
}
