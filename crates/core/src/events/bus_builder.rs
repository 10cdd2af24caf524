use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use anyhow::Result;
use log::debug;
use uuid::Uuid;

use crate::{
    events::EventBus,
    queues::{FifoDropOldestQueue, Latest1Queue, QueueKind},
    routes::{Route, RouteInbox, Routes},
    subscribers::{FifoInput, Latest1Input, SubscriberInputs, SubscriberWiring, SubscriptionSpec},
};

pub struct BusConfig {
    pub session_id: Uuid,
    pub strict_routing: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            strict_routing: false,
        }
    }
}

#[derive(Default)]
pub struct BusMetrics {
    pub unrouted_publish_total: AtomicU64,
}

impl BusMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unrouted(&self, evt: &'static str) {
        debug!("no route for event_type={evt}");
        self.unrouted_publish_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn unrouted_total(&self) -> u64 {
        self.unrouted_publish_total.load(Ordering::Relaxed)
    }
}

fn validate(subs: &[SubscriptionSpec]) -> Result<()> {
    use std::collections::HashSet;

    let mut seen_subscribers: HashSet<&'static str> = HashSet::new();
    for s in subs {
        if s.subscriber_id.trim().is_empty() {
            anyhow::bail!("empty subscriber_id");
        }
        if !seen_subscribers.insert(s.subscriber_id) {
            anyhow::bail!("duplicate subscriber_id={}", s.subscriber_id);
        }
        if s.inputs.is_empty() {
            anyhow::bail!("subscriber_id={} has no inputs", s.subscriber_id);
        }

        let mut seen_inputs: HashSet<&'static str> = HashSet::new();
        for i in &s.inputs {
            if i.event_type.trim().is_empty() {
                anyhow::bail!("subscriber_id={} has empty event_type", s.subscriber_id);
            }
            if !seen_inputs.insert(i.event_type) {
                anyhow::bail!(
                    "subscriber_id={} has duplicate input event_type={}",
                    s.subscriber_id,
                    i.event_type
                );
            }

            match i.queue_kind {
                QueueKind::Latest1 => {}
                QueueKind::FifoDropOldest { capacity } => {
                    anyhow::ensure!(capacity > 0, "capacity must be > 0")
                }
            }
        }
    }
    Ok(())
}

pub struct EventBusBuilder {
    cfg: BusConfig,
    subs: Vec<SubscriptionSpec>,
}

impl EventBusBuilder {
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            subs: Vec::new(),
        }
    }

    pub fn subscribe(mut self, s: SubscriptionSpec) -> Self {
        self.subs.push(s);
        self
    }

    pub fn build(self) -> Result<(EventBus, SubscriberWiring)> {
        validate(&self.subs)?;

        let mut routes: HashMap<&'static str, Vec<Route>> = HashMap::new();
        let mut wiring: HashMap<&'static str, SubscriberInputs> = HashMap::new();
        let metrics = Arc::new(BusMetrics::new());

        for spec in self.subs {
            let mut latest = Vec::new();
            let mut fifos = Vec::new();

            for input in spec.inputs {
                let drops_total = Arc::new(AtomicU64::new(0));

                match input.queue_kind {
                    QueueKind::Latest1 => {
                        let q = Arc::new(Latest1Queue::new());
                        routes.entry(input.event_type).or_default().push(Route {
                            subscriber_id: spec.subscriber_id,
                            inbox: RouteInbox::Latest1(Arc::clone(&q)),
                            drops_total: Arc::clone(&drops_total),
                        });
                        latest.push(Latest1Input {
                            event_type: input.event_type,
                            queue: q,
                        });
                    }
                    QueueKind::FifoDropOldest { capacity } => {
                        let q = Arc::new(FifoDropOldestQueue::new(capacity));
                        routes.entry(input.event_type).or_default().push(Route {
                            subscriber_id: spec.subscriber_id,
                            inbox: RouteInbox::FifoDropOldest(Arc::clone(&q)),
                            drops_total: Arc::clone(&drops_total),
                        });
                        fifos.push(FifoInput {
                            event_type: input.event_type,
                            queue: q,
                        });
                    }
                }
            }

            debug!(
                "wired subscriber_id={} latest={} fifo={}",
                spec.subscriber_id,
                latest.len(),
                fifos.len()
            );
            wiring.insert(spec.subscriber_id, SubscriberInputs::new(latest, fifos));
        }

        let bus = EventBus::new(self.cfg, Routes { table: routes }, metrics);
        Ok((bus, SubscriberWiring::new(wiring)))
    }
}
