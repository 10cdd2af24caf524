use std::sync::Arc;

use crate::{
    events::EnrichedEvent,
    queues::{FifoDropOldestQueue, Latest1Queue},
};

pub struct Latest1Input {
    pub event_type: &'static str,
    pub queue: Arc<Latest1Queue<Arc<EnrichedEvent>>>,
}

pub struct FifoInput {
    pub event_type: &'static str,
    pub queue: Arc<FifoDropOldestQueue<Arc<EnrichedEvent>>>,
}

pub struct SubscriberInputs {
    latest: Vec<Latest1Input>,
    fifos: Vec<FifoInput>,
    fifo_index: usize,
}

pub enum SubscriberBatch {
    Snapshots(Vec<SnapshotUpdate>),
    FifoItem {
        event_type: &'static str,
        event: Arc<EnrichedEvent>,
    },
}

pub struct SnapshotUpdate {
    pub event_type: &'static str,
    pub event: Arc<EnrichedEvent>,
}

impl SubscriberInputs {
    pub fn new(latest: Vec<Latest1Input>, fifos: Vec<FifoInput>) -> Self {
        Self {
            latest,
            fifos,
            fifo_index: 0,
        }
    }

    /// Latest-value snapshots first, then one FIFO item, round-robin across
    /// FIFO inputs. `None` once everything queued has been taken.
    pub fn try_next(&mut self) -> Option<SubscriberBatch> {
        let snaps: Vec<SnapshotUpdate> = self
            .latest
            .iter()
            .filter_map(|l| {
                l.queue.try_recv().map(|event| SnapshotUpdate {
                    event_type: l.event_type,
                    event,
                })
            })
            .collect();

        if !snaps.is_empty() {
            return Some(SubscriberBatch::Snapshots(snaps));
        }

        for _ in 0..self.fifos.len() {
            let i = self.fifo_index;
            self.fifo_index = (self.fifo_index + 1) % self.fifos.len();
            let fifo = &self.fifos[i];

            if let Some(event) = fifo.queue.try_recv() {
                return Some(SubscriberBatch::FifoItem {
                    event_type: fifo.event_type,
                    event,
                });
            }
        }

        None
    }
}
