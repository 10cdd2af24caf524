pub mod fifo_drop_oldest_queue;
pub mod latest1_queue;

pub use fifo_drop_oldest_queue::*;
pub use latest1_queue::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    /// Keep only the newest value; older undelivered ones are overwritten.
    Latest1,
    FifoDropOldest { capacity: usize },
}
