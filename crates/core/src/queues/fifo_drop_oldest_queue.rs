use std::{collections::VecDeque, sync::Mutex};

pub struct FifoDropOldestQueue<T> {
    buf: Mutex<VecDeque<T>>,
    capacity: usize,
}

impl<T> FifoDropOldestQueue<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);

        Self {
            buf: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Returns true when the oldest value had to be dropped to make room.
    pub fn push_overwrite(&self, value: T) -> bool {
        let mut buf = self.buf.lock().expect("FifoDropOldestQueue poisoned");
        let dropped = if buf.len() >= self.capacity {
            buf.pop_front().is_some()
        } else {
            false
        };
        buf.push_back(value);
        dropped
    }

    pub fn try_recv(&self) -> Option<T> {
        self.buf
            .lock()
            .expect("FifoDropOldestQueue poisoned")
            .pop_front()
    }

    pub fn len(&self) -> usize {
        self.buf.lock().expect("FifoDropOldestQueue poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_when_full() {
        let q = FifoDropOldestQueue::new(2);

        assert!(!q.push_overwrite("a"));
        assert!(!q.push_overwrite("b"));
        assert!(q.push_overwrite("c"));

        assert_eq!(q.len(), 2);
        assert_eq!(q.try_recv(), Some("b"));
        assert_eq!(q.try_recv(), Some("c"));
        assert!(q.is_empty());
    }
}
