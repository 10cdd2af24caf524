use std::sync::Mutex;

pub struct Latest1Queue<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Latest1Queue<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns true when an undelivered value was overwritten.
    pub fn set(&self, value: T) -> bool {
        self.slot
            .lock()
            .expect("Latest1Queue poisoned")
            .replace(value)
            .is_some()
    }

    pub fn try_recv(&self) -> Option<T> {
        self.slot.lock().expect("Latest1Queue poisoned").take()
    }
}

impl<T> Default for Latest1Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
