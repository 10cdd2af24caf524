//! Transient user-facing messages ("toasts").

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use log::info;

use crate::config::{NotifierConfig, ToastKind, ToastPosition};

/// Fire-and-forget message sink.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub shown_at: Instant,
    pub auto_close: Duration,
}

impl Toast {
    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now) > Duration::ZERO
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.auto_close
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

/// Keeps the most recent toasts, bounded by `max_visible`, until they
/// auto-close.
pub struct ToastNotifier {
    config: NotifierConfig,
    toasts: Mutex<VecDeque<Toast>>,
}

impl ToastNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::with_capacity(config.max_visible.max(1))),
            config,
        }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn notify_at(&self, message: &str, now: Instant) {
        info!("toast: {message}");
        let mut toasts = self.toasts.lock().expect("ToastNotifier poisoned");
        while toasts.len() >= self.config.max_visible.max(1) {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            message: message.to_string(),
            kind: self.config.kind,
            position: self.config.position,
            shown_at: now,
            auto_close: self.config.auto_close,
        });
    }

    /// Toasts still on screen at `now`, oldest first. Expired ones are pruned.
    pub fn active(&self, now: Instant) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().expect("ToastNotifier poisoned");
        toasts.retain(|t| t.is_visible(now));
        toasts.iter().cloned().collect()
    }

    /// Click-to-close. Ignored unless `close_on_click` is set.
    pub fn dismiss(&self, index: usize) -> bool {
        self.dismiss_at(index, Instant::now())
    }

    /// `index` counts into [`ToastNotifier::active`] at `now`, so expired
    /// toasts are pruned before it is applied.
    pub fn dismiss_at(&self, index: usize, now: Instant) -> bool {
        if !self.config.close_on_click {
            return false;
        }
        let mut toasts = self.toasts.lock().expect("ToastNotifier poisoned");
        toasts.retain(|t| t.is_visible(now));
        toasts.remove(index).is_some()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        self.notify_at(message, Instant::now());
    }
}
