//! Captioner Core Library
//!
//! Timed captions for a video: the caption store, the form controller that
//! decides between insert, replace and reject, the resolver that picks the
//! caption shown at a playback position, and the session tying them to a
//! notifier and an event bus.

pub mod config;
pub mod confirm;
pub mod error;
pub mod events;
pub mod form;
pub mod format;
pub mod ids;
pub mod notify;
pub mod playback;
pub mod queues;
pub mod resolver;
pub mod routes;
pub mod session;
pub mod store;
pub mod subscribers;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, NotifierConfig, PlayerConfig};
pub use confirm::{Always, Confirm};
pub use error::{CaptionerError, Result};
pub use form::{CaptionForm, CaptionSink, FormError, SubmitOutcome};
pub use format::{format_caption_row, format_seconds, format_timestamp};
pub use ids::IdGenerator;
pub use notify::{Notifier, Toast, ToastNotifier};
pub use playback::PlaybackTracker;
pub use resolver::{Overlay, OverlayChange, covering, resolve};
pub use session::{
    CaptionSession,
    notifications::{CAPTION_ADDED_MESSAGE, CAPTION_REMOVED_MESSAGE},
};
pub use store::CaptionStore;
pub use types::{Caption, CaptionId};
