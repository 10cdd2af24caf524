//! Playback position tracking.
//!
//! The player itself is an external collaborator; this only records what it
//! reports: a periodic progress position and a one-shot duration on load.

use log::{debug, warn};

#[derive(Debug, Default, Clone)]
pub struct PlaybackTracker {
    url: String,
    played_seconds: f64,
    duration: Option<f64>,
    playing: bool,
}

impl PlaybackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new source resets position, duration and play state.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url == self.url {
            return;
        }
        debug!("video source changed to {url:?}");
        *self = Self {
            url,
            ..Self::default()
        };
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_source(&self) -> bool {
        !self.url.is_empty()
    }

    /// Returns false when the reported position was ignored.
    pub fn on_progress(&mut self, played_seconds: f64) -> bool {
        if !played_seconds.is_finite() || played_seconds < 0.0 {
            warn!("ignoring playback progress {played_seconds}");
            return false;
        }
        self.played_seconds = played_seconds;
        true
    }

    pub fn on_duration(&mut self, total_seconds: f64) -> bool {
        if !total_seconds.is_finite() || total_seconds < 0.0 {
            warn!("ignoring media duration {total_seconds}");
            return false;
        }
        debug!("media duration {total_seconds}s");
        self.duration = Some(total_seconds);
        true
    }

    pub fn played_seconds(&self) -> f64 {
        self.played_seconds
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Whether playback has reached the end of the media, if the duration is known.
    pub fn at_end(&self) -> bool {
        self.duration.is_some_and(|d| self.played_seconds >= d)
    }
}
