//! The editing session: one video source, its captions, the form and the
//! overlay. Everything runs on the caller's thread, one handler at a time.

pub mod collection;
pub mod events;
pub mod notifications;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    confirm::Confirm,
    events::{BusConfig, EventBus, EventBusBuilder},
    form::{CaptionForm, SubmitOutcome},
    ids::IdGenerator,
    notify::Notifier,
    playback::PlaybackTracker,
    resolver::{Overlay, OverlayChange, resolve},
    store::CaptionStore,
    subscribers::{Subscriber, SubscriberWiring, SubscriptionSpec},
    types::{Caption, CaptionId},
};

use self::{
    collection::CaptionCollection,
    events::{DurationLoaded, PlaybackProgressed, VideoUrlChanged},
    notifications::NotificationSubscriber,
};

pub struct CaptionSession {
    captions: CaptionCollection,
    form: CaptionForm,
    playback: PlaybackTracker,
    overlay: Overlay,
    ids: IdGenerator,
}

impl CaptionSession {
    pub fn new(config: &AppConfig, notifier: Box<dyn Notifier>) -> Result<Self> {
        let (session, _) = Self::with_observers(config, notifier, Vec::new())?;
        Ok(session)
    }

    /// Like [`CaptionSession::new`], additionally wiring `observers` into the
    /// bus. Their inputs are returned for the caller to drain.
    pub fn with_observers(
        config: &AppConfig,
        notifier: Box<dyn Notifier>,
        observers: Vec<SubscriptionSpec>,
    ) -> Result<(Self, SubscriberWiring)> {
        let bus_config = BusConfig {
            session_id: Uuid::new_v4(),
            strict_routing: false,
        };
        let builder = observers.into_iter().fold(
            EventBusBuilder::new(bus_config).subscribe(NotificationSubscriber::subscription()),
            |builder, spec| builder.subscribe(spec),
        );
        let (bus, mut wiring) = builder.build().context("Failed to wire session event bus")?;
        let notification_inputs = wiring
            .take(NotificationSubscriber::SUBSCRIBER_ID)
            .context("notification subscriber was not wired")?;

        debug!("session {} started", bus.session_id());
        let session = Self {
            captions: CaptionCollection::new(
                bus,
                NotificationSubscriber::new(notifier),
                notification_inputs,
            ),
            form: CaptionForm::new(),
            playback: PlaybackTracker::new(),
            overlay: Overlay::new(),
            ids: IdGenerator::new(),
        };
        Ok((session, wiring))
    }

    pub fn bus(&self) -> &EventBus {
        self.captions.bus()
    }

    pub fn store(&self) -> &CaptionStore {
        self.captions.store()
    }

    pub fn captions(&self) -> &[Caption] {
        self.captions.store().as_slice()
    }

    pub fn form(&self) -> &CaptionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CaptionForm {
        &mut self.form
    }

    pub fn playback(&self) -> &PlaybackTracker {
        &self.playback
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Captions survive a source change; position, duration and the form's
    /// time bound do not.
    pub fn set_video_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url == self.playback.url() {
            return;
        }
        self.playback.set_url(url.clone());
        self.form.clear_max_time();
        self.overlay = Overlay::new();
        self.bus().publish(Arc::new(VideoUrlChanged::new(url)));
    }

    /// The caption form and list are only offered once a source is set.
    pub fn is_ready(&self) -> bool {
        self.playback.has_source()
    }

    pub fn on_duration(&mut self, total_seconds: f64) -> bool {
        if !self.playback.on_duration(total_seconds) {
            return false;
        }
        self.form.set_max_time(total_seconds);
        self.bus()
            .publish(Arc::new(DurationLoaded::new(total_seconds)));
        true
    }

    pub fn on_progress(&mut self, played_seconds: f64) -> OverlayChange {
        if self.playback.on_progress(played_seconds) {
            self.bus()
                .publish(Arc::new(PlaybackProgressed::new(played_seconds)));
        }
        self.refresh_overlay()
    }

    /// Re-resolves the overlay at the current position, e.g. after the
    /// caption list changed.
    pub fn refresh_overlay(&mut self) -> OverlayChange {
        self.overlay
            .update(self.playback.played_seconds(), self.captions.store().as_slice())
    }

    pub fn current_caption(&self) -> Option<&Caption> {
        resolve(self.playback.played_seconds(), self.captions())
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn add_caption(&mut self, caption: Caption) {
        self.captions.append(caption);
    }

    pub fn replace_caption(&mut self, caption: Caption) -> bool {
        self.captions.replace(caption)
    }

    pub fn remove_caption(&mut self, id: CaptionId) -> Option<Caption> {
        self.captions.remove(id)
    }

    /// Runs the form's submit procedure against this session's captions.
    pub fn submit(&mut self, confirm: &mut dyn Confirm) -> SubmitOutcome {
        self.form.submit(&mut self.captions, confirm, &self.ids)
    }
}
