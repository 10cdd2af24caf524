use std::{cell::RefCell, rc::Rc, sync::Arc};

use captioner_core::{
    Always, AppConfig, CAPTION_ADDED_MESSAGE, CAPTION_REMOVED_MESSAGE, Caption, CaptionSession,
    Notifier, OverlayChange, SubmitOutcome, ToastNotifier,
    events::{EnrichedEvent, EventBus},
    queues::QueueKind,
    session::events::{CaptionAdded, CaptionRemoved, CaptionReplaced, PlaybackProgressed},
    subscribers::{InputSpec, Subscriber, SubscriptionSpec},
};

#[derive(Clone, Default)]
struct Recorder {
    messages: Rc<RefCell<Vec<String>>>,
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl Recorder {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

fn session() -> (CaptionSession, Recorder) {
    let recorder = Recorder::default();
    let mut session =
        CaptionSession::new(&AppConfig::default(), Box::new(recorder.clone())).unwrap();
    session.set_video_url("https://example.com/video.mp4");
    (session, recorder)
}

fn submit(
    session: &mut CaptionSession,
    text: &str,
    start: f64,
    end: f64,
    confirm: bool,
) -> SubmitOutcome {
    let form = session.form_mut();
    form.set_text(text);
    form.set_end(end);
    form.set_start(start);
    session.submit(&mut Always(confirm))
}

#[test]
fn test_add_resolve_remove_scenario() {
    let (mut session, recorder) = session();
    assert!(session.captions().is_empty());

    let SubmitOutcome::Added(hello) = submit(&mut session, "Hello", 0.0, 3.0, true) else {
        panic!("expected Hello to be added");
    };
    assert_eq!(session.captions().len(), 1);

    session.on_progress(1.0);
    assert_eq!(session.current_caption().map(|c| c.id), Some(hello));
    session.on_progress(5.0);
    assert!(session.current_caption().is_none());

    let SubmitOutcome::Added(world) = submit(&mut session, "World", 5.0, 9.0, true) else {
        panic!("expected World to be added");
    };
    let ids: Vec<_> = session.captions().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![hello, world]);

    let removed = session.remove_caption(hello).unwrap();
    assert_eq!(removed.text, "Hello");
    assert_eq!(session.captions(), &[Caption::new(world, "World", 5.0, 9.0)]);

    assert_eq!(
        recorder.take(),
        vec![
            CAPTION_ADDED_MESSAGE,
            CAPTION_ADDED_MESSAGE,
            CAPTION_REMOVED_MESSAGE
        ]
    );
}

#[test]
fn test_invalid_submissions_never_touch_the_store() {
    let (mut session, recorder) = session();
    submit(&mut session, "keep", 1.0, 2.0, true);
    let before = session.captions().to_vec();
    recorder.take();

    assert_eq!(submit(&mut session, "x", 4.0, 4.0, true), SubmitOutcome::Rejected);
    assert_eq!(submit(&mut session, "x", 6.0, 4.0, true), SubmitOutcome::Rejected);
    assert_eq!(submit(&mut session, "  ", 0.0, 4.0, true), SubmitOutcome::Rejected);
    assert_eq!(submit(&mut session, "x", -1.0, 4.0, true), SubmitOutcome::Rejected);

    assert_eq!(session.captions(), before.as_slice());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_replace_keeps_id_and_stays_silent() {
    let (mut session, recorder) = session();
    let SubmitOutcome::Added(id) = submit(&mut session, "old", 2.0, 6.0, true) else {
        panic!("expected add");
    };
    recorder.take();

    assert_eq!(submit(&mut session, "hi", 2.0, 6.0, true), SubmitOutcome::Replaced(id));

    assert_eq!(session.captions(), &[Caption::new(id, "hi", 2.0, 6.0)]);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_declined_replace_leaves_store_unchanged() {
    let (mut session, recorder) = session();
    submit(&mut session, "old", 2.0, 6.0, true);
    let before = session.captions().to_vec();
    recorder.take();

    assert_eq!(submit(&mut session, "hi", 2.0, 6.0, false), SubmitOutcome::Declined);

    assert_eq!(session.captions(), before.as_slice());
    assert!(recorder.take().is_empty());
    assert_eq!(session.form().text(), "");
    assert_eq!(session.form().error(), None);
}

#[test]
fn test_overlapping_captions_resolve_to_first_inserted() {
    let (mut session, _) = session();
    let SubmitOutcome::Added(first) = submit(&mut session, "first", 0.0, 5.0, true) else {
        panic!("expected add");
    };
    submit(&mut session, "second", 3.0, 8.0, true);

    assert_eq!(
        session.on_progress(4.0),
        OverlayChange::Shown(Caption::new(first, "first", 0.0, 5.0))
    );
    assert_eq!(session.captions().len(), 2);
}

#[test]
fn test_remove_leaves_other_entries_untouched() {
    let (mut session, _) = session();
    for (i, text) in ["a", "b", "c", "d"].iter().enumerate() {
        submit(&mut session, text, i as f64, i as f64 + 0.5, true);
    }
    let before = session.captions().to_vec();

    session.remove_caption(before[2].id);

    let expected: Vec<Caption> = before
        .iter()
        .filter(|c| c.id != before[2].id)
        .cloned()
        .collect();
    assert_eq!(session.captions(), expected.as_slice());
    assert!(session.remove_caption(before[2].id).is_none());
}

#[test]
fn test_duration_bounds_the_form() {
    let (mut session, _) = session();
    assert!(session.on_duration(42.0));

    assert_eq!(session.form().max_time(), Some(42.0));
    assert_eq!(session.form().clamp_time(100.0), 42.0);

    session.set_video_url("https://example.com/other.mp4");
    assert_eq!(session.form().max_time(), None);
}

#[test]
fn test_overlay_follows_edits_at_fixed_position() {
    let (mut session, _) = session();
    session.on_progress(1.0);

    let SubmitOutcome::Added(id) = submit(&mut session, "one", 0.0, 2.0, true) else {
        panic!("expected add");
    };
    assert_eq!(
        session.refresh_overlay(),
        OverlayChange::Shown(Caption::new(id, "one", 0.0, 2.0))
    );

    session.remove_caption(id);
    assert_eq!(session.refresh_overlay(), OverlayChange::Hidden);
}

#[test]
fn test_toast_notifier_through_session() {
    let toasts = Arc::new(ToastNotifier::new(Default::default()));
    let mut session =
        CaptionSession::new(&AppConfig::default(), Box::new(Arc::clone(&toasts))).unwrap();
    session.set_video_url("v.mp4");

    submit(&mut session, "hello", 0.0, 1.0, true);

    let active = toasts.active(std::time::Instant::now());
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, CAPTION_ADDED_MESSAGE);
}

struct ChangeLog {
    seen: Vec<&'static str>,
    last_position: Option<f64>,
}

impl Subscriber for ChangeLog {
    const SUBSCRIBER_ID: &'static str = "test.change_log";

    fn subscription() -> SubscriptionSpec {
        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![
                InputSpec {
                    event_type: CaptionAdded::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 8 },
                },
                InputSpec {
                    event_type: CaptionReplaced::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 8 },
                },
                InputSpec {
                    event_type: CaptionRemoved::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 8 },
                },
                InputSpec {
                    event_type: PlaybackProgressed::EVENT_TYPE,
                    queue_kind: QueueKind::Latest1,
                },
            ],
        }
    }

    fn handle(&mut self, event: Arc<EnrichedEvent>, _bus: &EventBus) -> anyhow::Result<()> {
        if let Some(progress) = event.event.as_any().downcast_ref::<PlaybackProgressed>() {
            self.last_position = Some(progress.played_seconds);
        }
        self.seen.push(event.event.event_type());
        Ok(())
    }
}

#[test]
fn test_observers_see_changes_and_latest_position() {
    let (mut session, mut wiring) = CaptionSession::with_observers(
        &AppConfig::default(),
        Box::new(Recorder::default()),
        vec![ChangeLog::subscription()],
    )
    .unwrap();
    let mut inputs = wiring.take(ChangeLog::SUBSCRIBER_ID).unwrap();
    let mut log = ChangeLog {
        seen: Vec::new(),
        last_position: None,
    };
    session.set_video_url("v.mp4");

    submit(&mut session, "a", 0.0, 1.0, true);
    submit(&mut session, "b", 0.0, 1.0, true);
    for t in [0.5, 1.0, 1.5] {
        session.on_progress(t);
    }

    let handled = log.drain(&mut inputs, session.bus());

    assert_eq!(handled, 3);
    assert_eq!(log.last_position, Some(1.5));
    assert_eq!(
        log.seen,
        vec![
            PlaybackProgressed::EVENT_TYPE,
            CaptionAdded::EVENT_TYPE,
            CaptionReplaced::EVENT_TYPE
        ]
    );
    assert_eq!(session.bus().drops_for(ChangeLog::SUBSCRIBER_ID), 2);
}

#[test]
fn test_unrouted_session_events_are_not_fatal() {
    let config = AppConfig::from_json(r#"{ "bus": { "strict_routing": true } }"#).unwrap();
    let recorder = Recorder::default();
    let mut session = CaptionSession::new(&config, Box::new(recorder.clone())).unwrap();

    session.set_video_url("https://example.com/v.mp4");
    session.on_duration(30.0);
    session.on_progress(1.0);
    submit(&mut session, "first", 0.0, 2.0, true);
    let outcome = submit(&mut session, "second", 0.0, 2.0, true);

    assert!(matches!(outcome, SubmitOutcome::Replaced(_)));
    assert_eq!(session.captions().len(), 1);
    assert!(session.bus().metrics().unrouted_total() > 0);
    assert_eq!(recorder.take(), vec![CAPTION_ADDED_MESSAGE.to_string()]);
}
