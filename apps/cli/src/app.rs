use std::{sync::Arc, time::Instant};

use anyhow::{Result, bail};
use captioner_core::{
    AppConfig, CaptionSession, CaptionerError, OverlayChange, PlayerConfig, SubmitOutcome,
    covering,
    format::{EMPTY_LIST_MESSAGE, format_caption_row},
    format_seconds, format_timestamp,
    subscribers::{Subscriber, SubscriberInputs},
};
use console::style;

use crate::{
    commands::{Command, HELP},
    confirm::PromptConfirm,
    notifier::{ConsoleNotifier, styled_toast},
    player,
    trace::EventTrace,
};

pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub(crate) session: CaptionSession,
    notifier: Arc<ConsoleNotifier>,
    confirm: PromptConfirm,
    trace: Option<(EventTrace, SubscriberInputs)>,
    pub(crate) player: PlayerConfig,
}

impl App {
    pub fn new(config: &AppConfig, assume_yes: bool, trace_events: bool) -> Result<Self> {
        let notifier = Arc::new(ConsoleNotifier::new(config.notifier.clone()));
        let observers = if trace_events {
            vec![EventTrace::subscription_with(config.bus.observer_capacity)]
        } else {
            Vec::new()
        };

        let (session, mut wiring) =
            CaptionSession::with_observers(config, Box::new(Arc::clone(&notifier)), observers)?;
        let trace = wiring
            .take(EventTrace::SUBSCRIBER_ID)
            .map(|inputs| (EventTrace, inputs));

        Ok(Self {
            session,
            notifier,
            confirm: PromptConfirm::new(assume_yes),
            trace,
            player: config.player.clone(),
        })
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Quit),
            Command::Url(url) => {
                self.session.set_video_url(url);
                println!(
                    "{} Video source: {}",
                    style("✓").green().bold(),
                    style(self.session.playback().url()).cyan()
                );
            }
            Command::Toasts => self.print_toasts(),
            Command::Dismiss(index) => {
                if !self.notifier.toasts().dismiss(index) {
                    bail!("No notification {index} to dismiss");
                }
            }
            command => {
                if !self.session.is_ready() {
                    bail!("Enter a video URL first ('url <URL>')");
                }
                self.execute_with_source(command).await?;
            }
        }

        self.after_command();
        Ok(Flow::Continue)
    }

    async fn execute_with_source(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Duration(seconds) => {
                if !self.session.on_duration(seconds) {
                    bail!("Ignoring invalid duration {seconds}");
                }
                println!(
                    "{} Duration: {}",
                    style("✓").green().bold(),
                    format_timestamp(seconds)
                );
            }
            Command::Text(text) => self.session.form_mut().set_text(text),
            Command::Start(seconds) => {
                let value = self.clamped(seconds);
                self.session.form_mut().set_start(value);
                self.print_form_error();
            }
            Command::End(seconds) => {
                let value = self.clamped(seconds);
                self.session.form_mut().set_end(value);
                self.print_form_error();
            }
            Command::Form => self.print_form(),
            Command::Submit => self.submit(),
            Command::List => self.print_list(),
            Command::Remove(id) => {
                if self.session.remove_caption(id).is_none() {
                    return Err(CaptionerError::UnknownCaption { id }.into());
                }
            }
            Command::Seek(seconds) => {
                let change = self.session.on_progress(seconds);
                print_position(self.session.playback().played_seconds());
                print_overlay(&change);
            }
            Command::Play(limit) => player::simulate(self, limit).await?,
            Command::Pause => {
                self.session.pause();
                println!("{} Paused", style("⏸").dim());
            }
            Command::Help
            | Command::Quit
            | Command::Url(_)
            | Command::Toasts
            | Command::Dismiss(_) => unreachable!("handled before the source check"),
        }
        Ok(())
    }

    fn clamped(&self, seconds: f64) -> f64 {
        let value = self.session.form().clamp_time(seconds);
        if value != seconds {
            println!(
                "{}",
                style(format!("clamped {} to {}", format_seconds(seconds), format_seconds(value)))
                    .dim()
            );
        }
        value
    }

    fn submit(&mut self) {
        let outcome = self.session.submit(&mut self.confirm);
        match outcome {
            SubmitOutcome::Rejected => self.print_form_error(),
            SubmitOutcome::Added(id) => {
                println!("{}", style(format!("caption #{id}")).dim());
            }
            SubmitOutcome::Replaced(id) => {
                println!("{} Replaced caption #{id}", style("✓").green().bold());
            }
            SubmitOutcome::Declined => {
                println!("{}", style("Kept the existing caption").dim());
            }
        }
    }

    /// Drains observers and redraws the overlay if the list change moved it.
    pub(crate) fn after_command(&mut self) {
        if let Some((trace, inputs)) = self.trace.as_mut() {
            trace.drain(inputs, self.session.bus());
        }
        if self.session.is_ready() {
            let change = self.session.refresh_overlay();
            if change != OverlayChange::Unchanged {
                print_overlay(&change);
            }
        }
    }

    fn print_form(&self) {
        let form = self.session.form();
        println!("{}", style("Caption form").bold());
        println!("  text:  {:?}", form.text());
        println!("  start: {}", format_seconds(form.start()));
        println!("  end:   {}", format_seconds(form.end()));
        if let Some(max) = form.max_time() {
            println!("  max:   {}", format_seconds(max));
        }
        let submit = if form.can_submit() {
            style("enabled").green()
        } else {
            style("disabled").red()
        };
        println!("  submit: {submit}");
        self.print_form_error();
    }

    fn print_form_error(&self) {
        if let Some(error) = self.session.form().error() {
            println!("{} {}", style("✗").red().bold(), style(error).red());
        }
    }

    fn print_list(&self) {
        println!("{}", style("Caption List").bold());
        let captions = self.session.captions();
        if captions.is_empty() {
            println!("  {}", style(EMPTY_LIST_MESSAGE).dim());
            return;
        }

        let position = self.session.playback().played_seconds();
        let active: Vec<_> = covering(position, captions).map(|c| c.id).collect();
        for caption in captions {
            let row = format_caption_row(caption);
            if self.session.overlay().current_id() == Some(caption.id) {
                println!("{} {}", style("▶").cyan(), style(row).cyan());
            } else if active.contains(&caption.id) {
                println!("{} {}", style("·").dim(), row);
            } else {
                println!("  {row}");
            }
        }
    }

    fn print_toasts(&self) {
        let now = Instant::now();
        let toasts = self.notifier.toasts().active(now);
        if toasts.is_empty() {
            println!("{}", style("No notifications").dim());
            return;
        }
        let config = self.notifier.toasts().config();
        for (index, toast) in toasts.iter().enumerate() {
            let remaining = if config.hide_progress_bar {
                String::new()
            } else {
                format!(" ({:.1}s)", toast.remaining(now).as_secs_f64())
            };
            println!(
                "  {index}: {}{}",
                styled_toast(&toast.message, toast.kind, config.theme),
                style(remaining).dim()
            );
        }
    }
}

pub fn print_position(seconds: f64) {
    println!("{} {}", style("⏱").dim(), format_timestamp(seconds));
}

pub fn print_overlay(change: &OverlayChange) {
    match change {
        OverlayChange::Shown(caption) => println!(
            "{} {}",
            style("▌").cyan().bold(),
            style(caption.text.trim()).white().on_black()
        ),
        OverlayChange::Hidden => println!("{}", style("▌ (no caption)").dim()),
        OverlayChange::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default(), true, false).unwrap()
    }

    #[tokio::test]
    async fn test_commands_need_a_video_url() {
        let mut app = app();

        let err = app.execute(Command::List).await.err().unwrap();
        assert!(err.to_string().contains("Enter a video URL first"));

        app.execute(Command::Url("v.mp4".into())).await.unwrap();
        assert!(app.execute(Command::List).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_unknown_caption() {
        let mut app = app();
        app.execute(Command::Url("v.mp4".into())).await.unwrap();

        let err = app.execute(Command::Remove(42)).await.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CaptionerError>(),
            Some(CaptionerError::UnknownCaption { id: 42 })
        ));
    }

    #[tokio::test]
    async fn test_times_clamped_to_duration() {
        let mut app = app();
        app.execute(Command::Url("v.mp4".into())).await.unwrap();
        app.execute(Command::Duration(10.0)).await.unwrap();

        app.execute(Command::Start(15.0)).await.unwrap();
        app.execute(Command::End(-3.0)).await.unwrap();

        assert_eq!(app.session.form().start(), 10.0);
        assert_eq!(app.session.form().end(), 0.0);
    }

    #[tokio::test]
    async fn test_submit_and_replace_with_assume_yes() {
        let mut app = app();
        app.execute(Command::Url("v.mp4".into())).await.unwrap();
        for command in [
            Command::Text("first".into()),
            Command::Start(0.0),
            Command::End(2.0),
            Command::Submit,
            Command::Text("second".into()),
            Command::Start(0.0),
            Command::End(2.0),
            Command::Submit,
        ] {
            app.execute(command).await.unwrap();
        }

        let captions = app.session.captions();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "second");
    }
}
