//! Simulated playback collaborator: ticks at the configured progress
//! interval and feeds positions into the session like a real player would.

use std::time::Duration;

use anyhow::{Result, bail};
use captioner_core::{OverlayChange, format_timestamp};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use tokio::time::{MissedTickBehavior, interval};

use crate::app::App;

fn create_bar(total: Duration) -> ProgressBar {
    let pb = ProgressBar::new(total.as_millis() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb
}

/// Plays from the current position for `limit` seconds, or to the end of the
/// media when no limit is given. Ctrl-C pauses.
pub async fn simulate(app: &mut App, limit: Option<f64>) -> Result<()> {
    let start = app.session.playback().played_seconds();
    let duration = app.session.playback().duration();

    let stop_at = match (limit, duration) {
        (Some(limit), Some(duration)) => (start + limit).min(duration),
        (Some(limit), None) => start + limit,
        (None, Some(duration)) => duration,
        (None, None) => bail!("Unknown media duration; use 'duration <secs>' or 'play <secs>'"),
    };
    if stop_at <= start {
        bail!("Already at the end ({})", format_timestamp(start));
    }

    let step = app.player.progress_interval.max(Duration::from_millis(10));
    let pb = create_bar(Duration::from_secs_f64(stop_at - start));
    let mut ticker = interval(step);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    debug!("simulating playback {start}s -> {stop_at}s every {step:?}");
    app.session.play();
    let mut position = start;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                pb.println(format!("{}", style("interrupted").dim()));
                break;
            }
        }

        position = (position + step.as_secs_f64()).min(stop_at);
        let change = app.session.on_progress(position);
        if let OverlayChange::Shown(caption) = &change {
            pb.println(format!(
                "{} {} {}",
                style(format_timestamp(position)).dim(),
                style("▌").cyan().bold(),
                caption.text.trim()
            ));
        } else if change == OverlayChange::Hidden {
            pb.println(format!("{} {}", style(format_timestamp(position)).dim(), style("▌").dim()));
        }
        pb.set_position(((position - start) * 1000.0) as u64);
        pb.set_message(format_timestamp(position));
        app.after_command();

        if position >= stop_at {
            break;
        }
    }

    app.session.pause();
    pb.finish_with_message(format!(
        "{} {}",
        format_timestamp(position),
        style("paused").dim()
    ));
    Ok(())
}
