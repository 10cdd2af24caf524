use anyhow::{Context, Result, anyhow, bail};
use captioner_core::{CaptionId, CaptionerError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Url(String),
    Duration(f64),
    Text(String),
    Start(f64),
    End(f64),
    Form,
    Submit,
    List,
    Remove(CaptionId),
    Seek(f64),
    Play(Option<f64>),
    Pause,
    Toasts,
    Dismiss(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
url <URL>          set the video source
duration <secs>    report the media duration (what the player sends on load)
text <words...>    set the caption text
start <secs>       set the caption start time
end <secs>         set the caption end time
form               show the pending caption and any error
submit             add the caption (asks before replacing an identical interval)
list               list captions
remove <id>        remove a caption
seek <secs>        report a playback position
play [secs]        simulate playback for a while (default: to the end)
pause              stop simulated playback
toasts             show visible notifications
dismiss <n>        close notification n
help               this text
quit               leave";

pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "url" => Command::Url(required(rest, "url")?.to_string()),
        "duration" => Command::Duration(parse_seconds(required(rest, "duration")?)?),
        // Text is taken verbatim; blank text is the controller's call to reject.
        "text" => Command::Text(rest.to_string()),
        "start" => Command::Start(parse_seconds(required(rest, "start")?)?),
        "end" => Command::End(parse_seconds(required(rest, "end")?)?),
        "form" => Command::Form,
        "submit" | "add" => Command::Submit,
        "list" | "ls" => Command::List,
        "remove" | "rm" => {
            let raw = required(rest, "remove")?;
            Command::Remove(
                raw.parse()
                    .with_context(|| format!("'{raw}' is not a caption id"))?,
            )
        }
        "seek" => Command::Seek(parse_seconds(required(rest, "seek")?)?),
        "play" => Command::Play(if rest.is_empty() {
            None
        } else {
            Some(parse_seconds(rest)?)
        }),
        "pause" => Command::Pause,
        "toasts" => Command::Toasts,
        "dismiss" => {
            let raw = required(rest, "dismiss")?;
            Command::Dismiss(
                raw.parse()
                    .with_context(|| format!("'{raw}' is not a notification number"))?,
            )
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(anyhow!("Unknown command '{other}'. Type 'help'.")),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, command: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("'{command}' needs an argument");
    }
    Ok(rest)
}

/// Accepts plain seconds (`12.5`) or `MM:SS(.fff)`.
pub fn parse_seconds(raw: &str) -> Result<f64, CaptionerError> {
    let invalid = || CaptionerError::InvalidTime {
        value: raw.to_string(),
    };

    let seconds = match raw.split_once(':') {
        Some((mins, secs)) => {
            let mins: u32 = mins.trim().parse().map_err(|_| invalid())?;
            let secs: f64 = secs.trim().parse().map_err(|_| invalid())?;
            if !(0.0..60.0).contains(&secs) {
                return Err(invalid());
            }
            f64::from(mins) * 60.0 + secs
        }
        None => raw.trim().parse().map_err(|_| invalid())?,
    };

    if !seconds.is_finite() {
        return Err(invalid());
    }
    Ok(seconds)
}
