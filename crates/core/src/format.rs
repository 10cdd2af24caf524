use crate::types::Caption;

pub const EMPTY_LIST_MESSAGE: &str = "No caption Found!";

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Shortest decimal form with an `s` suffix: `2s`, `2.5s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{}s", seconds)
}

pub fn format_caption_row(caption: &Caption) -> String {
    format!(
        "[{}] {}  ({} - {})",
        caption.id,
        caption.text.trim(),
        format_seconds(caption.start),
        format_seconds(caption.end)
    )
}
