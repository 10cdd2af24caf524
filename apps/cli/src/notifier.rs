use captioner_core::{
    Notifier, NotifierConfig, ToastNotifier,
    config::{ToastKind, ToastTheme},
};
use console::style;

/// Prints each toast as it arrives and keeps it around for `toasts`.
pub struct ConsoleNotifier {
    toasts: ToastNotifier,
}

impl ConsoleNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            toasts: ToastNotifier::new(config),
        }
    }

    pub fn toasts(&self) -> &ToastNotifier {
        &self.toasts
    }
}

pub fn styled_toast(message: &str, kind: ToastKind, theme: ToastTheme) -> String {
    let (icon, text) = match kind {
        ToastKind::Success => (style("✓").green(), style(message).green()),
        ToastKind::Info => (style("i").cyan(), style(message).cyan()),
        ToastKind::Warning => (style("!").yellow(), style(message).yellow()),
        ToastKind::Error => (style("✗").red(), style(message).red()),
    };
    match theme {
        ToastTheme::Light => format!("{} {}", icon.bold(), text),
        ToastTheme::Dark => format!("{} {}", icon.bold().on_black(), text.on_black()),
        ToastTheme::Colored => format!("{} {}", icon.bold(), text.bold()),
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        let config = self.toasts.config();
        println!("{}", styled_toast(message, config.kind, config.theme));
        self.toasts.notify(message);
    }
}
