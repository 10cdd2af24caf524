use captioner_core::Confirm;
use dialoguer::Confirm as Prompt;
use log::{info, warn};

pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            info!("auto-confirmed: {message}");
            return true;
        }

        match Prompt::new().with_prompt(message).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                warn!("no answer to replace prompt, keeping existing caption: {e}");
                false
            }
        }
    }
}
