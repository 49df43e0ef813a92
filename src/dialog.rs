use crate::event::AppStatus;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Synchronous user prompts. Each call blocks until the user answers.
pub trait Prompt {
    fn confirm(&self, title: &str, description: &str) -> bool;

    fn notify(&self, status: AppStatus, title: &str, description: &str);
}

/// Native message boxes.
pub struct DialogPrompt;

impl Prompt for DialogPrompt {
    fn confirm(&self, title: &str, description: &str) -> bool {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::YesNo)
            .show()
    }

    fn notify(&self, status: AppStatus, title: &str, description: &str) {
        let level = match status {
            AppStatus::Info => MessageLevel::Info,
            AppStatus::Warning => MessageLevel::Warning,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
