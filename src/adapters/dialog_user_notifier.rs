use async_trait::async_trait;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::core::interfaces::adapters::UserNotifier;
use crate::global_constants::LOG_TAG_DIALOG;

pub struct DialogUserNotifier;

impl DialogUserNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserNotifier for DialogUserNotifier {
    async fn alert(&self, title: &str, message: &str) {
        log::info!("{} Showing alert: {}", LOG_TAG_DIALOG, message);

        AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        log::debug!("{} Asking for confirmation: {}", LOG_TAG_DIALOG, message);

        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        matches!(answer, MessageDialogResult::Yes)
    }
}
