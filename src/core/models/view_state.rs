use crate::core::models::{DetectionResult, ImageReference};
use crate::global_constants::LOG_TAG_VIEW_STATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptToken(u64);

impl AttemptToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Outcome of the latest upload attempt. Result and error can never coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptStatus {
    Idle,
    Uploading(AttemptToken),
    Resolved(DetectionResult),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Capturing,
    Uploading,
    Resolved,
    Failed,
}

/// State behind the detection screen.
///
/// Every change goes through one of the transition methods below. A new
/// accepted capture issues a fresh [`AttemptToken`]; uploads resolving with
/// an older token are discarded, so the most recent capture always owns the
/// result and error cells.
#[derive(Debug, Clone)]
pub struct ViewState {
    image: Option<ImageReference>,
    status: AttemptStatus,
    capturing: bool,
    last_issued_token: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            image: None,
            status: AttemptStatus::Idle,
            capturing: false,
            last_issued_token: 0,
        }
    }

    pub fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.status {
            AttemptStatus::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AttemptStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn current_attempt(&self) -> Option<AttemptToken> {
        match self.status {
            AttemptStatus::Uploading(token) => Some(token),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.capturing {
            return Phase::Capturing;
        }

        match self.status {
            AttemptStatus::Idle => Phase::Idle,
            AttemptStatus::Uploading(_) => Phase::Uploading,
            AttemptStatus::Resolved(_) => Phase::Resolved,
            AttemptStatus::Failed(_) => Phase::Failed,
        }
    }

    /// Returns false when a capture UI is already open.
    pub fn begin_capture(&mut self) -> bool {
        if self.capturing {
            log::warn!(
                "{} capture already in progress, ignoring request",
                LOG_TAG_VIEW_STATE
            );
            return false;
        }

        self.capturing = true;
        true
    }

    pub fn cancel_capture(&mut self) {
        log::debug!("{} capture cancelled, cells unchanged", LOG_TAG_VIEW_STATE);
        self.capturing = false;
    }

    pub fn accept_capture(&mut self, image: ImageReference) -> AttemptToken {
        self.last_issued_token += 1;
        let token = AttemptToken(self.last_issued_token);

        if let Some(previous) = self.current_attempt() {
            log::info!(
                "{} attempt {} superseded by attempt {}",
                LOG_TAG_VIEW_STATE,
                previous.value(),
                token.value()
            );
        }

        self.capturing = false;
        self.image = Some(image);
        self.status = AttemptStatus::Uploading(token);
        token
    }

    /// Applies an upload outcome. Returns false if `token` is no longer current.
    pub fn resolve_upload(
        &mut self,
        token: AttemptToken,
        outcome: Result<DetectionResult, String>,
    ) -> bool {
        if self.current_attempt() != Some(token) {
            log::warn!(
                "{} discarding stale outcome for attempt {}",
                LOG_TAG_VIEW_STATE,
                token.value()
            );
            return false;
        }

        self.status = match outcome {
            Ok(result) => AttemptStatus::Resolved(result),
            Err(message) => AttemptStatus::Failed(message),
        };
        true
    }
}
