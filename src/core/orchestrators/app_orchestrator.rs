use std::sync::Arc;
use std::time::Duration;

use iced::window::{self, Id};
use iced::{Element, Size, Task};

use crate::core::interfaces::adapters::DetectionService;
use crate::core::models::{
    AttemptToken, CaptureCancelled, CaptureSourceKind, DetectionResult, ImageReference,
    UserSettings, ViewState,
};
use crate::core::orchestrators::CaptureAdapter;
use crate::global_constants::{
    LOG_TAG_ORCHESTRATOR, LOG_TAG_UPLOAD, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::presentation::{DetectionView, DetectionViewMessage, ScreenModel};

const MINIMIZE_SETTLE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    PermissionChecked(Result<(), CaptureCancelled>),
    LaunchCapture,
    CaptureFinished(Result<ImageReference, CaptureCancelled>),
    UploadFinished(AttemptToken, Result<DetectionResult, String>),
    DetectionViewMessage(DetectionViewMessage),
    WindowClosed(Id),
}

pub struct AppOrchestrator {
    capture_adapter: Arc<CaptureAdapter>,
    detection_service: Arc<dyn DetectionService>,
    settings: UserSettings,
    view_state: ViewState,
    main_window_id: Option<Id>,
    upload_handle: Option<iced::task::Handle>,
}

impl AppOrchestrator {
    pub fn build(
        capture_adapter: Arc<CaptureAdapter>,
        detection_service: Arc<dyn DetectionService>,
        settings: UserSettings,
    ) -> Self {
        Self {
            capture_adapter,
            detection_service,
            settings,
            view_state: ViewState::new(),
            main_window_id: None,
            upload_handle: None,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::DetectionViewMessage(DetectionViewMessage::ScanPressed) => {
                self.handle_scan_requested()
            }
            OrchestratorMessage::PermissionChecked(outcome) => {
                self.handle_permission_checked(outcome)
            }
            OrchestratorMessage::LaunchCapture => self.handle_launch_capture(),
            OrchestratorMessage::CaptureFinished(outcome) => self.handle_capture_finished(outcome),
            OrchestratorMessage::UploadFinished(token, outcome) => {
                self.handle_upload_finished(token, outcome)
            }
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, _window_id: Id) -> Element<'_, OrchestratorMessage> {
        DetectionView::render_ui(
            ScreenModel::project(self.view_state()),
            &self.settings.theme_mode,
        )
        .map(OrchestratorMessage::DetectionViewMessage)
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("{} Main window already open", LOG_TAG_ORCHESTRATOR);
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("{} Main window created with ID: {:?}", LOG_TAG_ORCHESTRATOR, id);
        task.discard()
    }

    fn hides_window_during_capture(&self) -> bool {
        self.settings.capture_source == CaptureSourceKind::Screen
    }

    fn handle_scan_requested(&mut self) -> Task<OrchestratorMessage> {
        if !self.view_state.begin_capture() {
            return Task::none();
        }

        Task::future(run_permission_check(Arc::clone(&self.capture_adapter)))
    }

    fn handle_permission_checked(
        &mut self,
        outcome: Result<(), CaptureCancelled>,
    ) -> Task<OrchestratorMessage> {
        if let Err(reason) = outcome {
            log::info!("{} Capture not started: {}", LOG_TAG_ORCHESTRATOR, reason);
            self.view_state.cancel_capture();
            return Task::none();
        }

        match self.main_window_id {
            Some(id) if self.hides_window_during_capture() => {
                log::debug!(
                    "{} Minimizing main window before screen capture",
                    LOG_TAG_ORCHESTRATOR
                );
                Task::batch(vec![
                    window::minimize(id, true),
                    Task::future(async {
                        tokio::time::sleep(MINIMIZE_SETTLE_DELAY).await;
                        OrchestratorMessage::LaunchCapture
                    }),
                ])
            }
            _ => Task::done(OrchestratorMessage::LaunchCapture),
        }
    }

    fn handle_launch_capture(&mut self) -> Task<OrchestratorMessage> {
        Task::future(run_capture(Arc::clone(&self.capture_adapter)))
    }

    fn handle_capture_finished(
        &mut self,
        outcome: Result<ImageReference, CaptureCancelled>,
    ) -> Task<OrchestratorMessage> {
        let restore_window = self.restore_main_window();

        match outcome {
            Ok(image) => {
                let previous_image = self.view_state.image().cloned();
                let token = self.view_state.accept_capture(image.clone());
                self.abort_superseded_upload();

                if let Some(previous_image) = previous_image.filter(|previous| *previous != image) {
                    discard_capture_file(&previous_image);
                }

                log::info!(
                    "{} Starting upload attempt {} for {}",
                    LOG_TAG_ORCHESTRATOR,
                    token.value(),
                    image.uri
                );

                let (upload_task, handle) = Task::future(run_upload(
                    Arc::clone(&self.detection_service),
                    image,
                    self.settings.api_key.clone(),
                    token,
                ))
                .abortable();
                self.upload_handle = Some(handle);

                Task::batch(vec![restore_window, upload_task])
            }
            Err(reason) => {
                log::info!("{} Capture ended without image: {}", LOG_TAG_ORCHESTRATOR, reason);
                self.view_state.cancel_capture();
                restore_window
            }
        }
    }

    fn handle_upload_finished(
        &mut self,
        token: AttemptToken,
        outcome: Result<DetectionResult, String>,
    ) -> Task<OrchestratorMessage> {
        if self.view_state.resolve_upload(token, outcome) {
            self.upload_handle = None;
        }
        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        if self.main_window_id == Some(id) {
            log::info!("{} Main window closed, exiting", LOG_TAG_ORCHESTRATOR);
            self.main_window_id = None;
            self.abort_superseded_upload();
            if let Some(image) = self.view_state.image() {
                discard_capture_file(image);
            }
            return iced::exit();
        }
        Task::none()
    }

    fn abort_superseded_upload(&mut self) {
        if let Some(handle) = self.upload_handle.take() {
            log::debug!("{} Aborting previous upload", LOG_TAG_ORCHESTRATOR);
            handle.abort();
        }
    }

    fn restore_main_window(&self) -> Task<OrchestratorMessage> {
        match self.main_window_id {
            Some(id) if self.hides_window_during_capture() => {
                window::minimize(id, false).chain(window::gain_focus(id))
            }
            _ => Task::none(),
        }
    }
}

/// Removes a capture written to the temp directory once nothing displays it.
fn discard_capture_file(image: &ImageReference) {
    let removal = image
        .local_path()
        .and_then(|path| std::fs::remove_file(&path).map_err(anyhow::Error::from));

    match removal {
        Ok(()) => log::debug!("{} Removed capture file {}", LOG_TAG_ORCHESTRATOR, image.uri),
        Err(e) => log::warn!(
            "{} Failed to remove capture file {}: {}",
            LOG_TAG_ORCHESTRATOR,
            image.uri,
            e
        ),
    }
}

pub async fn run_permission_check(capture_adapter: Arc<CaptureAdapter>) -> OrchestratorMessage {
    OrchestratorMessage::PermissionChecked(capture_adapter.ensure_permission().await)
}

pub async fn run_capture(capture_adapter: Arc<CaptureAdapter>) -> OrchestratorMessage {
    OrchestratorMessage::CaptureFinished(capture_adapter.launch_capture().await)
}

pub async fn run_upload(
    detection_service: Arc<dyn DetectionService>,
    image: ImageReference,
    api_key: String,
    token: AttemptToken,
) -> OrchestratorMessage {
    let outcome = detection_service
        .submit(&image, &api_key)
        .await
        .map_err(|e| {
            log::error!("{} Upload attempt {} failed: {}", LOG_TAG_UPLOAD, token.value(), e);
            e.to_string()
        });

    OrchestratorMessage::UploadFinished(token, outcome)
}
