use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task};

use crate::adapters::{DialogUserNotifier, RoboflowDetectionService};
use crate::core::interfaces::adapters::UserNotifier;
use crate::core::interfaces::ports::CaptureSource;
use crate::core::models::{CaptureSourceKind, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::CaptureAdapter;
use crate::global_constants::{APPLICATION_TITLE, LOG_TAG_APP};
use crate::ports::{GalleryCaptureSource, XcapCaptureSource};

pub struct LeafDetectionApp {
    orchestrator: AppOrchestrator,
}

impl LeafDetectionApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let notifier: Arc<dyn UserNotifier> = Arc::new(DialogUserNotifier::new());
        let capture_source = select_capture_source(settings.capture_source, Arc::clone(&notifier));
        log::info!(
            "{} Using {} capture source, endpoint {}",
            LOG_TAG_APP,
            settings.capture_source,
            settings.endpoint_url
        );

        let orchestrator = AppOrchestrator::build(
            Arc::new(CaptureAdapter::build(capture_source, notifier)),
            Arc::new(RoboflowDetectionService::new(settings.endpoint_url.clone())),
            settings,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, _window_id: Id) -> String {
        APPLICATION_TITLE.to_string()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })
    }
}

fn select_capture_source(
    kind: CaptureSourceKind,
    notifier: Arc<dyn UserNotifier>,
) -> Arc<dyn CaptureSource> {
    match kind {
        CaptureSourceKind::Screen => Arc::new(XcapCaptureSource::initialize(notifier)),
        CaptureSourceKind::Gallery => Arc::new(GalleryCaptureSource::initialize()),
    }
}
