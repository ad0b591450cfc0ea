use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task};

use crate::adapters::{DownloadArtifactWriter, ImageBitmapDecoder};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::ports::ArboardClipboardReader;
use crate::user_settings::UserSettings;

pub struct PasteApp {
    orchestrator: AppOrchestrator,
}

impl PasteApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let artifact_writer = Arc::new(DownloadArtifactWriter::initialize(
            settings.download_directory_override.clone(),
        ));

        let orchestrator = AppOrchestrator::build(
            Arc::new(ArboardClipboardReader::initialize()),
            Arc::new(ImageBitmapDecoder::initialize()),
            artifact_writer,
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

    pub fn get_window_theme(&self, _window_id: Id) -> iced::Theme {
        self.orchestrator.get_theme()
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
