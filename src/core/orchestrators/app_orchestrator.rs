use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, row, text, text_editor, Space};
use iced::window::{self, Id};
use iced::{Alignment, Background, Color, Element, Length, Size, Task};

use crate::app_theme;
use crate::core::interfaces::adapters::{ArtifactWriter, BitmapDecoder};
use crate::core::interfaces::ports::ClipboardReader;
use crate::core::models::{ClipboardContent, ClipboardPayload, DecodedBitmap, ExportArtifact, ImageContent};
use crate::core::rasterizer::TextRasterizer;
use crate::global_constants::{
    APPLICATION_TITLE, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH, STATUS_DECODING, STATUS_EXPORTING,
    STATUS_NOTHING_PASTED, STATUS_READY, SUCCESS_BANNER_DURATION_MS,
};
use crate::presentation::{paste_view, preview_view, PasteViewMessage};
use crate::user_settings::UserSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Paste,
    Preview,
}

pub struct AppOrchestrator {
    clipboard_reader: Arc<dyn ClipboardReader>,
    bitmap_decoder: Arc<dyn BitmapDecoder>,
    artifact_writer: Arc<dyn ArtifactWriter>,
    main_window_id: Option<Id>,
    content: ClipboardContent,
    active_tab: ActiveTab,
    draft_text: text_editor::Content,
    // Bumped on every classified paste and on reset. An in-flight decode
    // carries the value it started with; a mismatch on completion means the
    // user pasted something else in the meantime and the result is stale.
    paste_generation: u64,
    show_success_banner: bool,
    banner_generation: u64,
    error_notice: Option<String>,
    status: String,
    settings: UserSettings,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    PasteFromClipboard,
    ClipboardInspected(Result<ClipboardPayload, String>),
    BitmapDecoded {
        generation: u64,
        result: Result<(Vec<u8>, DecodedBitmap), String>,
    },
    PasteViewEvent(PasteViewMessage),
    TabSelected(ActiveTab),
    ExportRequested,
    ExportFinished(Result<PathBuf, String>),
    DismissSuccessBanner { generation: u64 },
    DismissErrorNotice,
    ResetSession,
    WindowClosed(Id),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::PasteFromClipboard => write!(f, "PasteFromClipboard"),
            OrchestratorMessage::ClipboardInspected(result) => match result {
                Ok(payload) => write!(f, "ClipboardInspected({:?})", payload),
                Err(e) => write!(f, "ClipboardInspected(Err({}))", e),
            },
            OrchestratorMessage::BitmapDecoded { generation, result } => write!(
                f,
                "BitmapDecoded(generation: {}, ok: {})",
                generation,
                result.is_ok()
            ),
            OrchestratorMessage::PasteViewEvent(_) => write!(f, "PasteViewEvent"),
            OrchestratorMessage::TabSelected(tab) => write!(f, "TabSelected({:?})", tab),
            OrchestratorMessage::ExportRequested => write!(f, "ExportRequested"),
            OrchestratorMessage::ExportFinished(result) => match result {
                Ok(path) => write!(f, "ExportFinished(Ok({}))", path.display()),
                Err(e) => write!(f, "ExportFinished(Err({}))", e),
            },
            OrchestratorMessage::DismissSuccessBanner { generation } => {
                write!(f, "DismissSuccessBanner(generation: {})", generation)
            }
            OrchestratorMessage::DismissErrorNotice => write!(f, "DismissErrorNotice"),
            OrchestratorMessage::ResetSession => write!(f, "ResetSession"),
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        clipboard_reader: Arc<dyn ClipboardReader>,
        bitmap_decoder: Arc<dyn BitmapDecoder>,
        artifact_writer: Arc<dyn ArtifactWriter>,
        settings: UserSettings,
    ) -> Self {
        Self {
            clipboard_reader,
            bitmap_decoder,
            artifact_writer,
            main_window_id: None,
            content: ClipboardContent::Empty,
            active_tab: ActiveTab::Paste,
            draft_text: text_editor::Content::new(),
            paste_generation: 0,
            show_success_banner: false,
            banner_generation: 0,
            error_notice: None,
            status: STATUS_READY.to_string(),
            settings,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::PasteFromClipboard => self.handle_paste_from_clipboard(),
            OrchestratorMessage::ClipboardInspected(result) => {
                self.handle_clipboard_inspected(result)
            }
            OrchestratorMessage::BitmapDecoded { generation, result } => {
                self.handle_bitmap_decoded(generation, result)
            }
            OrchestratorMessage::PasteViewEvent(view_msg) => self.handle_paste_view_event(view_msg),
            OrchestratorMessage::TabSelected(tab) => {
                self.active_tab = tab;
                Task::none()
            }
            OrchestratorMessage::ExportRequested => self.handle_export_requested(),
            OrchestratorMessage::ExportFinished(result) => self.handle_export_finished(result),
            OrchestratorMessage::DismissSuccessBanner { generation } => {
                if generation == self.banner_generation {
                    self.show_success_banner = false;
                } else {
                    log::debug!(
                        "[ORCHESTRATOR] Ignoring stale banner dismissal (generation {}, current {})",
                        generation,
                        self.banner_generation
                    );
                }
                Task::none()
            }
            OrchestratorMessage::DismissErrorNotice => {
                self.error_notice = None;
                Task::none()
            }
            OrchestratorMessage::ResetSession => self.handle_reset_session(),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) == self.main_window_id {
            self.render_main_window()
        } else {
            text("Loading...").into()
        }
    }

    pub fn get_theme(&self) -> iced::Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists and is open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_paste_from_clipboard(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Reading clipboard");
        self.error_notice = None;

        let clipboard_reader = Arc::clone(&self.clipboard_reader);

        Task::future(async move {
            let result = clipboard_reader
                .read_clipboard_payload()
                .map_err(|e| e.to_string());
            OrchestratorMessage::ClipboardInspected(result)
        })
    }

    fn handle_clipboard_inspected(
        &mut self,
        result: Result<ClipboardPayload, String>,
    ) -> Task<OrchestratorMessage> {
        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("[ORCHESTRATOR] Clipboard read failed: {}", e);
                self.status = format!("Clipboard error: {}", e);
                return Task::none();
            }
        };

        match payload {
            ClipboardPayload::Empty => {
                log::info!("[ORCHESTRATOR] Clipboard holds nothing usable");
                self.status = STATUS_NOTHING_PASTED.to_string();
                Task::none()
            }
            ClipboardPayload::Text(pasted_text) => {
                self.paste_generation += 1;
                self.draft_text = text_editor::Content::with_text(&pasted_text);
                self.status = format!("Pasted {} characters of text", pasted_text.chars().count());
                self.content = ClipboardContent::Text(pasted_text);
                self.active_tab = ActiveTab::Preview;
                Task::none()
            }
            ClipboardPayload::Image { encoded_bytes } => {
                self.paste_generation += 1;
                let generation = self.paste_generation;
                self.status = STATUS_DECODING.to_string();

                let bitmap_decoder = Arc::clone(&self.bitmap_decoder);

                Task::future(async move {
                    let result = bitmap_decoder
                        .decode_bitmap_bytes(encoded_bytes.clone())
                        .await
                        .map(|decoded| (encoded_bytes, decoded))
                        .map_err(|e| e.to_string());
                    OrchestratorMessage::BitmapDecoded { generation, result }
                })
            }
        }
    }

    fn handle_bitmap_decoded(
        &mut self,
        generation: u64,
        result: Result<(Vec<u8>, DecodedBitmap), String>,
    ) -> Task<OrchestratorMessage> {
        if generation != self.paste_generation {
            log::info!(
                "[ORCHESTRATOR] Dropping stale decode result (generation {}, current {})",
                generation,
                self.paste_generation
            );
            return Task::none();
        }

        match result {
            Ok((encoded_bytes, decoded)) => {
                log::info!(
                    "[ORCHESTRATOR] Image decoded: {}x{}",
                    decoded.width,
                    decoded.height
                );
                self.status = format!("Pasted image ({}x{})", decoded.width, decoded.height);
                self.content =
                    ClipboardContent::Image(ImageContent::build_from_decoded(encoded_bytes, decoded));
                self.active_tab = ActiveTab::Preview;
            }
            Err(e) => {
                // The previous session content stays untouched on a bad decode.
                log::error!("[ORCHESTRATOR] Image decode failed: {}", e);
                self.status = format!("Could not decode pasted image: {}", e);
            }
        }
        Task::none()
    }

    fn handle_paste_view_event(&mut self, view_msg: PasteViewMessage) -> Task<OrchestratorMessage> {
        match view_msg {
            PasteViewMessage::PasteRequested => self.handle_paste_from_clipboard(),
            PasteViewMessage::EditorEdited(action) => {
                let is_edit = action.is_edit();
                self.draft_text.perform(action);

                if is_edit {
                    let edited_text = self.draft_text.text();
                    // Content::text always carries a synthetic trailing newline.
                    let edited_text = edited_text
                        .strip_suffix('\n')
                        .unwrap_or(&edited_text)
                        .to_string();

                    self.content = if edited_text.is_empty() {
                        ClipboardContent::Empty
                    } else {
                        ClipboardContent::Text(edited_text)
                    };
                }
                Task::none()
            }
        }
    }

    fn handle_export_requested(&mut self) -> Task<OrchestratorMessage> {
        self.error_notice = None;

        match self.content.clone() {
            ClipboardContent::Empty => {
                log::warn!("[ORCHESTRATOR] Export requested with no content");
                self.error_notice =
                    Some(crate::core::errors::ExportError::EmptyContent.to_string());
                Task::none()
            }
            ClipboardContent::Image(image_content) => {
                log::info!(
                    "[ORCHESTRATOR] Exporting pasted image ({} bytes, unmodified)",
                    image_content.encoded_bytes.len()
                );
                self.status = STATUS_EXPORTING.to_string();

                let artifact_writer = Arc::clone(&self.artifact_writer);

                Task::future(async move {
                    let result = tokio::task::spawn_blocking(move || {
                        let artifact = ExportArtifact::build_png(image_content.encoded_bytes);
                        artifact_writer
                            .write_artifact(&artifact)
                            .map_err(|e| e.to_string())
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Export task failed: {}", e)));
                    OrchestratorMessage::ExportFinished(result)
                })
            }
            ClipboardContent::Text(pasted_text) => {
                log::info!(
                    "[ORCHESTRATOR] Rasterizing {} characters of text",
                    pasted_text.chars().count()
                );
                self.status = STATUS_EXPORTING.to_string();

                let artifact_writer = Arc::clone(&self.artifact_writer);

                Task::future(async move {
                    let result = tokio::task::spawn_blocking(move || {
                        let mut rasterizer = TextRasterizer::initialize();
                        let artifact = rasterizer
                            .rasterize_text(&pasted_text)
                            .map_err(|e| e.to_string())?;
                        artifact_writer
                            .write_artifact(&artifact)
                            .map_err(|e| e.to_string())
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Export task failed: {}", e)));
                    OrchestratorMessage::ExportFinished(result)
                })
            }
        }
    }

    fn handle_export_finished(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(path) => {
                log::info!("[ORCHESTRATOR] Export complete: {}", path.display());
                self.status = format!("Saved to {}", path.display());
                self.show_success_banner = true;
                self.banner_generation += 1;
                let generation = self.banner_generation;

                Task::future(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(
                        SUCCESS_BANNER_DURATION_MS,
                    ))
                    .await;
                    OrchestratorMessage::DismissSuccessBanner { generation }
                })
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Export failed: {}", e);
                self.status = STATUS_READY.to_string();
                self.error_notice = Some(e);
                Task::none()
            }
        }
    }

    fn handle_reset_session(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Resetting session");
        self.content = ClipboardContent::Empty;
        self.draft_text = text_editor::Content::new();
        self.active_tab = ActiveTab::Paste;
        self.show_success_banner = false;
        self.error_notice = None;
        // Invalidate any decode still in flight.
        self.paste_generation += 1;
        self.status = STATUS_READY.to_string();
        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            return iced::exit();
        }
        Task::none()
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let theme = self.get_theme();

        let logo_icon = text("📋").size(40);

        let title = text(APPLICATION_TITLE).size(28);

        let subtitle = text("Turn clipboard text or images into a PNG")
            .size(14)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            });

        let header_section = row![logo_icon, column![title, subtitle].spacing(2)]
            .spacing(16)
            .align_y(Alignment::Center);

        let tab_strip = row![
            button(text("Paste").size(15))
                .padding([8, 24])
                .style(app_theme::tab_button_style(
                    self.active_tab == ActiveTab::Paste
                ))
                .on_press(OrchestratorMessage::TabSelected(ActiveTab::Paste)),
            button(text("Preview").size(15))
                .padding([8, 24])
                .style(app_theme::tab_button_style(
                    self.active_tab == ActiveTab::Preview
                ))
                .on_press(OrchestratorMessage::TabSelected(ActiveTab::Preview)),
        ]
        .spacing(8);

        let tab_content: Element<'_, OrchestratorMessage> = match self.active_tab {
            ActiveTab::Paste => paste_view::render_ui(&self.draft_text)
                .map(OrchestratorMessage::PasteViewEvent),
            ActiveTab::Preview => preview_view::render_ui(&self.content),
        };

        let tab_panel = container(tab_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                border: iced::Border {
                    color: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            });

        let footer_section = row![
            button(text("Clear").size(15))
                .padding([10, 24])
                .style(|theme, status| app_theme::danger_button_style(theme, status))
                .on_press(OrchestratorMessage::ResetSession),
            container(text(&self.status).size(13).style(
                |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                }
            ))
            .width(Length::Fill)
            .center_x(Length::Fill),
            button(text("Download PNG").size(15))
                .padding([10, 24])
                .style(|theme, status| app_theme::primary_button_style(theme, status))
                .on_press(OrchestratorMessage::ExportRequested),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut content = column![header_section, tab_strip]
            .spacing(16)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.show_success_banner {
            content = content.push(
                container(text("✓ PNG downloaded successfully!").size(14))
                    .padding([8, 16])
                    .width(Length::Fill)
                    .style(app_theme::success_banner_style),
            );
        }

        if let Some(notice) = &self.error_notice {
            content = content.push(
                container(
                    row![
                        text(notice.as_str()).size(14).width(Length::Fill),
                        button(text("✕").size(14))
                            .padding([2, 8])
                            .style(|theme, status| app_theme::danger_button_style(theme, status))
                            .on_press(OrchestratorMessage::DismissErrorNotice),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                )
                .padding([8, 16])
                .width(Length::Fill)
                .style(app_theme::error_notice_style),
            );
        }

        content = content
            .push(tab_panel)
            .push(Space::new().height(Length::Fixed(4.0)))
            .push(footer_section);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ExportArtifact;
    use crate::global_constants::STATUS_EMPTY_EXPORT;

    struct MockClipboardReader {
        payload: ClipboardPayload,
    }
    impl ClipboardReader for MockClipboardReader {
        fn read_clipboard_payload(&self) -> anyhow::Result<ClipboardPayload> {
            Ok(self.payload.clone())
        }
    }

    struct MockBitmapDecoder;
    #[async_trait::async_trait]
    impl BitmapDecoder for MockBitmapDecoder {
        async fn decode_bitmap_bytes(&self, _encoded_bytes: Vec<u8>) -> anyhow::Result<DecodedBitmap> {
            Ok(test_bitmap())
        }
    }

    struct MockArtifactWriter;
    impl ArtifactWriter for MockArtifactWriter {
        fn write_artifact(&self, artifact: &ExportArtifact) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("/tmp").join(&artifact.file_name))
        }
    }

    fn test_bitmap() -> DecodedBitmap {
        DecodedBitmap {
            width: 1,
            height: 1,
            raw_rgba_data: vec![255, 0, 0, 255],
        }
    }

    fn create_test_orchestrator() -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockClipboardReader {
                payload: ClipboardPayload::Empty,
            }),
            Arc::new(MockBitmapDecoder),
            Arc::new(MockArtifactWriter),
            UserSettings::default(),
        )
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator();

        assert!(orchestrator.main_window_id.is_none());
        assert!(orchestrator.content.is_empty());
        assert_eq!(orchestrator.active_tab, ActiveTab::Paste);
        assert_eq!(orchestrator.paste_generation, 0);
        assert!(!orchestrator.show_success_banner);
        assert!(orchestrator.error_notice.is_none());
    }

    #[test]
    fn test_pasted_text_replaces_content_and_switches_to_preview() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator
            .handle_clipboard_inspected(Ok(ClipboardPayload::Text("hello".to_string())));

        assert!(matches!(&orchestrator.content, ClipboardContent::Text(t) if t == "hello"));
        assert_eq!(orchestrator.active_tab, ActiveTab::Preview);
        assert_eq!(orchestrator.paste_generation, 1);
    }

    #[test]
    fn test_empty_clipboard_leaves_content_untouched() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator
            .handle_clipboard_inspected(Ok(ClipboardPayload::Text("kept".to_string())));

        let _ = orchestrator.handle_clipboard_inspected(Ok(ClipboardPayload::Empty));

        assert!(matches!(&orchestrator.content, ClipboardContent::Text(t) if t == "kept"));
        assert_eq!(orchestrator.status, STATUS_NOTHING_PASTED);
        assert_eq!(orchestrator.paste_generation, 1);
    }

    #[test]
    fn test_pasted_image_bumps_generation_and_reports_decoding() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.handle_clipboard_inspected(Ok(ClipboardPayload::Image {
            encoded_bytes: vec![1, 2, 3],
        }));

        assert_eq!(orchestrator.paste_generation, 1);
        assert_eq!(orchestrator.status, STATUS_DECODING);
    }

    #[test]
    fn test_stale_decode_result_is_dropped() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator
            .handle_clipboard_inspected(Ok(ClipboardPayload::Text("newer paste".to_string())));

        // A decode that started before "newer paste" finishes now.
        let _ = orchestrator.handle_bitmap_decoded(0, Ok((vec![9, 9], test_bitmap())));

        assert!(matches!(&orchestrator.content, ClipboardContent::Text(t) if t == "newer paste"));
    }

    #[test]
    fn test_current_decode_result_replaces_content_with_image() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.handle_clipboard_inspected(Ok(ClipboardPayload::Image {
            encoded_bytes: vec![7, 7, 7],
        }));

        let _ = orchestrator
            .handle_bitmap_decoded(orchestrator.paste_generation, Ok((vec![7, 7, 7], test_bitmap())));

        assert!(matches!(&orchestrator.content, ClipboardContent::Image(_)));
        assert_eq!(orchestrator.active_tab, ActiveTab::Preview);
    }

    #[test]
    fn test_failed_decode_keeps_previous_content() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator
            .handle_clipboard_inspected(Ok(ClipboardPayload::Text("still here".to_string())));
        let _ = orchestrator.handle_clipboard_inspected(Ok(ClipboardPayload::Image {
            encoded_bytes: vec![0xFF],
        }));

        let _ = orchestrator
            .handle_bitmap_decoded(orchestrator.paste_generation, Err("bad bytes".to_string()));

        assert!(matches!(&orchestrator.content, ClipboardContent::Text(t) if t == "still here"));
        assert!(orchestrator.status.contains("bad bytes"));
    }

    #[test]
    fn test_export_with_empty_content_raises_blocking_notice() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.handle_export_requested();

        assert_eq!(orchestrator.error_notice.as_deref(), Some(STATUS_EMPTY_EXPORT));
    }

    #[test]
    fn test_successful_export_shows_banner_and_bumps_generation() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.handle_export_finished(Ok(PathBuf::from("/tmp/out.png")));

        assert!(orchestrator.show_success_banner);
        assert_eq!(orchestrator.banner_generation, 1);
        assert!(orchestrator.status.contains("/tmp/out.png"));
    }

    #[test]
    fn test_stale_banner_dismissal_is_ignored() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.handle_export_finished(Ok(PathBuf::from("/tmp/a.png")));
        let _ = orchestrator.handle_export_finished(Ok(PathBuf::from("/tmp/b.png")));

        let _ = orchestrator.update(OrchestratorMessage::DismissSuccessBanner { generation: 1 });
        assert!(orchestrator.show_success_banner);

        let _ = orchestrator.update(OrchestratorMessage::DismissSuccessBanner { generation: 2 });
        assert!(!orchestrator.show_success_banner);
    }

    #[test]
    fn test_failed_export_sets_error_notice() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.handle_export_finished(Err("disk full".to_string()));

        assert_eq!(orchestrator.error_notice.as_deref(), Some("disk full"));
        assert!(!orchestrator.show_success_banner);
    }

    #[test]
    fn test_reset_session_clears_everything_and_invalidates_decodes() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.handle_clipboard_inspected(Ok(ClipboardPayload::Image {
            encoded_bytes: vec![1],
        }));
        let _ = orchestrator.handle_export_finished(Ok(PathBuf::from("/tmp/out.png")));
        let generation_before_reset = orchestrator.paste_generation;

        let _ = orchestrator.handle_reset_session();

        assert!(orchestrator.content.is_empty());
        assert_eq!(orchestrator.active_tab, ActiveTab::Paste);
        assert!(!orchestrator.show_success_banner);
        assert!(orchestrator.error_notice.is_none());
        assert!(orchestrator.paste_generation > generation_before_reset);

        // The decode that was in flight before the reset must not resurrect content.
        let _ = orchestrator.handle_bitmap_decoded(generation_before_reset, Ok((vec![1], test_bitmap())));
        assert!(orchestrator.content.is_empty());
    }
}
