use iced::widget::{button, column, container, text, text_editor};
use iced::{Alignment, Element, Font, Length};

#[derive(Debug, Clone)]
pub enum PasteViewMessage {
    EditorEdited(text_editor::Action),
    PasteRequested,
}

/// The Paste tab: a monospace editor plus a button that pulls whatever the
/// OS clipboard currently holds. Text can also be typed or pasted straight
/// into the editor.
pub fn render_ui(draft_text: &text_editor::Content) -> Element<'_, PasteViewMessage> {
    let editor = text_editor(draft_text)
        .placeholder("Paste content here (Ctrl+V or Cmd+V)...")
        .font(Font::MONOSPACE)
        .size(14)
        .height(Length::Fill)
        .on_action(PasteViewMessage::EditorEdited);

    let paste_btn = button(text("📋 Paste from Clipboard"))
        .padding([10, 20])
        .on_press(PasteViewMessage::PasteRequested);

    let hint = text("Text or images from the clipboard are supported").size(13);

    let content = column![editor, paste_btn, hint]
        .spacing(12)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
        .into()
}
