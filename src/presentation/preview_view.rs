use iced::widget::{column, container, image, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use crate::core::models::ClipboardContent;

/// The Preview tab: shows the pasted image, the pasted text in monospace,
/// or a placeholder when nothing has been pasted yet. Purely informational,
/// so it emits whatever message type the caller works with.
pub fn render_ui<'a, Message: 'a>(content: &'a ClipboardContent) -> Element<'a, Message> {
    let body: Element<'a, Message> = match content {
        ClipboardContent::Image(image_content) => container(
            image::viewer(image_content.image_handle.clone())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .center_x(Length::Fill)
        .into(),
        ClipboardContent::Text(pasted_text) => scrollable(
            text(pasted_text.as_str())
                .font(Font::MONOSPACE)
                .size(14)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into(),
        ClipboardContent::Empty => column![
            text("🖼").size(48),
            text("No content to preview"),
            text("Switch to the Paste tab to add content").size(13),
        ]
        .spacing(8)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into(),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
        .into()
}
