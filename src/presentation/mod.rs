pub mod paste_view;
pub mod preview_view;

pub use paste_view::PasteViewMessage;
