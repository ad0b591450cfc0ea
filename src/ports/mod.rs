mod arboard_clipboard_reader;

pub use arboard_clipboard_reader::ArboardClipboardReader;
