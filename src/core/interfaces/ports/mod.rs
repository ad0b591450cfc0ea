mod clipboard_reader;

pub use clipboard_reader::ClipboardReader;
