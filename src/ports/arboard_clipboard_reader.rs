use anyhow::{Context, Result};
use std::io::Cursor;

use crate::core::interfaces::ports::ClipboardReader;
use crate::core::models::ClipboardPayload;
use crate::global_constants::LOG_TAG_CLIPBOARD;

/// Clipboard access through `arboard`. An image on the clipboard always
/// wins over text; the platform exposes at most one bitmap, so the
/// "first image item" rule holds by construction.
pub struct ArboardClipboardReader;

impl ArboardClipboardReader {
    pub fn initialize() -> Self {
        log::debug!("{} initializing arboard clipboard reader", LOG_TAG_CLIPBOARD);
        Self
    }

    fn open_clipboard(&self) -> Result<arboard::Clipboard> {
        arboard::Clipboard::new().context("failed to open system clipboard")
    }

    /// arboard hands back a decoded RGBA bitmap. Re-encode it as PNG right
    /// away: those bytes become the canonical pasted payload and are what
    /// an image export writes out, byte for byte.
    fn encode_image_as_png(&self, image_data: arboard::ImageData<'_>) -> Result<Vec<u8>> {
        let width = image_data.width as u32;
        let height = image_data.height as u32;

        let rgba_image =
            image::RgbaImage::from_raw(width, height, image_data.bytes.into_owned())
                .context("clipboard image buffer has unexpected length")?;

        let mut encoded_bytes = Vec::new();
        rgba_image
            .write_to(&mut Cursor::new(&mut encoded_bytes), image::ImageFormat::Png)
            .context("failed to encode clipboard image as PNG")?;

        log::info!(
            "{} captured {}x{} clipboard image ({} bytes encoded)",
            LOG_TAG_CLIPBOARD,
            width,
            height,
            encoded_bytes.len()
        );

        Ok(encoded_bytes)
    }
}

impl ClipboardReader for ArboardClipboardReader {
    fn read_clipboard_payload(&self) -> Result<ClipboardPayload> {
        let mut clipboard = self.open_clipboard()?;

        if let Ok(image_data) = clipboard.get_image() {
            let encoded_bytes = self.encode_image_as_png(image_data)?;
            return Ok(ClipboardPayload::Image { encoded_bytes });
        }

        match clipboard.get_text() {
            Ok(text) if !text.is_empty() => {
                log::info!(
                    "{} captured {} characters of clipboard text",
                    LOG_TAG_CLIPBOARD,
                    text.len()
                );
                Ok(ClipboardPayload::Text(text))
            }
            Ok(_) => {
                log::debug!("{} clipboard text is empty", LOG_TAG_CLIPBOARD);
                Ok(ClipboardPayload::Empty)
            }
            Err(e) => {
                log::debug!("{} no usable clipboard content: {}", LOG_TAG_CLIPBOARD, e);
                Ok(ClipboardPayload::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_initialize_creates_reader() {
        let reader = ArboardClipboardReader::initialize();

        assert!(std::mem::size_of_val(&reader) == 0);
    }

    #[test]
    fn test_encode_image_as_png_produces_decodable_bytes() {
        let reader = ArboardClipboardReader::initialize();
        let image_data = arboard::ImageData {
            width: 2,
            height: 2,
            bytes: Cow::Owned(vec![255u8; 2 * 2 * 4]),
        };

        let encoded = reader.encode_image_as_png(image_data).unwrap();

        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn test_encode_image_rejects_mismatched_buffer_length() {
        let reader = ArboardClipboardReader::initialize();
        let image_data = arboard::ImageData {
            width: 2,
            height: 2,
            bytes: Cow::Owned(vec![255u8; 3]),
        };

        assert!(reader.encode_image_as_png(image_data).is_err());
    }
}
