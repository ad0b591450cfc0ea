use iced::widget::image;

/// Raw clipboard payload as classified by a `ClipboardReader`, before any
/// decoding has happened. An image always wins over text; `Empty` means the
/// paste is a no-op.
#[derive(Clone)]
pub enum ClipboardPayload {
    Image { encoded_bytes: Vec<u8> },
    Text(String),
    Empty,
}

impl std::fmt::Debug for ClipboardPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardPayload::Image { encoded_bytes } => f
                .debug_struct("ClipboardPayload::Image")
                .field("encoded_len", &encoded_bytes.len())
                .finish(),
            ClipboardPayload::Text(text) => f
                .debug_struct("ClipboardPayload::Text")
                .field("chars", &text.len())
                .finish(),
            ClipboardPayload::Empty => write!(f, "ClipboardPayload::Empty"),
        }
    }
}

/// Bitmap produced by a `BitmapDecoder` from encoded image bytes.
#[derive(Clone)]
pub struct DecodedBitmap {
    pub width: u32,
    pub height: u32,
    pub raw_rgba_data: Vec<u8>,
}

impl std::fmt::Debug for DecodedBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Image content held by the session: the encoded bytes exactly as captured
/// (these are what gets exported, byte for byte) plus a display handle for
/// the preview tab.
#[derive(Clone)]
pub struct ImageContent {
    pub encoded_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub image_handle: image::Handle,
}

impl std::fmt::Debug for ImageContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageContent")
            .field("encoded_len", &self.encoded_bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl ImageContent {
    pub fn build_from_decoded(encoded_bytes: Vec<u8>, decoded: DecodedBitmap) -> Self {
        log::debug!(
            "[CLIPBOARD] building image content: {}x{}, {} encoded bytes",
            decoded.width,
            decoded.height,
            encoded_bytes.len()
        );

        Self {
            encoded_bytes,
            width: decoded.width,
            height: decoded.height,
            image_handle: image::Handle::from_rgba(
                decoded.width,
                decoded.height,
                decoded.raw_rgba_data,
            ),
        }
    }
}

/// Active session content. Exactly one variant holds data at a time;
/// selecting one discards the other, and `Empty` is the valid third state.
#[derive(Debug, Clone, Default)]
pub enum ClipboardContent {
    #[default]
    Empty,
    Text(String),
    Image(ImageContent),
}

impl ClipboardContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, ClipboardContent::Empty)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ClipboardContent::Empty => "empty",
            ClipboardContent::Text(_) => "text",
            ClipboardContent::Image(_) => "image",
        }
    }
}
