#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Paste to PNG - Desktop";
pub const APPLICATION_TITLE: &str = "Paste to PNG";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_RASTERIZER: &str = "[RASTERIZER]";
pub const LOG_TAG_DECODER: &str = "[DECODER]";
pub const LOG_TAG_EXPORT: &str = "[EXPORT]";

pub const STATUS_READY: &str = "Ready - paste text or an image from your clipboard";
pub const STATUS_DECODING: &str = "Decoding pasted image...";
pub const STATUS_EXPORTING: &str = "Generating PNG...";
pub const STATUS_NOTHING_PASTED: &str = "Clipboard is empty - nothing to paste";
pub const STATUS_EMPTY_EXPORT: &str = "Please paste some content first!";

// Rasterization metrics, matching the original canvas renderer: 16px
// monospace on 20px line spacing, first baseline at y=30, text starting at
// x=20, 40px total outer padding, bitmap width capped at 800.
pub const RENDER_FONT_SIZE_PX: f32 = 16.0;
pub const RENDER_LINE_HEIGHT_PX: f32 = 20.0;
pub const RENDER_LEFT_MARGIN_PX: f32 = 20.0;
pub const RENDER_TOP_OFFSET_PX: f32 = 30.0;
pub const RENDER_OUTER_PADDING_PX: f32 = 40.0;
pub const RENDER_MAX_BITMAP_WIDTH_PX: f32 = 800.0;

pub const EXPORT_FILE_NAME: &str = "clipboard-content.png";
pub const EXPORT_MIME_TYPE: &str = "image/png";

pub const SUCCESS_BANNER_DURATION_MS: u64 = 3000;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "paste-to-png-pc";
pub const INSTANCE_LOCK_FILE_NAME: &str = "paste-to-png-pc.lock";

pub const MAIN_WINDOW_WIDTH: f32 = 700.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 650.0;
