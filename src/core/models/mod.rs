mod clipboard_content;
mod export_artifact;
mod render_spec;

pub use clipboard_content::{ClipboardContent, ClipboardPayload, DecodedBitmap, ImageContent};
pub use export_artifact::ExportArtifact;
pub use render_spec::RenderSpec;
