mod artifact_writer;
mod bitmap_decoder;

pub use artifact_writer::ArtifactWriter;
pub use bitmap_decoder::BitmapDecoder;
