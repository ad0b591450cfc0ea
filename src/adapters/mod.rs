mod download_artifact_writer;
mod image_bitmap_decoder;

pub use download_artifact_writer::DownloadArtifactWriter;
pub use image_bitmap_decoder::ImageBitmapDecoder;
