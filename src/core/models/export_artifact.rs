use crate::global_constants::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

/// The finished download payload: encoded image bytes plus the fixed file
/// name and MIME type. Built at export time and consumed immediately.
#[derive(Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ExportArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportArtifact")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl ExportArtifact {
    pub fn build_png(bytes: Vec<u8>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            bytes,
        }
    }
}
