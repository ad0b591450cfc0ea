use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::interfaces::adapters::ArtifactWriter;
use crate::core::models::ExportArtifact;
use crate::global_constants::LOG_TAG_EXPORT;

/// Writes export artifacts into a download directory, the desktop
/// equivalent of the browser's download trigger.
pub struct DownloadArtifactWriter {
    download_directory: PathBuf,
}

impl DownloadArtifactWriter {
    pub fn initialize(download_directory_override: Option<PathBuf>) -> Self {
        let download_directory = download_directory_override
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir);

        log::debug!(
            "{} exports will be written to {:?}",
            LOG_TAG_EXPORT,
            download_directory
        );

        Self { download_directory }
    }

    pub fn get_download_directory(&self) -> &PathBuf {
        &self.download_directory
    }
}

impl ArtifactWriter for DownloadArtifactWriter {
    fn write_artifact(&self, artifact: &ExportArtifact) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.download_directory).with_context(|| {
            format!(
                "failed to create download directory {:?}",
                self.download_directory
            )
        })?;

        let target_path = self.download_directory.join(&artifact.file_name);
        std::fs::write(&target_path, &artifact.bytes)
            .with_context(|| format!("failed to write {:?}", target_path))?;

        log::info!(
            "{} wrote {} ({} bytes) to {:?}",
            LOG_TAG_EXPORT,
            artifact.file_name,
            artifact.bytes.len(),
            target_path
        );

        Ok(target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_download_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("paste-to-png-test")
            .join(name)
            .join(format!("{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_artifact_creates_file_with_exact_bytes() {
        let dir = temp_download_dir("exact-bytes");
        let writer = DownloadArtifactWriter::initialize(Some(dir.clone()));
        let artifact = ExportArtifact::build_png(vec![137, 80, 78, 71]);

        let written_path = writer.write_artifact(&artifact).unwrap();

        assert_eq!(written_path, dir.join("clipboard-content.png"));
        assert_eq!(std::fs::read(&written_path).unwrap(), artifact.bytes);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_artifact_creates_missing_directory() {
        let dir = temp_download_dir("missing-dir").join("nested");
        let writer = DownloadArtifactWriter::initialize(Some(dir.clone()));
        let artifact = ExportArtifact::build_png(vec![1]);

        assert!(writer.write_artifact(&artifact).is_ok());
        assert!(dir.join("clipboard-content.png").exists());

        std::fs::remove_dir_all(dir.parent().unwrap()).ok();
    }

    #[test]
    fn test_initialize_without_override_picks_some_directory() {
        let writer = DownloadArtifactWriter::initialize(None);

        assert!(!writer.get_download_directory().as_os_str().is_empty());
    }
}
