use anyhow::Result;
use std::path::PathBuf;

use crate::core::models::ExportArtifact;

/// Final step of an export: hand the artifact to the platform's "save as
/// file" mechanism and report where it landed.
pub trait ArtifactWriter: Send + Sync {
    fn write_artifact(&self, artifact: &ExportArtifact) -> Result<PathBuf>;
}
