//! Manifest emitter.

use super::ManifestRecord;
use crate::bundler::{ErrorExt, Result};
use std::path::Path;

/// Writes `manifest` as two-space indented JSON to `path`.
///
/// Key and sequence order are those of the source document; no field is
/// added, dropped or rewritten.
pub async fn write_manifest(manifest: &ManifestRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest.as_map())?;

    tokio::fs::write(path, json)
        .await
        .fs_context("writing manifest", path)?;

    log::debug!("manifest file was written to {}", path.display());
    Ok(())
}
