//! Bundle archive creation.
//!
//! The staging directory's contents become the top level of a gzip-compressed
//! tarball. The staging directory itself never appears as an entry.

use crate::bundler::{Error, ErrorExt, Result};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    path::Path,
};

/// Compresses everything under `staging` into a `.tar.gz` at `output`.
///
/// Entries are added in file-name order with deterministic headers, so two
/// archives of identical staging contents list identical members.
pub async fn compress_dir(staging: &Path, output: &Path) -> Result<()> {
    let staging = staging.to_path_buf();
    let output = output.to_path_buf();

    // tar and flate2 are blocking
    tokio::task::spawn_blocking(move || write_archive(&staging, &output))
        .await
        .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))??;

    Ok(())
}

fn write_archive(staging: &Path, output: &Path) -> Result<()> {
    let file = File::create(output).fs_context("creating archive", output)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(encoder);
    tar.mode(tar::HeaderMode::Deterministic);
    tar.follow_symlinks(false);

    for entry in walkdir::WalkDir::new(staging)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.path().strip_prefix(staging)?;

        if entry.file_type().is_dir() {
            tar.append_dir(name, entry.path())
                .fs_context("archiving directory", entry.path())?;
        } else {
            tar.append_path_with_name(entry.path(), name)
                .fs_context("archiving file", entry.path())?;
        }
    }

    let encoder = tar.into_inner().fs_context("finishing archive", output)?;
    encoder.finish().fs_context("compressing archive", output)?;

    log::debug!("finished compressing {}", output.display());
    Ok(())
}
