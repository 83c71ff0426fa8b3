//! File system utilities for bundling.
//!
//! Thin wrappers over `tokio::fs` that attach the operation and path to every
//! failure.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Mode of a freshly created staging directory.
#[cfg(unix)]
const STAGING_DIR_MODE: u32 = 0o744;

/// Creates the staging directory.
///
/// The parent must exist and the directory itself must not: two runs sharing
/// a staging path would otherwise mix their contents.
pub async fn create_staging_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(STAGING_DIR_MODE);

    builder
        .create(path)
        .await
        .fs_context("creating staging directory", path)
}

/// Copies a regular file byte for byte.
///
/// Fails if the source is not a regular file or does not exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading package metadata", from)?;
    if !metadata.is_file() {
        return Err(Error::NotAFile(from.to_path_buf()));
    }
    fs::copy(from, to).await.fs_context("copying package", to)?;
    Ok(())
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing staging directory",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
