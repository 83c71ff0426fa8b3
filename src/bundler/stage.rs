//! Package staging.
//!
//! Copies every entry of the package directory into the staging directory
//! under its original name. Nothing is filtered by extension and nothing is
//! recursed into.

use crate::bundler::{
    error::{Context, ErrorExt, Result},
    settings::PackageOrder,
    utils::fs,
};
use std::path::Path;

/// Stages all packages from `source` into `staging`.
///
/// Returns the staged file names, ordered per `order`. A failed copy aborts
/// immediately; files already copied are left in place.
///
/// # Errors
///
/// - [`Error::Fs`](crate::bundler::Error::Fs) if `source` cannot be listed or a copy fails
/// - [`Error::NotAFile`](crate::bundler::Error::NotAFile) if `source` contains a subdirectory
pub async fn stage_packages(
    source: &Path,
    staging: &Path,
    order: PackageOrder,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(source)
        .await
        .fs_context("listing package directory", source)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("listing package directory", source)?
    {
        let name = entry
            .file_name()
            .into_string()
            .map_err(|n| n.to_string_lossy().into_owned())
            .context("package file name is not valid UTF-8")?;
        names.push(name);
    }

    if order == PackageOrder::Sorted {
        names.sort();
    }

    for name in &names {
        fs::copy_file(&source.join(name), &staging.join(name)).await?;
    }

    log::debug!(
        "staged {} package(s) from {} into {}",
        names.len(),
        source.display(),
        staging.display()
    );

    Ok(names)
}
