//! Release-notes composition.
//!
//! The document has three sections, always in this order and always present,
//! even when empty:
//!
//! ```text
//! The CVM_PE_GI-7.7r1.7.1-20200314 patch fixes the following CVEs:
//!   CESA-2020:0001
//!
//! New patches included in this bundle:
//!   patch-a.rpm
//!
//! Targeted releases:
//!   7.7r1.7
//! ```

use crate::bundler::{
    ErrorExt, Result,
    manifest::ManifestRecord,
    settings::Settings,
};
use std::fmt;
use std::path::Path;

/// Indentation of every listed item.
const ITEM_INDENT: &str = "  ";

/// Derived release-notes content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// `{name}-{version}-{date}` shown in the header.
    pub bundle_id: String,
    /// Fix identifiers, in manifest order.
    pub fixes: Vec<String>,
    /// Staged package file names, in staging order.
    pub packages: Vec<String>,
    /// Targeted release versions, as configured.
    pub targeted_releases: Vec<String>,
}

impl ReleaseNotes {
    /// Derives the release notes from the manifest and the staged packages.
    ///
    /// The targeted releases come from the bundle identity in `settings`,
    /// never from the manifest.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`](crate::bundler::Error::MissingField) or
    /// [`Error::InvalidField`](crate::bundler::Error::InvalidField) if the
    /// manifest lacks a well-formed fix entry sequence.
    pub fn compose(
        settings: &Settings,
        manifest: &ManifestRecord,
        packages: &[String],
    ) -> Result<Self> {
        let bundle = settings.bundle_settings();
        let fixes = manifest
            .fix_ids(&bundle.fix_list_key, &bundle.fix_id_key)?
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            bundle_id: settings.bundle_id(),
            fixes,
            packages: packages.to_vec(),
            targeted_releases: settings.package().targeted_releases.clone(),
        })
    }
}

impl fmt::Display for ReleaseNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The {} patch fixes the following CVEs:",
            self.bundle_id
        )?;
        write_items(f, &self.fixes)?;

        writeln!(f, "\nNew patches included in this bundle:")?;
        write_items(f, &self.packages)?;

        writeln!(f, "\nTargeted releases:")?;
        write_items(f, &self.targeted_releases)
    }
}

fn write_items(out: &mut impl fmt::Write, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(out, "{ITEM_INDENT}{item}")?;
    }
    Ok(())
}

/// Composes the release notes and writes them to `path`.
pub async fn write_release_notes(
    settings: &Settings,
    manifest: &ManifestRecord,
    packages: &[String],
    path: &Path,
) -> Result<ReleaseNotes> {
    let notes = ReleaseNotes::compose(settings, manifest, packages)?;

    tokio::fs::write(path, notes.to_string())
        .await
        .fs_context("writing release notes", path)?;

    log::debug!("release notes were written to {}", path.display());
    Ok(notes)
}
