//! Release bundle assembly.
//!
//! Turns a YAML manifest and a directory of update packages into a staged
//! directory, a JSON manifest, a release-notes file and a `.tar.gz` archive.
//!
//! # Example
//!
//! ```no_run
//! use patch_bundler::bundler::{Bundler, SettingsBuilder};
//!
//! # async fn example() -> patch_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .input_file("manifest.yaml")
//!     .packages_directory("rpms")
//!     .build()?;
//!
//! let artifact = Bundler::new(settings).bundle().await?;
//! println!("Created: {}", artifact.path.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod builder;
pub mod error;
pub mod manifest;
pub mod release_notes;
pub mod settings;
pub mod stage;
pub mod utils;

use std::path::PathBuf;

pub use builder::{Bundler, PipelineState};
pub use error::{Context, Error, ErrorExt, Result};
pub use manifest::ManifestRecord;
pub use release_notes::ReleaseNotes;
pub use settings::{
    Arch, BuildDate, BundleSettings, PackageOrder, PackageSettings, Settings, SettingsBuilder,
};

/// The archive produced by a successful run.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Archive path.
    pub path: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
    /// Staged package file names, in release-notes order.
    pub packages: Vec<String>,
    /// [`PipelineState::Cleaned`] or [`PipelineState::Done`].
    pub final_state: PipelineState,
}
