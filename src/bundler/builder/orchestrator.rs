//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the bundle
//! pipeline one component at a time.

use crate::bundler::{
    BundledArtifact, Error, Result, Settings, archive, manifest, release_notes, stage, utils::fs,
};
use std::{fmt, future::Future};

use super::checksum::calculate_sha256;

/// States of a bundle run.
///
/// The pipeline is linear: each state is reached by exactly one component
/// call, in declaration order. Only the final step branches, to
/// [`PipelineState::Cleaned`] when cleanup was requested and to
/// [`PipelineState::Done`] otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    /// Nothing has happened yet.
    #[default]
    Init,
    /// The staging directory exists and is empty.
    StagingDirCreated,
    /// Every package was copied into staging.
    PackagesStaged,
    /// The manifest source was parsed.
    ManifestLoaded,
    /// The JSON manifest was written into staging.
    ManifestWritten,
    /// The release notes were written into staging.
    NotesWritten,
    /// The archive was written.
    Archived,
    /// The staging directory was removed.
    Cleaned,
    /// The run finished and staging was kept.
    Done,
}

impl PipelineState {
    /// Describes the work performed to reach this state.
    pub fn action(&self) -> &'static str {
        match self {
            PipelineState::Init => "initializing",
            PipelineState::StagingDirCreated => "creating staging directory",
            PipelineState::PackagesStaged => "staging packages",
            PipelineState::ManifestLoaded => "loading manifest",
            PipelineState::ManifestWritten => "writing manifest",
            PipelineState::NotesWritten => "writing release notes",
            PipelineState::Archived => "compressing bundle",
            PipelineState::Cleaned => "removing staging directory",
            PipelineState::Done => "finishing",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Init => "INIT",
            PipelineState::StagingDirCreated => "STAGING_DIR_CREATED",
            PipelineState::PackagesStaged => "PACKAGES_STAGED",
            PipelineState::ManifestLoaded => "MANIFEST_LOADED",
            PipelineState::ManifestWritten => "MANIFEST_WRITTEN",
            PipelineState::NotesWritten => "NOTES_WRITTEN",
            PipelineState::Archived => "ARCHIVED",
            PipelineState::Cleaned => "CLEANED",
            PipelineState::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Main bundler orchestrator.
///
/// Owns the staging directory for the duration of a run. A failure stops the
/// run at the state being entered; whatever was already staged stays on disk
/// and no archive is produced unless the failure happened after archiving.
///
/// # Examples
///
/// ```no_run
/// use patch_bundler::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> patch_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .input_file("manifest.yaml")
///     .packages_directory("rpms")
///     .clean(true)
///     .build()?;
///
/// let artifact = Bundler::new(settings).bundle().await?;
/// println!("{} ({} bytes, sha256 {})", artifact.path.display(), artifact.size, artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Step`] naming the state that could not be reached and
    /// carrying the component error.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        let settings = &self.settings;
        let staging = settings.output_directory();
        let mut run = Run::default();

        log::info!("Assembling bundle {}", settings.bundle_id());

        run.advance(
            PipelineState::StagingDirCreated,
            fs::create_staging_dir(staging),
        )
        .await?;

        let packages = run
            .advance(
                PipelineState::PackagesStaged,
                stage::stage_packages(
                    settings.packages_directory(),
                    staging,
                    settings.bundle_settings().package_order,
                ),
            )
            .await?;

        let manifest = run
            .advance(
                PipelineState::ManifestLoaded,
                manifest::load_manifest(settings.input_file()),
            )
            .await?;

        let manifest_path = settings.manifest_path();
        run.advance(
            PipelineState::ManifestWritten,
            manifest::write_manifest(&manifest, &manifest_path),
        )
        .await?;

        let notes_path = settings.release_notes_path();
        let notes = run
            .advance(
                PipelineState::NotesWritten,
                release_notes::write_release_notes(settings, &manifest, &packages, &notes_path),
            )
            .await?;
        log::info!(
            "Release notes list {} fix(es), {} package(s), {} targeted release(s)",
            notes.fixes.len(),
            notes.packages.len(),
            notes.targeted_releases.len()
        );

        let output = settings.output_file();
        run.advance(
            PipelineState::Archived,
            archive::compress_dir(staging, output),
        )
        .await?;

        let (size, checksum) = run
            .measure(async {
                let metadata = tokio::fs::metadata(output).await.map_err(|source| Error::Fs {
                    context: "reading archive metadata",
                    path: output.to_path_buf(),
                    source,
                })?;
                Ok((metadata.len(), calculate_sha256(output).await?))
            })
            .await?;

        if settings.clean() {
            run.advance(PipelineState::Cleaned, fs::remove_dir_all(staging))
                .await?;
            log::debug!("removed staging directory {}", staging.display());
        } else {
            run.advance(PipelineState::Done, async { Ok(()) }).await?;
        }

        log::info!("✓ Created bundle: {}", output.display());
        log::info!("  size: {} bytes, sha256: {}", size, checksum);

        Ok(BundledArtifact {
            path: output.to_path_buf(),
            size,
            checksum,
            packages,
            final_state: run.state,
        })
    }
}

/// Tracks the current state of one run.
#[derive(Debug, Default)]
struct Run {
    state: PipelineState,
}

impl Run {
    /// Awaits one component call and moves to `next` on success.
    async fn advance<T>(
        &mut self,
        next: PipelineState,
        step: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match step.await {
            Ok(value) => {
                log::debug!("{} -> {}", self.state, next);
                self.state = next;
                Ok(value)
            }
            Err(source) => {
                log::debug!("{} -> {} failed", self.state, next);
                Err(Error::Step {
                    state: next,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Inspects the archive without changing state.
    async fn measure<T>(&self, step: impl Future<Output = Result<T>>) -> Result<T> {
        step.await.map_err(|source| Error::Step {
            state: self.state,
            source: Box::new(source),
        })
    }
}
