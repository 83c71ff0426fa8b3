//! Core Settings struct and implementations.

use super::{BuildDate, BundleSettings, PackageSettings};
use std::path::{Path, PathBuf};

/// Configuration for one bundle run.
///
/// Constructed once via [`SettingsBuilder`](super::SettingsBuilder) and passed
/// by reference to every pipeline component. Components read nothing else.
///
/// # Examples
///
/// ```no_run
/// use patch_bundler::bundler::{BuildDate, SettingsBuilder};
///
/// # fn example() -> patch_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .input_file("manifest.yaml")
///     .packages_directory("rpms")
///     .build_date(BuildDate::from_ymd(2020, 3, 14).unwrap())
///     .build()?;
///
/// assert_eq!(
///     settings.output_file().to_str(),
///     Some("CVM_PE_GI-7.7r1.7.1-20200314-x86_64.tar.gz")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Bundle identity.
    package: PackageSettings,

    /// Assembly options.
    bundle_settings: BundleSettings,

    /// YAML manifest source.
    input_file: PathBuf,

    /// Directory holding the packages to stage.
    packages_directory: PathBuf,

    /// Path of the compressed archive.
    output_file: PathBuf,

    /// Staging directory.
    output_directory: PathBuf,

    /// Release-notes file name, relative to the staging directory.
    release_notes_file: PathBuf,

    /// Manifest file name, relative to the staging directory.
    manifest_file: PathBuf,

    /// Remove the staging directory after archiving.
    clean: bool,

    /// Date shared by naming and release-notes content.
    build_date: BuildDate,
}

impl Settings {
    /// Returns the bundle identity.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the assembly options.
    pub fn bundle_settings(&self) -> &BundleSettings {
        &self.bundle_settings
    }

    /// Returns the manifest source path.
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Returns the package source directory.
    pub fn packages_directory(&self) -> &Path {
        &self.packages_directory
    }

    /// Returns the archive path.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the staging directory.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Returns the full path of the release-notes file inside staging.
    pub fn release_notes_path(&self) -> PathBuf {
        self.output_directory.join(&self.release_notes_file)
    }

    /// Returns the full path of the manifest file inside staging.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_directory.join(&self.manifest_file)
    }

    /// Whether the staging directory is removed after archiving.
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Returns the run's build date.
    pub fn build_date(&self) -> BuildDate {
        self.build_date
    }

    /// Returns `{name}-{version}-{date}` for this run.
    pub fn bundle_id(&self) -> String {
        self.package.bundle_id(&self.build_date)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        bundle_settings: BundleSettings,
        input_file: PathBuf,
        packages_directory: PathBuf,
        output_file: PathBuf,
        output_directory: PathBuf,
        release_notes_file: PathBuf,
        manifest_file: PathBuf,
        clean: bool,
        build_date: BuildDate,
    ) -> Self {
        Self {
            package,
            bundle_settings,
            input_file,
            packages_directory,
            output_file,
            output_directory,
            release_notes_file,
            manifest_file,
            clean,
            build_date,
        }
    }
}
