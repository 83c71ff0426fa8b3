//! Builder for constructing Settings.

use super::{BuildDate, BundleSettings, PackageSettings, Settings, DEFAULT_MANIFEST_FILE};
use crate::bundler::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every output name left unset is derived from the bundle identity and the
/// build date, which is resolved here once for the whole run.
///
/// # Examples
///
/// ```no_run
/// use patch_bundler::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> patch_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .input_file("manifest.yaml")
///     .packages_directory("rpms")
///     .package_settings(PackageSettings {
///         version: "7.7r1.8".into(),
///         targeted_releases: vec!["7.7r1.7".into()],
///         ..Default::default()
///     })
///     .clean(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: PackageSettings,
    bundle_settings: BundleSettings,
    input_file: Option<PathBuf>,
    packages_directory: Option<PathBuf>,
    output_file: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    release_notes_file: Option<PathBuf>,
    manifest_file: Option<PathBuf>,
    clean: bool,
    build_date: Option<BuildDate>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the YAML manifest source.
    ///
    /// # Required
    pub fn input_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.input_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory holding the packages to stage.
    ///
    /// # Required
    pub fn packages_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.packages_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive path.
    ///
    /// Default: `{name}-{version}-{date}-{arch}.tar.gz`
    pub fn output_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the staging directory.
    ///
    /// Default: `{name}-{version}-{date}-{arch}`
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the release-notes file name.
    ///
    /// Default: `{name}-{version}-{date}-{arch}.release_notes`
    pub fn release_notes_file<P: AsRef<Path>>(mut self, name: P) -> Self {
        self.release_notes_file = Some(name.as_ref().to_path_buf());
        self
    }

    /// Sets the manifest file name.
    ///
    /// Default: [`DEFAULT_MANIFEST_FILE`]
    pub fn manifest_file<P: AsRef<Path>>(mut self, name: P) -> Self {
        self.manifest_file = Some(name.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle identity.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets the assembly options.
    pub fn bundle_settings(mut self, settings: BundleSettings) -> Self {
        self.bundle_settings = settings;
        self
    }

    /// Removes the staging directory after a successful archive.
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Pins the build date instead of using today's.
    pub fn build_date(mut self, date: BuildDate) -> Self {
        self.build_date = Some(date);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `input_file` or `packages_directory`
    /// is missing or empty, or if `input_file` is not valid UTF-8.
    pub fn build(self) -> Result<Settings> {
        let input_file = required_path("input_file", self.input_file)?;
        if input_file.to_str().is_none() {
            return Err(Error::InvalidPath {
                name: "input_file",
                reason: format!("{} is not valid UTF-8", input_file.display()),
            });
        }
        let packages_directory = required_path("packages_directory", self.packages_directory)?;

        let build_date = self.build_date.unwrap_or_else(BuildDate::today);
        let stem = self.package_settings.file_stem(&build_date);

        let output_file = self
            .output_file
            .unwrap_or_else(|| PathBuf::from(format!("{stem}.tar.gz")));
        let output_directory = self
            .output_directory
            .unwrap_or_else(|| PathBuf::from(&stem));
        let release_notes_file = self
            .release_notes_file
            .unwrap_or_else(|| PathBuf::from(format!("{stem}.release_notes")));
        let manifest_file = self
            .manifest_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE));

        for (name, path) in [
            ("output_file", &output_file),
            ("output_directory", &output_directory),
            ("release_notes_file", &release_notes_file),
            ("manifest_file", &manifest_file),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidPath {
                    name,
                    reason: "path is empty".into(),
                });
            }
        }

        Ok(Settings::new(
            self.package_settings,
            self.bundle_settings,
            input_file,
            packages_directory,
            output_file,
            output_directory,
            release_notes_file,
            manifest_file,
            self.clean,
            build_date,
        ))
    }
}

fn required_path(name: &'static str, path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        Some(_) => Err(Error::InvalidPath {
            name,
            reason: "path is empty".into(),
        }),
        None => Err(Error::InvalidPath {
            name,
            reason: "argument is required".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Arch;

    fn date() -> BuildDate {
        BuildDate::from_ymd(2020, 3, 14).unwrap()
    }

    #[test]
    fn derives_default_names_from_one_date() {
        let settings = SettingsBuilder::new()
            .input_file("m.yaml")
            .packages_directory("rpms")
            .build_date(date())
            .build()
            .unwrap();

        let stem = "CVM_PE_GI-7.7r1.7.1-20200314-x86_64";
        assert_eq!(settings.output_directory(), Path::new(stem));
        assert_eq!(settings.output_file(), Path::new(&format!("{stem}.tar.gz")));
        assert_eq!(
            settings.release_notes_path(),
            Path::new(stem).join(format!("{stem}.release_notes"))
        );
        assert_eq!(
            settings.manifest_path(),
            Path::new(stem).join(DEFAULT_MANIFEST_FILE)
        );
        assert_eq!(settings.bundle_id(), "CVM_PE_GI-7.7r1.7.1-20200314");
    }

    #[test]
    fn explicit_names_override_defaults() {
        let settings = SettingsBuilder::new()
            .input_file("m.yaml")
            .packages_directory("rpms")
            .package_settings(PackageSettings {
                arch: Arch::AArch64,
                ..Default::default()
            })
            .output_directory("/tmp/stage")
            .manifest_file("manifest.json")
            .build_date(date())
            .build()
            .unwrap();

        assert_eq!(settings.manifest_path(), Path::new("/tmp/stage/manifest.json"));
        assert_eq!(
            settings.output_file(),
            Path::new("CVM_PE_GI-7.7r1.7.1-20200314-aarch64.tar.gz")
        );
    }

    #[test]
    fn missing_input_file_is_rejected() {
        let err = SettingsBuilder::new()
            .packages_directory("rpms")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath { name: "input_file", .. }));
    }

    #[test]
    fn empty_packages_directory_is_rejected() {
        let err = SettingsBuilder::new()
            .input_file("m.yaml")
            .packages_directory("")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPath {
                name: "packages_directory",
                ..
            }
        ));
    }
}
