//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and converts the
//! parsed arguments into the bundler's [`Settings`].

use crate::bundler::{
    Arch, BuildDate, BundleSettings, PackageOrder, PackageSettings, Settings, SettingsBuilder,
    settings::{
        DEFAULT_BUNDLE_NAME, DEFAULT_BUNDLE_VERSION, DEFAULT_FIX_ID_KEY, DEFAULT_FIX_LIST_KEY,
        DEFAULT_MANIFEST_FILE, DEFAULT_TARGETED_RELEASES,
    },
};
use clap::Parser;
use std::path::PathBuf;

/// Release bundle builder for RPM update packages
#[derive(Parser, Debug)]
#[command(
    name = "patch_bundler",
    version,
    about = "Release bundle builder for RPM update packages",
    long_about = "Stages update packages, writes a JSON manifest and release notes next to them, \
and compresses the result into a single .tar.gz bundle.

Usage:
  patch_bundler --input-file manifest.yaml --rpms-directory ./rpms
  patch_bundler --input-file manifest.yaml --rpms-directory ./rpms --clean \\
      --targeted-release 7.7r1.7 --targeted-release 7.7r1.6

Default file names share one build date, resolved once per run.
Exit code 0 = bundle guaranteed to exist at the output path."
)]
pub struct Args {
    /// Input YAML manifest
    #[arg(long, value_name = "PATH")]
    pub input_file: PathBuf,

    /// Directory containing the RPM files to bundle
    #[arg(long, visible_alias = "packages-directory", value_name = "DIR")]
    pub rpms_directory: PathBuf,

    /// Output archive path [default: {name}-{version}-{date}-{arch}.tar.gz]
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Staging directory [default: {name}-{version}-{date}-{arch}]
    #[arg(long, value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Release notes file name [default: {name}-{version}-{date}-{arch}.release_notes]
    #[arg(long, value_name = "NAME")]
    pub release_notes_file: Option<PathBuf>,

    /// Manifest file name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest_file: PathBuf,

    /// Remove the staging directory after the archive is written
    #[arg(long)]
    pub clean: bool,

    /// Bundle product name
    #[arg(long, env = "PATCH_BUNDLER_NAME", default_value = DEFAULT_BUNDLE_NAME)]
    pub bundle_name: String,

    /// Bundle version
    #[arg(long, env = "PATCH_BUNDLER_VERSION", default_value = DEFAULT_BUNDLE_VERSION)]
    pub bundle_version: String,

    /// Package architecture used in default file names
    #[arg(long, value_enum, default_value_t = Arch::X86_64)]
    pub arch: Arch,

    /// Product release this bundle targets (repeatable)
    #[arg(
        long = "targeted-release",
        value_name = "VERSION",
        default_values_t = DEFAULT_TARGETED_RELEASES.iter().map(|r| r.to_string()).collect::<Vec<_>>()
    )]
    pub targeted_releases: Vec<String>,

    /// Manifest key holding the list of fixes
    #[arg(long, default_value = DEFAULT_FIX_LIST_KEY)]
    pub fix_list_key: String,

    /// Key of the identifier inside each fix entry
    #[arg(long, default_value = DEFAULT_FIX_ID_KEY)]
    pub fix_id_key: String,

    /// Order of packages in the release notes
    #[arg(long, value_enum, default_value_t = PackageOrder::Sorted)]
    pub package_order: PackageOrder,

    /// Build date for names and release notes [default: today]
    #[arg(
        long,
        env = "PATCH_BUNDLER_BUILD_DATE",
        value_name = "YYYYMMDD",
        value_parser = parse_build_date
    )]
    pub build_date: Option<BuildDate>,
}

fn parse_build_date(s: &str) -> Result<BuildDate, String> {
    BuildDate::parse(s).ok_or_else(|| format!("expected a YYYYMMDD date, got `{s}`"))
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.input_file.as_os_str().is_empty() {
            return Err("Input file cannot be empty".to_string());
        }
        if self.rpms_directory.as_os_str().is_empty() {
            return Err("RPM directory cannot be empty".to_string());
        }
        if self.bundle_name.is_empty() || self.bundle_version.is_empty() {
            return Err("Bundle name and version cannot be empty".to_string());
        }
        if self.targeted_releases.is_empty() {
            return Err("At least one targeted release is required".to_string());
        }
        if self.targeted_releases.iter().any(|r| r.trim().is_empty()) {
            return Err("A targeted release cannot be blank".to_string());
        }
        if self.fix_list_key.is_empty() || self.fix_id_key.is_empty() {
            return Err("Fix manifest keys cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    settings: Settings,
}

impl TryFrom<&Args> for RuntimeConfig {
    type Error = crate::bundler::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut builder = SettingsBuilder::new()
            .input_file(&args.input_file)
            .packages_directory(&args.rpms_directory)
            .manifest_file(&args.manifest_file)
            .package_settings(PackageSettings {
                name: args.bundle_name.clone(),
                version: args.bundle_version.clone(),
                arch: args.arch,
                targeted_releases: args.targeted_releases.clone(),
            })
            .bundle_settings(BundleSettings {
                fix_list_key: args.fix_list_key.clone(),
                fix_id_key: args.fix_id_key.clone(),
                package_order: args.package_order,
            })
            .clean(args.clean);

        if let Some(path) = &args.output_file {
            builder = builder.output_file(path);
        }
        if let Some(path) = &args.output_directory {
            builder = builder.output_directory(path);
        }
        if let Some(name) = &args.release_notes_file {
            builder = builder.release_notes_file(name);
        }
        if let Some(date) = args.build_date {
            builder = builder.build_date(date);
        }

        Ok(Self {
            settings: builder.build()?,
        })
    }
}

impl RuntimeConfig {
    /// Returns the run's settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the config, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec![
            "patch_bundler",
            "--input-file",
            "manifest.yaml",
            "--rpms-directory",
            "rpms",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_the_release_family() {
        let args = parse(&[]);
        assert!(!args.clean);
        assert_eq!(args.manifest_file, PathBuf::from(DEFAULT_MANIFEST_FILE));
        assert_eq!(
            args.targeted_releases,
            ["7.7r1.7", "7.7r1.6", "7.7r1.5.1", "7.6r2"]
        );
        assert_eq!(args.arch, Arch::X86_64);
        assert_eq!(args.package_order, PackageOrder::Sorted);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn targeted_releases_are_repeatable() {
        let args = parse(&["--targeted-release", "8.0", "--targeted-release", "8.1"]);
        assert_eq!(args.targeted_releases, ["8.0", "8.1"]);
    }

    #[test]
    fn packages_directory_alias_is_accepted() {
        let args = Args::try_parse_from([
            "patch_bundler",
            "--input-file",
            "m.yaml",
            "--packages-directory",
            "pkgs",
        ])
        .unwrap();
        assert_eq!(args.rpms_directory, PathBuf::from("pkgs"));
    }

    #[test]
    fn input_file_is_required() {
        assert!(Args::try_parse_from(["patch_bundler", "--rpms-directory", "rpms"]).is_err());
    }

    #[test]
    fn build_date_pins_default_names() {
        let args = parse(&["--build-date", "20200314"]);
        let config = RuntimeConfig::try_from(&args).unwrap();
        assert_eq!(
            config.settings().output_file(),
            std::path::Path::new("CVM_PE_GI-7.7r1.7.1-20200314-x86_64.tar.gz")
        );
        assert!(Args::try_parse_from([
            "patch_bundler",
            "--input-file",
            "m.yaml",
            "--rpms-directory",
            "rpms",
            "--build-date",
            "2020-03-14",
        ])
        .is_err());
    }

    #[test]
    fn blank_targeted_release_fails_validation() {
        let args = parse(&["--targeted-release", " "]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn one_blank_among_targeted_releases_fails_validation() {
        let args = parse(&["--targeted-release", "7.7", "--targeted-release", ""]);
        assert_eq!(
            args.validate().unwrap_err(),
            "A targeted release cannot be blank"
        );
    }

    #[test]
    fn runtime_config_carries_every_option() {
        let args = parse(&[
            "--clean",
            "--output-directory",
            "/tmp/stage",
            "--arch",
            "noarch",
            "--package-order",
            "listing",
            "--fix-list-key",
            "advisories",
        ]);
        let config = RuntimeConfig::try_from(&args).unwrap();
        let settings = config.settings();

        assert!(settings.clean());
        assert_eq!(settings.output_directory(), std::path::Path::new("/tmp/stage"));
        assert_eq!(settings.package().arch, Arch::Noarch);
        assert_eq!(settings.bundle_settings().package_order, PackageOrder::Listing);
        assert_eq!(settings.bundle_settings().fix_list_key, "advisories");
        assert!(
            settings
                .output_file()
                .to_string_lossy()
                .ends_with("-noarch.tar.gz")
        );
    }
}
