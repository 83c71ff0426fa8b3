//! Bundle identity: name, version, architecture and release family.

use super::{Arch, BuildDate};

/// Targeted releases shipped with the default bundle identity.
pub const DEFAULT_TARGETED_RELEASES: &[&str] = &["7.7r1.7", "7.7r1.6", "7.7r1.5.1", "7.6r2"];

/// Default bundle product name.
pub const DEFAULT_BUNDLE_NAME: &str = "CVM_PE_GI";

/// Default bundle version.
pub const DEFAULT_BUNDLE_VERSION: &str = "7.7r1.7.1";

/// Bundle identity and release family.
///
/// The targeted releases are carried here, next to the version they belong to,
/// so the release notes never list a family the bundle does not declare.
///
/// # Examples
///
/// ```
/// use patch_bundler::bundler::{Arch, BuildDate, PackageSettings};
///
/// let package = PackageSettings {
///     name: "CVM_PE_GI".into(),
///     version: "7.7r1.7.1".into(),
///     arch: Arch::X86_64,
///     targeted_releases: vec!["7.7r1.7".into()],
/// };
/// let date = BuildDate::from_ymd(2020, 3, 14).unwrap();
/// assert_eq!(package.bundle_id(&date), "CVM_PE_GI-7.7r1.7.1-20200314");
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Product name, the first component of every default file name.
    pub name: String,

    /// Bundle version, e.g. "7.7r1.7.1".
    pub version: String,

    /// Architecture suffix of default file names.
    pub arch: Arch,

    /// Product version lines this bundle applies to, in release-notes order.
    pub targeted_releases: Vec<String>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUNDLE_NAME.to_string(),
            version: DEFAULT_BUNDLE_VERSION.to_string(),
            arch: Arch::default(),
            targeted_releases: DEFAULT_TARGETED_RELEASES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

impl PackageSettings {
    /// `{name}-{version}-{date}`, the identifier used in the release-notes header.
    pub fn bundle_id(&self, date: &BuildDate) -> String {
        format!("{}-{}-{}", self.name, self.version, date)
    }

    /// `{name}-{version}-{date}-{arch}`, the stem of all default file names.
    pub fn file_stem(&self, date: &BuildDate) -> String {
        format!("{}-{}", self.bundle_id(date), self.arch)
    }
}
