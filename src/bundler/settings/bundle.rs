//! How a bundle is assembled: manifest field names and package ordering.

/// Manifest file name written into the staging directory by default.
pub const DEFAULT_MANIFEST_FILE: &str = "CVM_RPM_LIST_MANIFEST.json";

/// Default manifest key holding the fix entry sequence.
pub const DEFAULT_FIX_LIST_KEY: &str = "CESA_list";

/// Default key of the identifier inside each fix entry.
pub const DEFAULT_FIX_ID_KEY: &str = "CESA";

/// Order of the staged package list.
///
/// Directory enumeration order differs between platforms and filesystems, so
/// [`PackageOrder::Sorted`] is the default: it makes the release notes and the
/// archive member order reproducible.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum PackageOrder {
    /// Sort package file names lexically.
    #[default]
    Sorted,
    /// Keep the order the directory listing returned.
    Listing,
}

/// Bundle assembly configuration.
///
/// # Example
///
/// A manifest using the default field names:
///
/// ```yaml
/// CESA_list:
///   - CESA: "CESA-2020:0001"
///   - CESA: "CESA-2020:0002"
/// ```
#[derive(Debug, Clone)]
pub struct BundleSettings {
    /// Manifest key of the fix entry sequence.
    pub fix_list_key: String,

    /// Key of the identifier inside each fix entry.
    pub fix_id_key: String,

    /// Order of staged packages in the release notes.
    pub package_order: PackageOrder,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            fix_list_key: DEFAULT_FIX_LIST_KEY.to_string(),
            fix_id_key: DEFAULT_FIX_ID_KEY.to_string(),
            package_order: PackageOrder::default(),
        }
    }
}
