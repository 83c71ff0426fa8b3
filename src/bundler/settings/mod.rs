//! Configuration structures for a bundle run.
//!
//! [`Settings`] is the single configuration record of a run. It is built once
//! by [`SettingsBuilder`], which also resolves the [`BuildDate`] used for every
//! default file name and for the release-notes header.

mod arch;
mod builder;
mod bundle;
mod core;
mod date;
mod package;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use bundle::{
    BundleSettings, DEFAULT_FIX_ID_KEY, DEFAULT_FIX_LIST_KEY, DEFAULT_MANIFEST_FILE, PackageOrder,
};
pub use self::core::Settings;
pub use date::BuildDate;
pub use package::{
    DEFAULT_BUNDLE_NAME, DEFAULT_BUNDLE_VERSION, DEFAULT_TARGETED_RELEASES, PackageSettings,
};
