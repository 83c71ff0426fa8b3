//! Target architecture of the bundled packages.

use std::fmt;

/// RPM architecture the bundle is built for.
///
/// Only used for naming: the architecture appears as the last component of the
/// default staging directory, archive and release-notes names. Package contents
/// are never inspected to confirm it.
///
/// # Examples
///
/// ```
/// use patch_bundler::bundler::Arch;
///
/// assert_eq!(Arch::X86_64.to_string(), "x86_64");
/// assert_eq!(Arch::Noarch.as_str(), "noarch");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    #[default]
    #[value(name = "x86_64")]
    X86_64,
    /// i686 (32-bit Intel)
    #[value(name = "i686")]
    X86,
    /// AArch64 / ARM64
    #[value(name = "aarch64")]
    AArch64,
    /// 64-bit little-endian POWER
    #[value(name = "ppc64le")]
    Ppc64le,
    /// IBM Z
    #[value(name = "s390x")]
    S390x,
    /// Architecture-independent packages
    #[value(name = "noarch")]
    Noarch,
}

impl Arch {
    /// Returns the RPM spelling of the architecture.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "i686",
            Arch::AArch64 => "aarch64",
            Arch::Ppc64le => "ppc64le",
            Arch::S390x => "s390x",
            Arch::Noarch => "noarch",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
