//! Release bundle builder for binary update packages.
//!
//! This library assembles a release bundle from a YAML manifest and a
//! directory of packages:
//! - stages the packages into a fresh directory
//! - writes the manifest as canonical JSON
//! - writes release notes listing fixes, packages and targeted releases
//! - compresses everything into a single `.tar.gz`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
