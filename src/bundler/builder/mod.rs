//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the bundle
//! pipeline:
//!
//! 1. Creates the staging directory
//! 2. Stages the packages
//! 3. Loads the YAML manifest
//! 4. Writes the JSON manifest into staging
//! 5. Writes the release notes into staging
//! 6. Compresses staging into the bundle archive
//! 7. Optionally removes staging
//!
//! and returns a [`BundledArtifact`](crate::bundler::BundledArtifact) with the
//! archive's size and SHA-256 checksum.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for the archive
//! - [`orchestrator`] - Main [`Bundler`] struct and [`PipelineState`]

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{Bundler, PipelineState};
