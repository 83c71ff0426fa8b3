//! Filesystem helpers shared by the pipeline components.

pub mod fs;
