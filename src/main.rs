//! Patch Bundler - reproducible release bundles for RPM update packages.
//!
//! This binary stages update packages, writes a JSON manifest and release
//! notes next to them, and compresses the result into one `.tar.gz`.

use patch_bundler::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
