//! Command line interface for the patch bundler.
//!
//! Parses arguments, builds the run's [`Settings`](crate::bundler::Settings)
//! once, and hands them to the [`Bundler`].

mod args;

pub use args::{Args, RuntimeConfig};

use crate::bundler::Bundler;
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs the bundle pipeline for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    log::debug!("args = {:?}", args);

    let config = RuntimeConfig::try_from(args)?;
    let artifact = Bundler::new(config.into_settings()).bundle().await?;

    println!("{}", artifact.path.display());
    Ok(0)
}
