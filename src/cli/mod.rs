//! Command line interface for mod_portal_release.

mod args;
mod output;

pub use args::Args;
pub use output::{OutputManager, Redactor, SecretRedactor};

use std::sync::Arc;

use crate::config::PublishConfig;
use crate::error::Result;
use crate::publish::Publisher;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Run a publish with already-parsed arguments (used by tests)
pub async fn run_with(args: Args) -> Result<i32> {
    let redactor = Arc::new(SecretRedactor::new());

    // The key goes into the redactor before any other use, so no later
    // failure path can leak it.
    if let Some(key) = args.api_key.as_deref() {
        redactor.register(key);
    }

    let output = OutputManager::new(redactor, args.quiet);

    let config = PublishConfig::resolve(
        args.api_key,
        args.tag,
        args.workspace,
        args.portal_url,
        args.manifest,
    )?;

    let publisher = Publisher::new(config, output);
    publisher.publish().await?;

    Ok(0)
}
