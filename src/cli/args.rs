//! Command line argument parsing and validation.
//!
//! In CI nothing needs to be passed explicitly: every input falls back to
//! the environment variables the host injects.

use std::path::PathBuf;

use clap::Parser;

/// Publish a mod release to the Factorio mod portal
#[derive(Parser, Debug)]
#[command(
    name = "mod_portal_release",
    version,
    about = "Publish a mod release to the Factorio mod portal",
    long_about = "Validates that info.json matches the triggering git tag, packages the \
tagged tree with git archive, and uploads the zip to the mod portal.

Usage:
  mod_portal_release
  mod_portal_release --tag v1.2.3 --workspace /path/to/mod"
)]
pub struct Args {
    /// Portal API key (needs ModPortal: Upload Mods permission)
    #[arg(long, env = "FACTORIO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Git tag that triggered this run, e.g. v1.2.3
    #[arg(long, env = "GITHUB_REF_NAME")]
    pub tag: Option<String>,

    /// Workspace root containing the mod repository
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Portal base URL
    #[arg(long)]
    pub portal_url: Option<String>,

    /// Manifest path relative to the workspace root
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
