//! Run configuration assembled from CLI flags and CI environment variables.

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default mod portal endpoint
pub const DEFAULT_PORTAL_URL: &str = "https://mods.factorio.com";

/// Default manifest filename, relative to the workspace root
pub const DEFAULT_MANIFEST: &str = "info.json";

/// Everything one publish run needs, resolved up front.
///
/// The CI host injects the tag and workspace through `GITHUB_REF_NAME` and
/// `GITHUB_WORKSPACE`; the API key through `FACTORIO_API_KEY`. All three can
/// also be passed as flags, which take precedence.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Bearer token for all portal calls. Registered with the redactor
    /// before anything else touches it.
    pub api_key: String,
    /// Raw tag from the triggering event, e.g. "v1.2.3"
    pub raw_tag: String,
    /// Base directory for archive output and the manifest
    pub workspace: PathBuf,
    /// Portal base URL (overridable for testing)
    pub portal_url: String,
    /// Manifest path relative to the workspace root
    pub manifest_path: PathBuf,
}

impl PublishConfig {
    /// Resolve configuration from optional inputs, failing on missing
    /// required values.
    pub fn resolve(
        api_key: Option<String>,
        raw_tag: Option<String>,
        workspace: Option<PathBuf>,
        portal_url: Option<String>,
        manifest_path: Option<PathBuf>,
    ) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or(ConfigError::MissingInput {
            name: "portal API key",
            env_var: "FACTORIO_API_KEY",
            flag: "api-key",
        })?;

        let raw_tag = raw_tag.filter(|t| !t.is_empty()).ok_or(ConfigError::MissingInput {
            name: "triggering tag",
            env_var: "GITHUB_REF_NAME",
            flag: "tag",
        })?;

        let workspace = workspace.unwrap_or_else(|| PathBuf::from("."));
        if !workspace.is_dir() {
            return Err(ConfigError::WorkspaceNotFound { path: workspace }.into());
        }

        Ok(Self {
            api_key,
            raw_tag,
            workspace,
            portal_url: portal_url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string()),
            manifest_path: manifest_path.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
        })
    }

    /// Absolute path of the manifest file
    pub fn manifest_file(&self) -> PathBuf {
        self.workspace.join(&self.manifest_path)
    }
}
