//! Error types for mod portal release operations.
//!
//! This module defines all error types with actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mod portal release operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Main error type for all release operations
#[derive(Error, Debug)]
pub enum PublishError {
    /// Missing or invalid run configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest could not be read or parsed
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Manifest version disagrees with the triggering tag
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Archive export failed
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Mod portal API returned an error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required input was not provided by flag or environment
    #[error("Missing required input '{name}'. Set the {env_var} environment variable or pass --{flag}.")]
    MissingInput {
        /// Human-readable input name
        name: &'static str,
        /// Environment variable consulted
        env_var: &'static str,
        /// CLI flag alternative
        flag: &'static str,
    },

    /// Workspace root does not exist
    #[error("Workspace directory not found: {path}")]
    WorkspaceNotFound {
        /// Configured workspace path
        path: PathBuf,
    },
}

/// Manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("Failed to read manifest at {path}: {source}")]
    ReadFailed {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON or misses required fields
    #[error("Failed to parse manifest at {path}: {source}")]
    ParseFailed {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Version validation errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Manifest version does not match the tag version
    #[error(
        "version in manifest ({manifest}) does not match tag version ({tag})! did you forget to update the manifest?"
    )]
    TagMismatch {
        /// Version declared in the manifest
        manifest: String,
        /// Normalized version from the triggering tag
        tag: String,
    },
}

/// Archive export errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// git archive could not be spawned
    #[error("Failed to run git archive: {source}")]
    SpawnFailed {
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// git archive exited with a nonzero status
    #[error("git archive failed for ref '{tree_ref}': {stderr}")]
    CommandFailed {
        /// Tree reference passed to git archive
        tree_ref: String,
        /// Captured stderr output
        stderr: String,
    },
}

/// Mod portal API errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Release list query failed
    #[error("release query for '{package}' failed: {status} | {body}")]
    ReleaseQueryFailed {
        /// Mod name queried
        package: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// init_upload returned an error-shaped response
    #[error("getting an upload URL for '{package}' failed: {status} | {body}")]
    InitUploadFailed {
        /// Mod name being uploaded
        package: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// File upload returned an error-shaped response
    #[error("uploading '{package}' failed: {status} | {body}")]
    UploadFailed {
        /// Mod name being uploaded
        package: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("mod portal request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl PublishError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PublishError::Config(ConfigError::MissingInput { env_var, flag, .. }) => vec![
                format!("Export the variable: export {env_var}=..."),
                format!("Or pass it explicitly: --{flag} <value>"),
            ],
            PublishError::Version(VersionError::TagMismatch { .. }) => vec![
                "Update the 'version' field in info.json to match the tag".to_string(),
                "Or re-tag the commit with the manifest's version".to_string(),
            ],
            PublishError::Registry(RegistryError::ReleaseQueryFailed { package, .. }) => vec![
                format!("Check that mod '{package}' exists on the portal"),
                "A mod page must be created manually before its first upload".to_string(),
            ],
            PublishError::Registry(RegistryError::InitUploadFailed { .. }) => vec![
                "Verify the API key is valid and has ModPortal: Upload Mods permission"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
