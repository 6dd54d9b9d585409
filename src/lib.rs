//! # mod_portal_release
//!
//! Publish mod releases to the Factorio mod portal from git tag events.
//!
//! One invocation runs a single sequential procedure: validate that the
//! local `info.json` declares the version named by the triggering tag, check
//! the portal for an existing release of that version, export the tagged
//! tree to a zip with `git archive`, then upload it through the portal's
//! two-step (init-upload, upload) protocol.
//!
//! ## Usage
//!
//! ```bash
//! export FACTORIO_API_KEY=...   # never printed; redacted from all output
//! export GITHUB_REF_NAME=v1.2.3
//! export GITHUB_WORKSPACE=/path/to/mod
//! mod_portal_release
//! ```
//!
//! Re-running on an already-published tag is a successful no-op.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod portal;
pub mod publish;
pub mod version;

// Re-export main types for public API
pub use cli::{Args, OutputManager, Redactor, SecretRedactor};
pub use config::PublishConfig;
pub use error::{
    ArchiveError, ConfigError, ManifestError, PublishError, RegistryError, Result, VersionError,
};
pub use manifest::ModManifest;
pub use portal::PortalClient;
pub use publish::{PublishOutcome, Publisher};
pub use version::normalize_tag;
