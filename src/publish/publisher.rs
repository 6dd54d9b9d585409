//! The sequential publish procedure, from tag validation to upload.

use std::path::PathBuf;

use crate::archive::create_archive;
use crate::cli::OutputManager;
use crate::config::PublishConfig;
use crate::error::Result;
use crate::manifest::ModManifest;
use crate::portal::PortalClient;
use crate::version::{ensure_version_matches, normalize_tag};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The archive was uploaded to the portal
    Published {
        /// Mod name
        name: String,
        /// Published version
        version: String,
        /// Archive left on disk
        archive: PathBuf,
    },
    /// The portal already has this version; nothing was uploaded
    AlreadyPublished {
        /// Mod name
        name: String,
        /// Version that already exists
        version: String,
    },
}

/// Runs one publish procedure to completion or failure.
///
/// Each step gates the next; there are no retries and no rollback. A failed
/// upload leaves the archive on disk.
pub struct Publisher {
    config: PublishConfig,
    client: PortalClient,
    output: OutputManager,
}

impl Publisher {
    /// Create a publisher from resolved configuration.
    ///
    /// The API key must already be registered with the output redactor.
    pub fn new(config: PublishConfig, output: OutputManager) -> Self {
        let client = PortalClient::new(&config.portal_url, &config.api_key);
        Self {
            config,
            client,
            output,
        }
    }

    /// Validate the tag, check the portal, archive the tree, and upload.
    ///
    /// Re-running on a tag whose version is already on the portal is a
    /// successful no-op, so the whole procedure is idempotent per version.
    pub async fn publish(&self) -> Result<PublishOutcome> {
        let tag = normalize_tag(&self.config.raw_tag);
        log::debug!("parsed tag: {tag}");

        let manifest = ModManifest::load(&self.config.manifest_file())?;
        log::debug!("parsed manifest: {} {}", manifest.name, manifest.version);

        // The gate: nothing with side effects runs past a mismatch.
        ensure_version_matches(&manifest, tag)?;

        let page = self.client.releases(&manifest.name).await?;
        if page.has_version(&manifest.version) {
            self.output.warn(&format!(
                "a release for {} version {} already exists on the mod portal; skipped uploading this version",
                manifest.name, manifest.version
            ));
            return Ok(PublishOutcome::AlreadyPublished {
                name: manifest.name,
                version: manifest.version,
            });
        }

        self.output.println(&format!(
            "a release for version {} doesn't exist; proceeding with upload",
            manifest.version
        ));

        // Archive export completes, checked, before any upload call.
        let archive =
            create_archive(&self.config.workspace, &manifest, &self.config.raw_tag).await?;
        self.output.println(&format!("created archive {}", archive.display()));

        let upload_url = self.client.init_upload(&manifest.name).await?;
        log::debug!("got upload url");

        self.client
            .upload(&manifest.name, &upload_url, &archive)
            .await?;

        self.output.success(&format!(
            "upload of {} version {} succeeded!",
            manifest.name, manifest.version
        ));

        Ok(PublishOutcome::Published {
            name: manifest.name,
            version: manifest.version,
            archive,
        })
    }
}
