//! Zip archive export via `git archive`.
//!
//! Using git's own export keeps `.gitattributes` `export-ignore` rules in
//! effect, so mod authors control what ends up in the published zip.

use std::path::{Path, PathBuf};

use crate::error::{ArchiveError, Result};
use crate::manifest::ModManifest;

/// Export the tree at `tree_ref` into `<workspace>/<name>_<version>.zip`.
///
/// The archive is rooted at a single top-level directory named after the mod,
/// which is the layout the portal expects. The subprocess is awaited and its
/// exit status checked; a nonzero exit surfaces the captured stderr.
pub async fn create_archive(
    workspace: &Path,
    manifest: &ModManifest,
    tree_ref: &str,
) -> Result<PathBuf> {
    let archive_path = workspace.join(manifest.archive_name());
    let prefix = format!("{}/", manifest.name);

    log::debug!(
        "running git archive for ref '{}' into {}",
        tree_ref,
        archive_path.display()
    );

    let output = tokio::process::Command::new("git")
        .arg("archive")
        .arg("--prefix")
        .arg(&prefix)
        .arg("-o")
        .arg(&archive_path)
        .arg(tree_ref)
        .current_dir(workspace)
        .output()
        .await
        .map_err(|e| ArchiveError::SpawnFailed { source: e })?;

    if !output.status.success() {
        return Err(ArchiveError::CommandFailed {
            tree_ref: tree_ref.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    Ok(archive_path)
}
