//! Tag normalization and the version match gate.

use crate::error::{Result, VersionError};
use crate::manifest::ModManifest;

/// Strip exactly one leading `v` from a tag, if present.
///
/// `"v1.2.3"` becomes `"1.2.3"`; `"1.2.3"` is returned unchanged. No other
/// normalization happens: no whitespace trim, no case folding.
pub fn normalize_tag(raw_tag: &str) -> &str {
    raw_tag.strip_prefix('v').unwrap_or(raw_tag)
}

/// Ensure the manifest version matches the normalized tag byte-for-byte.
///
/// This gate runs before any archive creation or upload call; a mismatch
/// means the repository contents would disagree with the declared version.
pub fn ensure_version_matches(manifest: &ModManifest, normalized_tag: &str) -> Result<()> {
    if manifest.version != normalized_tag {
        return Err(VersionError::TagMismatch {
            manifest: manifest.version.clone(),
            tag: normalized_tag.to_string(),
        }
        .into());
    }
    Ok(())
}
