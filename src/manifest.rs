//! Mod manifest (`info.json`) loading.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ManifestError, Result};

/// The fields of `info.json` this tool cares about.
///
/// The file carries more (title, author, dependencies, ...); everything
/// beyond name and version is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ModManifest {
    /// Mod name, the portal's package key
    pub name: String,
    /// Declared version, must match the triggering tag exactly
    pub version: String,
}

impl ModManifest {
    /// Read and parse the manifest file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let manifest =
            serde_json::from_str(&content).map_err(|e| ManifestError::ParseFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(manifest)
    }

    /// Archive filename for this manifest: `<name>_<version>.zip`
    pub fn archive_name(&self) -> String {
        format!("{}_{}.zip", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PublishError;
    use std::io::Write;

    fn write_manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp manifest");
        file.write_all(content.as_bytes()).expect("write manifest");
        file
    }

    #[test]
    fn parses_name_and_version() {
        let file = write_manifest(r#"{"name": "foo", "version": "1.0.0"}"#);
        let manifest = ModManifest::load(file.path()).unwrap();
        assert_eq!(manifest.name, "foo");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.archive_name(), "foo_1.0.0.zip");
    }

    #[test]
    fn ignores_extra_fields() {
        let file = write_manifest(
            r#"{
                "name": "foo",
                "version": "1.0.0",
                "title": "Foo Mod",
                "author": "someone",
                "factorio_version": "1.1",
                "dependencies": ["base >= 1.1"]
            }"#,
        );
        let manifest = ModManifest::load(file.path()).unwrap();
        assert_eq!(manifest.name, "foo");
    }

    #[test]
    fn missing_version_field_is_a_parse_error() {
        let file = write_manifest(r#"{"name": "foo"}"#);
        let err = ModManifest::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PublishError::Manifest(ManifestError::ParseFailed { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_manifest("not json at all");
        let err = ModManifest::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PublishError::Manifest(ManifestError::ParseFailed { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ModManifest::load(Path::new("/nonexistent/info.json")).unwrap_err();
        assert!(matches!(
            err,
            PublishError::Manifest(ManifestError::ReadFailed { .. })
        ));
    }
}
