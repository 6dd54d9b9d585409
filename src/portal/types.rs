//! Typed payloads for the mod portal API.

use serde::Deserialize;

/// Public mod page, as returned by `GET /api/mods/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModPage {
    /// Published releases for this mod
    #[serde(default)]
    pub releases: Vec<PortalRelease>,
}

impl ModPage {
    /// Whether a release with exactly this version string already exists.
    pub fn has_version(&self, version: &str) -> bool {
        self.releases.iter().any(|r| r.version == version)
    }
}

/// One published release on the portal
#[derive(Debug, Clone, Deserialize)]
pub struct PortalRelease {
    /// Version string of the release
    pub version: String,
}

/// Successful `init_upload` response
#[derive(Debug, Clone, Deserialize)]
pub struct InitUpload {
    /// One-time URL, valid for a single file upload
    pub upload_url: String,
}

/// Error-shaped portal response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub error: String,
    /// Optional human-readable detail
    #[serde(default)]
    pub message: Option<String>,
}

/// Portal responses are either an error envelope or the expected payload.
///
/// The error variant is tried first so an error body can never be mistaken
/// for a success payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// Error envelope (`{ "error": ..., "message": ... }`)
    Err(ApiError),
    /// Expected payload
    Ok(T),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_page_finds_existing_version() {
        let page: ModPage = serde_json::from_str(
            r#"{"releases": [{"version": "0.9.0"}, {"version": "1.0.0"}]}"#,
        )
        .unwrap();
        assert!(page.has_version("1.0.0"));
        assert!(!page.has_version("1.0.1"));
    }

    #[test]
    fn mod_page_tolerates_missing_releases() {
        let page: ModPage = serde_json::from_str(r#"{"name": "foo"}"#).unwrap();
        assert!(page.releases.is_empty());
    }

    #[test]
    fn error_body_decodes_as_error_variant() {
        let res: ApiResponse<InitUpload> = serde_json::from_str(
            r#"{"error": "InvalidApiKey", "message": "Missing or invalid API key"}"#,
        )
        .unwrap();
        assert!(matches!(res, ApiResponse::Err(ApiError { error, .. }) if error == "InvalidApiKey"));
    }

    #[test]
    fn upload_url_decodes_as_ok_variant() {
        let res: ApiResponse<InitUpload> =
            serde_json::from_str(r#"{"upload_url": "https://portal/upload/abc"}"#).unwrap();
        assert!(
            matches!(res, ApiResponse::Ok(InitUpload { upload_url }) if upload_url.ends_with("/abc"))
        );
    }
}
