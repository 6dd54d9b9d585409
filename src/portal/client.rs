//! HTTP client for the mod portal's release API.

use std::path::Path;

use tokio_util::io::ReaderStream;

use crate::error::{RegistryError, Result};

use super::types::{ApiResponse, InitUpload, ModPage};

/// Client for the three portal calls a publish run makes: release query,
/// upload-session initiation, and file upload.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PortalClient {
    /// Create a client against `base_url` authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch the public mod page with its release list.
    ///
    /// This endpoint needs no authentication. A non-success status (including
    /// 404 for a mod that has no portal page yet) is a registry error.
    pub async fn releases(&self, name: &str) -> Result<ModPage> {
        let url = format!("{}/api/mods/{}", self.base_url, name);
        let response = self.http.get(&url).send().await.map_err(RegistryError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(RegistryError::Http)?;

        if !status.is_success() {
            return Err(RegistryError::ReleaseQueryFailed {
                package: name.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        match serde_json::from_str::<ApiResponse<ModPage>>(&body) {
            Ok(ApiResponse::Ok(page)) => Ok(page),
            _ => Err(RegistryError::ReleaseQueryFailed {
                package: name.to_string(),
                status: status.as_u16(),
                body,
            }
            .into()),
        }
    }

    /// Request a one-time upload URL for `name`.
    ///
    /// Form-encoded `mod=<name>` with bearer auth. An error-shaped body, a
    /// non-success status, or an undecodable body all fail with the HTTP
    /// status and raw body attached.
    pub async fn init_upload(&self, name: &str) -> Result<String> {
        let url = format!("{}/api/v2/mods/releases/init_upload", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .form(&[("mod", name)])
            .send()
            .await
            .map_err(RegistryError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(RegistryError::Http)?;

        if status.is_success()
            && let Ok(ApiResponse::Ok(InitUpload { upload_url })) =
                serde_json::from_str::<ApiResponse<InitUpload>>(&body)
        {
            return Ok(upload_url);
        }

        Err(RegistryError::InitUploadFailed {
            package: name.to_string(),
            status: status.as_u16(),
            body,
        }
        .into())
    }

    /// Stream the archive to the one-time upload URL as multipart field
    /// `file`, with bearer auth.
    ///
    /// The portal can answer 200 with an error envelope, so the body is
    /// checked for an error shape even on success statuses.
    pub async fn upload(&self, name: &str, upload_url: &str, archive: &Path) -> Result<()> {
        let file_name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{name}.zip"));

        let file = tokio::fs::File::open(archive).await?;
        let part = reqwest::multipart::Part::stream(reqwest::Body::wrap_stream(
            ReaderStream::new(file),
        ))
        .file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(upload_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(RegistryError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(RegistryError::Http)?;

        let error_shaped = matches!(
            serde_json::from_str::<ApiResponse<serde_json::Value>>(&body),
            Ok(ApiResponse::Err(_))
        );

        if !status.is_success() || error_shaped {
            return Err(RegistryError::UploadFailed {
                package: name.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }
}
