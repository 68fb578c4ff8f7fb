//! License file flows between local files and the backend.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use licensehub_client::BinaryPayload;
use licensehub_client::api::{LicenseApi, LicenseFile};
use licensehub_core::error::AppError;
use licensehub_core::result::AppResult;

/// Archive name used when the backend does not name the activation result.
const DEFAULT_ARCHIVE_NAME: &str = "licenses.zip";

/// Downloads, activates and transfers licenses.
#[derive(Debug, Clone)]
pub struct LicenseService {
    api: LicenseApi,
}

impl LicenseService {
    /// Creates a new license service.
    pub fn new(api: LicenseApi) -> Self {
        Self { api }
    }

    /// Download a license file into `dir` and return its path.
    pub async fn download_to(&self, license_id: &str, dir: &Path) -> AppResult<PathBuf> {
        let payload = self.api.download(license_id).await?;
        let fallback = format!("license_{license_id}.lic");
        let path = save(dir, &payload, &fallback).await?;

        info!(license_id, path = %path.display(), bytes = payload.bytes.len(), "License downloaded");
        Ok(path)
    }

    /// Upload device binding files for activation and save the returned
    /// archive into `out_dir`.
    pub async fn activate_files(
        &self,
        authorization_code: &str,
        files: &[PathBuf],
        out_dir: &Path,
    ) -> AppResult<PathBuf> {
        if files.is_empty() {
            return Err(AppError::validation("At least one binding file is required"));
        }

        let mut uploads = Vec::with_capacity(files.len());
        for file in files {
            uploads.push(read_upload(file).await?);
        }

        let payload = self.api.activate(authorization_code, uploads).await?;
        let path = save(out_dir, &payload, DEFAULT_ARCHIVE_NAME).await?;

        info!(files = files.len(), path = %path.display(), "Licenses activated");
        Ok(path)
    }

    /// Move devices from one authorization code to another.
    pub async fn transfer(&self, from_code: &str, to_code: &str, device_ids: &[String]) -> AppResult<Value> {
        if device_ids.is_empty() {
            return Err(AppError::validation("At least one device id is required"));
        }

        let result = self.api.transfer(from_code, to_code, device_ids).await?;
        info!(devices = device_ids.len(), "License transfer submitted");
        Ok(result)
    }
}

async fn read_upload(path: &Path) -> AppResult<LicenseFile> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::validation(format!("Cannot read '{}': {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::validation(format!("'{}' is not a file", path.display())))?;

    Ok(LicenseFile {
        name,
        content: Bytes::from(content),
    })
}

/// Write a payload under `dir`, keeping only the last component of the
/// name the backend suggests.
async fn save(dir: &Path, payload: &BinaryPayload, fallback: &str) -> AppResult<PathBuf> {
    let name = payload
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string());

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, &payload.bytes).await?;
    Ok(path)
}
