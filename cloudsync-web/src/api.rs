//! HTTP client for the image import API
//!
//! Wire types mirror the api-gateway responses; the public functions map
//! them into the display types the views consume.

use crate::config;
use cloudsync_ui::display_types::{ImageRecord, ImageSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by API calls
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Parse error: {0}")]
    Decode(reqwest::Error),
    #[error("Server error: {0}")]
    Status(reqwest::StatusCode),
}

/// Image record as returned by the listing endpoint. Carries the full wire
/// shape; only a subset reaches the display type.
#[derive(Deserialize)]
#[allow(dead_code)]
struct ApiImage {
    id: i64,
    name: String,
    #[serde(default)]
    google_drive_id: Option<String>,
    size: i64,
    #[serde(default)]
    mime_type: Option<String>,
    storage_path: String,
    source: String,
    #[serde(default)]
    created_at: Option<String>,
}

/// Listing envelope
#[derive(Deserialize)]
struct ImagesEnvelope {
    images: Vec<ApiImage>,
    count: usize,
}

#[derive(Serialize)]
struct ImportRequest<'a> {
    folder_url: &'a str,
}

/// Acknowledgment returned by both import endpoints (202)
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ImportQueued {
    pub message: String,
    pub task_id: String,
}

fn images_url(base: &str, filter: Option<ImageSource>) -> String {
    match filter {
        Some(source) => format!("{base}/images?source={}", source.as_tag()),
        None => format!("{base}/images"),
    }
}

fn import_url(base: &str, provider: ImageSource) -> String {
    let endpoint = match provider {
        ImageSource::GoogleDrive => "/import/google-drive",
        ImageSource::Dropbox => "/import/dropbox",
    };
    format!("{base}{endpoint}")
}

fn into_records(images: Vec<ApiImage>) -> Vec<ImageRecord> {
    images
        .into_iter()
        .filter_map(|image| {
            let Some(source) = ImageSource::from_tag(&image.source) else {
                warn!(
                    id = image.id,
                    source = %image.source,
                    "skipping image with unknown source tag"
                );
                return None;
            };
            Some(ImageRecord {
                id: image.id,
                name: image.name,
                storage_path: image.storage_path,
                size: image.size,
                source,
            })
        })
        .collect()
}

/// Fetch the image collection, optionally scoped to one provider
pub async fn fetch_images(filter: Option<ImageSource>) -> Result<Vec<ImageRecord>, ApiError> {
    let url = images_url(config::api_base_url(), filter);
    let resp = reqwest::get(&url).await.map_err(ApiError::Network)?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status()));
    }

    let envelope: ImagesEnvelope = resp.json().await.map_err(ApiError::Decode)?;
    debug!(count = envelope.count, "loaded image listing");

    Ok(into_records(envelope.images))
}

/// Ask the backend to start importing a provider folder
pub async fn start_import(
    provider: ImageSource,
    folder_url: &str,
) -> Result<ImportQueued, ApiError> {
    let url = import_url(config::api_base_url(), provider);
    let resp = reqwest::Client::new()
        .post(&url)
        .json(&ImportRequest { folder_url })
        .send()
        .await
        .map_err(ApiError::Network)?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.json().await.map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_listing_omits_source_param() {
        assert_eq!(images_url("", None), "/images");
        assert_eq!(images_url("http://localhost:8000", None), "http://localhost:8000/images");
    }

    #[test]
    fn filtered_listing_appends_tag_verbatim() {
        assert_eq!(
            images_url("", Some(ImageSource::GoogleDrive)),
            "/images?source=google_drive"
        );
        assert_eq!(
            images_url("http://api", Some(ImageSource::Dropbox)),
            "http://api/images?source=dropbox"
        );
    }

    #[test]
    fn import_url_selects_provider_endpoint() {
        assert_eq!(import_url("", ImageSource::Dropbox), "/import/dropbox");
        assert_eq!(
            import_url("http://api", ImageSource::GoogleDrive),
            "http://api/import/google-drive"
        );
    }

    #[test]
    fn import_request_serializes_folder_url() {
        let body = serde_json::to_value(ImportRequest {
            folder_url: "https://drive.google.com/drive/folders/abc",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "folder_url": "https://drive.google.com/drive/folders/abc" })
        );
    }

    #[test]
    fn listing_envelope_decodes_wire_shape() {
        let envelope: ImagesEnvelope = serde_json::from_str(
            r#"{
                "images": [
                    {
                        "id": 1,
                        "name": "sunset.jpg",
                        "google_drive_id": "1AbC",
                        "size": 2048,
                        "mime_type": "image/jpeg",
                        "storage_path": "https://bucket.s3.amazonaws.com/sunset.jpg",
                        "source": "google_drive",
                        "created_at": "2024-03-01T12:00:00"
                    },
                    {
                        "id": 2,
                        "name": "beach.png",
                        "google_drive_id": null,
                        "size": 512,
                        "mime_type": null,
                        "storage_path": "https://bucket.s3.amazonaws.com/beach.png",
                        "source": "dropbox",
                        "created_at": null
                    }
                ],
                "count": 2
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.count, 2);

        let records = into_records(envelope.images);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].source, ImageSource::GoogleDrive);
        assert_eq!(records[0].size, 2048);
        assert_eq!(records[1].source, ImageSource::Dropbox);
        assert_eq!(records[1].storage_path, "https://bucket.s3.amazonaws.com/beach.png");
    }

    #[test]
    fn unknown_source_tags_are_skipped() {
        let envelope: ImagesEnvelope = serde_json::from_str(
            r#"{
                "images": [
                    { "id": 1, "name": "a.jpg", "size": 10, "storage_path": "/a.jpg", "source": "icloud" },
                    { "id": 2, "name": "b.jpg", "size": 20, "storage_path": "/b.jpg", "source": "dropbox" }
                ],
                "count": 2
            }"#,
        )
        .unwrap();

        let records = into_records(envelope.images);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn import_queued_decodes() {
        let queued: ImportQueued = serde_json::from_str(
            r#"{ "message": "Import job queued", "task_id": "f1f2f3" }"#,
        )
        .unwrap();
        assert_eq!(queued.message, "Import job queued");
        assert_eq!(queued.task_id, "f1f2f3");
    }
}
