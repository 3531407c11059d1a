//! # Image upload — profile pictures to an external image host
//!
//! [`ImageHost`] is the seam between the registration flow and whatever hosts
//! the pictures. [`ImgbbClient`] is the production implementation: one
//! multipart `POST` to the configured endpoint with the file in a field named
//! `image`, answered by JSON of the shape
//!
//! ```json
//! {"data": {"display_url": "https://i.ibb.co/..."}}
//! ```
//!
//! Any transport error, non-2xx status, or differently shaped body is an
//! [`UploadError`]. There is no retry and no timeout: a hung request simply
//! never resolves.

use serde::Deserialize;

use crate::config::ImageHostConfig;

/// Multipart field the image host expects the file under.
pub const IMAGE_FIELD: &str = "image";

/// An image the user picked, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("image host unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("image host rejected the upload with status {status}")]
    Rejected { status: u16 },
    #[error("unexpected response from image host: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("image host API key is not configured")]
    NotConfigured,
    #[error("selected file has an unusable content type {0:?}")]
    InvalidContentType(String),
}

/// Something that can turn an image into a public display URL.
pub trait ImageHost {
    fn upload(
        &self,
        image: ImageFile,
    ) -> impl std::future::Future<Output = Result<String, UploadError>>;
}

#[derive(Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Deserialize)]
struct UploadData {
    display_url: String,
}

/// Extract the display URL from an image host response body.
pub fn parse_upload_response(body: &str) -> Result<String, UploadError> {
    let response: UploadResponse = serde_json::from_str(body).map_err(UploadError::Malformed)?;
    Ok(response.data.display_url)
}

/// imgBB-compatible upload client.
#[derive(Clone, Debug)]
pub struct ImgbbClient {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl ImgbbClient {
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: Some(config.endpoint()),
        }
    }

    /// A client with no API key. Every upload fails with
    /// [`UploadError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl ImageHost for ImgbbClient {
    async fn upload(&self, image: ImageFile) -> Result<String, UploadError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Err(UploadError::NotConfigured);
        };

        let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.name);
        // Browsers report an empty type when they cannot guess one.
        if let Some(mime) = image.content_type.as_deref().filter(|m| !m.trim().is_empty()) {
            part = part
                .mime_str(mime)
                .map_err(|_| UploadError::InvalidContentType(mime.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(UploadError::Network)?;
        parse_upload_response(&body)
    }
}
