//! Image host configuration from environment variables.
//!
//! Native builds read the process environment (after loading a `.env` file);
//! wasm builds have no process environment, so the same variables are baked in
//! at compile time.

/// Variable holding the image host API key.
pub const API_KEY_VAR: &str = "IMAGE_HOSTING_KEY";
/// Optional override for the upload endpoint.
pub const UPLOAD_URL_VAR: &str = "IMAGE_HOSTING_URL";

pub const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingKey(&'static str),
}

/// Where and how to upload profile pictures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHostConfig {
    pub api_key: String,
    pub upload_url: String,
}

impl ImageHostConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }

    /// Builder method to point uploads at a different host.
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Create config from environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR).ok();
        let upload_url = std::env::var(UPLOAD_URL_VAR).ok();
        Self::from_values(api_key, upload_url)
    }

    /// Create config from variables captured at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("IMAGE_HOSTING_KEY").map(str::to_string),
            option_env!("IMAGE_HOSTING_URL").map(str::to_string),
        )
    }

    fn from_values(
        api_key: Option<String>,
        upload_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingKey(API_KEY_VAR))?;
        let config = Self::new(api_key);
        Ok(match upload_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => config.with_upload_url(url),
            None => config,
        })
    }

    /// Full upload URL with the API key as a query parameter.
    pub fn endpoint(&self) -> String {
        format!("{}?key={}", self.upload_url, self.api_key)
    }
}
