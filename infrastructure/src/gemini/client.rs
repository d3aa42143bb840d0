//! Low-level HTTP client for the Gemini REST API.

use crate::gemini::credentials::ApiKeyStore;
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::GenerationConfig;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Models and generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    pub video_model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub video_resolution: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            chat_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            video_model: "veo-3.1-fast-generate-preview".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            video_resolution: "720p".to_string(),
        }
    }
}

impl GeminiSettings {
    pub fn chat_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(self.temperature),
            top_p: Some(self.top_p),
            response_modalities: None,
        }
    }

    pub fn image_config(&self) -> GenerationConfig {
        GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..Default::default()
        }
    }

    /// `{base}/v1beta/{path}`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/v1beta/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// HTTP client shared by sessions and the gateway
pub struct GeminiClient {
    http: Client,
    keys: ApiKeyStore,
    settings: GeminiSettings,
}

impl GeminiClient {
    pub fn new(keys: ApiKeyStore, settings: GeminiSettings) -> Self {
        Self {
            http: Client::new(),
            keys,
            settings,
        }
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn api_key(&self) -> Result<String> {
        self.keys.get().ok_or(GeminiError::MissingApiKey)
    }

    /// POST a JSON body; non-success statuses become [`GeminiError::Api`].
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.settings.url(path);
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.api_key()?)
            .json(body)
            .send()
            .await?;
        check_status(response).await
    }

    /// GET a resource path (e.g. an operation name).
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.settings.url(path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key()?)
            .send()
            .await?;
        check_status(response).await
    }

    /// Fetch generated media from an absolute download link.
    ///
    /// The key travels as a query parameter; failures keep status and body.
    pub async fn download(&self, uri: &str) -> Result<Vec<u8>> {
        debug!("Downloading {}", uri);
        let response = self
            .http
            .get(uri)
            .query(&[("key", self.api_key()?)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Download {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GeminiError::Api {
        status: status.as_u16(),
        body,
    })
}
