//! Gemini gateway implementation

use crate::gemini::client::{GeminiClient, GeminiSettings};
use crate::gemini::credentials::ApiKeyStore;
use crate::gemini::error::GeminiError;
use crate::gemini::protocol::{
    Content, GenerateContentRequest, GenerateContentResponse, Operation, Part, PredictRequest,
    VideoImage, VideoInstance, VideoParameters,
};
use crate::gemini::session::GeminiSession;
use async_trait::async_trait;
use belajar_application::{AiGateway, GatewayError, TutorSession, VideoGateway, VideoOperation};
use belajar_domain::{ImageDataUri, VideoRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Gateway for chat, image and video generation over the Gemini REST API
pub struct GeminiGateway {
    client: Arc<GeminiClient>,
}

impl GeminiGateway {
    pub fn new(keys: ApiKeyStore, settings: GeminiSettings) -> Self {
        info!(
            "GeminiGateway initialized (chat: {}, image: {}, video: {})",
            settings.chat_model, settings.image_model, settings.video_model
        );
        Self {
            client: Arc::new(GeminiClient::new(keys, settings)),
        }
    }

    fn predict_request(&self, request: &VideoRequest) -> PredictRequest {
        PredictRequest {
            instances: vec![VideoInstance {
                prompt: None,
                image: VideoImage {
                    bytes_base64_encoded: request.image.data.clone(),
                    mime_type: request.image.mime_type.clone(),
                },
            }],
            parameters: VideoParameters {
                aspect_ratio: request.aspect_ratio.as_str().to_string(),
                resolution: self.client.settings().video_resolution.clone(),
                sample_count: 1,
            },
        }
    }

    async fn read_operation(response: reqwest::Response) -> Result<VideoOperation, GeminiError> {
        let operation: Operation = response.json().await?;
        if let Some(error) = operation.error {
            return Err(GeminiError::Operation(error.message));
        }
        debug!("Operation {} done={}", operation.name, operation.done);
        let video_uri = operation.video_uri();
        Ok(VideoOperation {
            name: operation.name,
            done: operation.done,
            video_uri,
        })
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn start_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn TutorSession>, GatewayError> {
        debug!("Starting chat session");
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.client),
            system_instruction,
        )))
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImageDataUri, GatewayError> {
        let settings = self.client.settings();
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(settings.image_config()),
        };
        let path = format!("models/{}:generateContent", settings.image_model);

        let response = self.client.post_json(&path, &request).await?;
        let body: GenerateContentResponse = response.json().await.map_err(GeminiError::from)?;

        let blob = body
            .first_inline_data()
            .ok_or(GatewayError::NoImageReturned)?;
        info!("Image generated ({} base64 chars)", blob.data.len());
        Ok(ImageDataUri::png_from_base64(&blob.data))
    }
}

#[async_trait]
impl VideoGateway for GeminiGateway {
    async fn submit(&self, request: &VideoRequest) -> Result<VideoOperation, GatewayError> {
        let path = format!(
            "models/{}:predictLongRunning",
            self.client.settings().video_model
        );
        let response = self
            .client
            .post_json(&path, &self.predict_request(request))
            .await?;
        Ok(Self::read_operation(response).await?)
    }

    async fn poll(&self, operation: &VideoOperation) -> Result<VideoOperation, GatewayError> {
        let response = self.client.get(&operation.name).await?;
        Ok(Self::read_operation(response).await?)
    }

    async fn download(&self, uri: &str) -> Result<Vec<u8>, GatewayError> {
        Ok(self.client.download(uri).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belajar_domain::{AspectRatio, InlineImage};

    fn gateway(key: Option<&str>) -> GeminiGateway {
        GeminiGateway::new(
            ApiKeyStore::new(key.map(str::to_string)),
            GeminiSettings {
                base_url: "http://127.0.0.1:9".to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_predict_request_uses_settings() {
        let request = gateway(Some("k")).predict_request(&VideoRequest {
            image: InlineImage {
                mime_type: "image/jpeg".into(),
                data: "AQID".into(),
            },
            aspect_ratio: AspectRatio::Portrait,
        });
        assert_eq!(request.parameters.aspect_ratio, "9:16");
        assert_eq!(request.parameters.resolution, "720p");
        assert_eq!(request.parameters.sample_count, 1);
        assert_eq!(request.instances[0].image.bytes_base64_encoded, "AQID");
    }

    #[tokio::test]
    async fn test_start_session_needs_no_network() {
        assert!(gateway(None).start_session("Kamu adalah Fadel").await.is_ok());
    }

    #[tokio::test]
    async fn test_image_without_key_is_credential_error() {
        let err = gateway(None).generate_image("kucing").await.unwrap_err();
        assert!(err.is_credential_error());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_failure() {
        let err = gateway(Some("k")).generate_image("kucing").await.unwrap_err();
        assert!(matches!(err, GatewayError::TransportFailure(_)));
    }
}
