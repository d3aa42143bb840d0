//! Gemini REST protocol types.
//!
//! Request and response bodies for `generateContent`,
//! `streamGenerateContent`, `predictLongRunning` and operation polling.
//! Field names follow the API's camelCase JSON.

use serde::{Deserialize, Serialize};

/// One turn of conversation (or the system instruction)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// System instruction content (no role)
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part::text(text)],
        }
    }
}

/// A text or inline-data part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 payload with its MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Error object embedded in a response or operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|content| content.parts.iter())
    }

    /// Concatenated text of the first candidate
    pub fn text(&self) -> String {
        self.parts().filter_map(|p| p.text.as_deref()).collect()
    }

    /// First inline-data part of the first candidate
    pub fn first_inline_data(&self) -> Option<&Blob> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

// ==================== Video (predictLongRunning) ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<VideoInstance>,
    pub parameters: VideoParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub image: VideoImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoImage {
    pub bytes_base64_encoded: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    pub aspect_ratio: String,
    pub resolution: String,
    pub sample_count: u32,
}

/// Long-running operation as returned by submit and poll
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<OperationResponse>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedSample {
    #[serde(default)]
    pub video: Option<VideoRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoRef {
    #[serde(default)]
    pub uri: Option<String>,
}

impl Operation {
    /// Download link of the first generated video, if any
    pub fn video_uri(&self) -> Option<String> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_shape() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system("Kamu adalah Fadel")),
            contents: vec![
                Content::user(vec![Part::text("Apa itu fotosintesis?"), Part::inline("image/jpeg", "AQID")]),
                Content::model("Fotosintesis adalah..."),
            ],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.5),
                top_p: Some(0.5),
                response_modalities: None,
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [{ "text": "Kamu adalah Fadel" }] },
                "contents": [
                    {
                        "role": "user",
                        "parts": [
                            { "text": "Apa itu fotosintesis?" },
                            { "inlineData": { "mimeType": "image/jpeg", "data": "AQID" } }
                        ]
                    },
                    { "role": "model", "parts": [{ "text": "Fotosintesis adalah..." }] }
                ],
                "generationConfig": { "temperature": 0.5, "topP": 0.5 }
            })
        );
    }

    #[test]
    fn test_response_text_and_inline_data() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Ini " },
                        { "text": "gambarnya" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBOR" } }
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 12 }
        }))
        .unwrap();

        assert_eq!(response.text(), "Ini gambarnya");
        assert_eq!(response.first_inline_data().unwrap().data, "iVBOR");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert_eq!(response.text(), "");
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn test_predict_request_shape() {
        let request = PredictRequest {
            instances: vec![VideoInstance {
                prompt: None,
                image: VideoImage {
                    bytes_base64_encoded: "AQID".into(),
                    mime_type: "image/png".into(),
                },
            }],
            parameters: VideoParameters {
                aspect_ratio: "9:16".into(),
                resolution: "720p".into(),
                sample_count: 1,
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "instances": [{ "image": { "bytesBase64Encoded": "AQID", "mimeType": "image/png" } }],
                "parameters": { "aspectRatio": "9:16", "resolution": "720p", "sampleCount": 1 }
            })
        );
    }

    #[test]
    fn test_operation_video_uri() {
        let pending: Operation =
            serde_json::from_value(json!({ "name": "models/veo/operations/abc" })).unwrap();
        assert!(!pending.done);
        assert!(pending.video_uri().is_none());

        let done: Operation = serde_json::from_value(json!({
            "name": "models/veo/operations/abc",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.ai.generativelanguage.v1beta.PredictLongRunningResponse",
                "generateVideoResponse": {
                    "generatedSamples": [{ "video": { "uri": "https://example.test/files/xyz:download?alt=media" } }]
                }
            }
        }))
        .unwrap();
        assert_eq!(
            done.video_uri().as_deref(),
            Some("https://example.test/files/xyz:download?alt=media")
        );
    }
}
