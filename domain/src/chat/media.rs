//! Image payloads moving between the learner, the dialog and the AI service

use crate::core::error::DomainError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Guess an image MIME type from a file extension.
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

/// Image bytes picked by the learner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Locally renderable preview (`data:<mime>;base64,...`)
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    /// Inline transport form sent alongside a chat turn
    pub fn to_inline(&self) -> InlineImage {
        InlineImage {
            mime_type: self.mime_type.clone(),
            data: self.to_base64(),
        }
    }
}

/// Base64 image carried inline in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// A photo staged in the dialog but not yet sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    pub file: ImageFile,
    pub preview: String,
}

impl From<ImageFile> for StagedImage {
    fn from(file: ImageFile) -> Self {
        let preview = file.preview_data_url();
        Self { file, preview }
    }
}

/// `data:` URI holding a generated image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDataUri(String);

impl ImageDataUri {
    /// Wrap base64 PNG bytes as returned by the image service
    pub fn png_from_base64(data: &str) -> Self {
        Self(format!("data:image/png;base64,{}", data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(mime, _)| mime)
    }

    /// Decode the payload bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DomainError> {
        let (_, payload) = self
            .0
            .split_once(";base64,")
            .ok_or(DomainError::MalformedDataUri)?;
        STANDARD
            .decode(payload)
            .map_err(|_| DomainError::MalformedDataUri)
    }
}

impl std::str::FromStr for ImageDataUri {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("data:") {
            Some(rest) if rest.contains(";base64,") => Ok(Self(s.to_string())),
            _ => Err(DomainError::MalformedDataUri),
        }
    }
}

impl std::fmt::Display for ImageDataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
