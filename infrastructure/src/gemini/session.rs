//! Gemini chat session.
//!
//! Provides [`GeminiSession`] which implements [`TutorSession`]. The session
//! owns its conversation history and streams replies from
//! `streamGenerateContent`.

use crate::gemini::client::GeminiClient;
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::gemini::sse::SseDecoder;
use async_trait::async_trait;
use belajar_application::{GatewayError, StreamHandle, TutorSession};
use belajar_domain::{InlineImage, StreamEvent};
use reqwest::Response;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, mpsc};
use tracing::{debug, warn};

const STREAM_BUFFER: usize = 64;

/// An active chat with the tutor persona bound as system instruction.
///
/// The history lock is held from the moment a turn is sent until its reply
/// has finished streaming, so turns never interleave.
pub struct GeminiSession {
    client: Arc<GeminiClient>,
    system_instruction: Content,
    history: Arc<Mutex<Vec<Content>>>,
}

impl GeminiSession {
    pub fn new(client: Arc<GeminiClient>, system_instruction: &str) -> Self {
        Self {
            client,
            system_instruction: Content::system(system_instruction),
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of turns (user and model) recorded so far
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    async fn open_stream(&self, contents: Vec<Content>) -> Result<Response> {
        let settings = self.client.settings();
        let request = GenerateContentRequest {
            system_instruction: Some(self.system_instruction.clone()),
            contents,
            generation_config: Some(settings.chat_config()),
        };
        let path = format!("models/{}:streamGenerateContent?alt=sse", settings.chat_model);
        self.client.post_json(&path, &request).await
    }
}

fn user_turn(text: &str, image: Option<InlineImage>) -> Content {
    let mut parts = Vec::with_capacity(2);
    if !text.is_empty() {
        parts.push(Part::text(text));
    }
    if let Some(image) = image {
        parts.push(Part::inline(image.mime_type, image.data));
    }
    Content::user(parts)
}

/// Parse one SSE payload and forward its text as a delta.
async fn forward_payload(
    payload: &str,
    full_text: &mut String,
    tx: &mpsc::Sender<StreamEvent>,
) -> Result<()> {
    let response: GenerateContentResponse = serde_json::from_str(payload)?;
    if let Some(error) = response.error {
        return Err(GeminiError::Api {
            status: error
                .code
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or_default(),
            body: error.message,
        });
    }
    let text = response.text();
    if !text.is_empty() {
        full_text.push_str(&text);
        // Receiver gone means the dialog was closed; keep reading so the
        // history still records the full reply.
        let _ = tx.send(StreamEvent::Delta(text)).await;
    }
    Ok(())
}

async fn pump(response: Response, tx: &mpsc::Sender<StreamEvent>) -> Result<String> {
    let mut response = response;
    let mut decoder = SseDecoder::new();
    let mut full_text = String::new();

    while let Some(chunk) = response.chunk().await? {
        for payload in decoder.push(&chunk) {
            forward_payload(&payload, &mut full_text, tx).await?;
        }
    }
    if let Some(payload) = decoder.finish() {
        forward_payload(&payload, &mut full_text, tx).await?;
    }
    Ok(full_text)
}

async fn stream_reply(
    mut history: OwnedMutexGuard<Vec<Content>>,
    response: Response,
    tx: mpsc::Sender<StreamEvent>,
) {
    match pump(response, &tx).await {
        Ok(full_text) => {
            debug!("Reply complete ({} chars)", full_text.len());
            history.push(Content::model(full_text.clone()));
            let _ = tx.send(StreamEvent::Completed(full_text)).await;
        }
        Err(e) => {
            warn!("Reply stream failed: {}", e);
            history.pop();
            let _ = tx
                .send(StreamEvent::Error(GatewayError::from(e).to_string()))
                .await;
        }
    }
}

#[async_trait]
impl TutorSession for GeminiSession {
    async fn send_streaming(
        &self,
        text: &str,
        image: Option<InlineImage>,
    ) -> std::result::Result<StreamHandle, GatewayError> {
        let mut history = self.history.clone().lock_owned().await;
        history.push(user_turn(text, image));

        let response = match self.open_stream(history.to_vec()).await {
            Ok(response) => response,
            Err(e) => {
                history.pop();
                return Err(e.into());
            }
        };

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(stream_reply(history, response, tx));
        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::client::GeminiSettings;
    use crate::gemini::credentials::ApiKeyStore;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    // ==================== Local SSE server ====================

    /// One scripted HTTP response
    struct Reply {
        chunks: Vec<String>,
        /// Pause after the first chunk until this fires
        release: Option<oneshot::Receiver<()>>,
        /// Announce a longer body than is sent, then hang up
        truncated: bool,
    }

    impl Reply {
        fn complete(chunks: Vec<String>) -> Self {
            Self {
                chunks,
                release: None,
                truncated: false,
            }
        }
    }

    fn sse_event(text: &str) -> String {
        let payload = serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        });
        format!("data: {payload}\n\n")
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer one connection per reply, in order. Returns the base URL and
    /// the raw requests as they arrive.
    async fn serve(replies: Vec<Reply>) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (requests_tx, requests_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for reply in replies {
                let (mut socket, _) = listener.accept().await.unwrap();
                let _ = requests_tx.send(read_request(&mut socket).await);

                let length = if reply.truncated {
                    "Content-Length: 4096\r\n"
                } else {
                    ""
                };
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\n{length}Connection: close\r\n\r\n"
                );
                socket.write_all(head.as_bytes()).await.unwrap();

                let mut release = reply.release;
                for chunk in reply.chunks {
                    socket.write_all(chunk.as_bytes()).await.unwrap();
                    socket.flush().await.unwrap();
                    if let Some(release) = release.take() {
                        let _ = release.await;
                    }
                }
                let _ = socket.shutdown().await;
            }
        });

        (base_url, requests_rx)
    }

    fn session_for(base_url: String) -> Arc<GeminiSession> {
        let settings = GeminiSettings {
            base_url,
            ..GeminiSettings::default()
        };
        let client = Arc::new(GeminiClient::new(
            ApiKeyStore::new(Some("AIza-test".to_string())),
            settings,
        ));
        Arc::new(GeminiSession::new(client, "Kamu adalah Fadel"))
    }

    /// Receive until the stream completes or fails.
    async fn drain(handle: &mut StreamHandle) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        while let Some(event) =
            tokio::time::timeout(Duration::from_secs(5), handle.receiver.recv())
                .await
                .unwrap()
        {
            let done = !matches!(event, StreamEvent::Delta(_));
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[test]
    fn test_user_turn_with_photo() {
        let turn = user_turn(
            "Bantu PR ini",
            Some(InlineImage {
                mime_type: "image/jpeg".into(),
                data: "AQID".into(),
            }),
        );
        assert_eq!(turn.role.as_deref(), Some("user"));
        assert_eq!(turn.parts.len(), 2);
        assert_eq!(turn.parts[0].text.as_deref(), Some("Bantu PR ini"));
        assert_eq!(turn.parts[1].inline_data.as_ref().unwrap().mime_type, "image/jpeg");
    }

    #[test]
    fn test_photo_only_turn_has_no_empty_text() {
        let turn = user_turn(
            "",
            Some(InlineImage {
                mime_type: "image/png".into(),
                data: "AQID".into(),
            }),
        );
        assert_eq!(turn.parts.len(), 1);
        assert!(turn.parts[0].text.is_none());
    }

    #[tokio::test]
    async fn test_forward_payload_emits_delta() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut full = String::from("Hal");
        forward_payload(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"o! "}]}}]}"#,
            &mut full,
            &tx,
        )
        .await
        .unwrap();
        assert_eq!(full, "Halo! ");
        assert_eq!(rx.recv().await, Some(StreamEvent::Delta("o! ".into())));
    }

    #[tokio::test]
    async fn test_forward_payload_surfaces_embedded_error() {
        let (tx, _rx) = mpsc::channel(4);
        let mut full = String::new();
        let err = forward_payload(
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key."}}"#,
            &mut full,
            &tx,
        )
        .await
        .unwrap_err();
        assert!(GatewayError::from(err).is_credential_error());
    }

    #[tokio::test]
    async fn test_failed_send_leaves_history_empty() {
        let client = Arc::new(GeminiClient::new(ApiKeyStore::new(None), GeminiSettings::default()));
        let session = GeminiSession::new(client, "Kamu adalah Fadel");

        let err = session.send_streaming("halo", None).await.unwrap_err();
        assert!(err.is_credential_error());
        assert_eq!(session.history_len().await, 0);
    }

    #[tokio::test]
    async fn test_forward_payload_rejects_out_of_range_status() {
        let (tx, _rx) = mpsc::channel(4);
        for payload in [
            r#"{"error":{"code":70000,"message":"weird"}}"#,
            r#"{"error":{"code":-1,"message":"weird"}}"#,
        ] {
            let err = forward_payload(payload, &mut String::new(), &tx)
                .await
                .unwrap_err();
            assert!(matches!(err, GeminiError::Api { status: 0, .. }), "{err:?}");
        }
    }

    // ==================== Streaming over HTTP ====================

    #[tokio::test]
    async fn test_streamed_reply_is_recorded() {
        let (base_url, mut requests) =
            serve(vec![Reply::complete(vec![sse_event("Hal"), sse_event("o!")])]).await;
        let session = session_for(base_url);

        let mut handle = session.send_streaming("halo", None).await.unwrap();
        let events = drain(&mut handle).await;

        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("Hal".into()),
                StreamEvent::Delta("o!".into()),
                StreamEvent::Completed("Halo!".into()),
            ]
        );
        assert_eq!(session.history_len().await, 2);

        let request = requests.recv().await.unwrap();
        assert!(request.contains("/v1beta/models/gemini-2.5-flash:streamGenerateContent?alt=sse"));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: aiza-test"));
        assert!(request.contains("Kamu adalah Fadel"));
    }

    #[tokio::test]
    async fn test_dropped_stream_rolls_back_user_turn() {
        let (base_url, _requests) = serve(vec![Reply {
            chunks: vec![sse_event("Hal")],
            release: None,
            truncated: true,
        }])
        .await;
        let session = session_for(base_url);

        let mut handle = session.send_streaming("halo", None).await.unwrap();
        let events = drain(&mut handle).await;

        assert!(
            matches!(events.last(), Some(StreamEvent::Error(_))),
            "{events:?}"
        );
        assert_eq!(session.history_len().await, 0);
    }

    #[tokio::test]
    async fn test_overlapping_sends_wait_for_the_open_stream() {
        let (release_tx, release_rx) = oneshot::channel();
        let (base_url, mut requests) = serve(vec![
            Reply {
                chunks: vec![sse_event("Hal"), sse_event("o!")],
                release: Some(release_rx),
                truncated: false,
            },
            Reply::complete(vec![sse_event("Sama-sama")]),
        ])
        .await;
        let session = session_for(base_url);

        let mut first = session.send_streaming("halo", None).await.unwrap();
        assert_eq!(
            first.receiver.recv().await,
            Some(StreamEvent::Delta("Hal".into()))
        );

        let second = tokio::spawn({
            let session = session.clone();
            async move { session.send_streaming("terima kasih", None).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!second.is_finished());

        release_tx.send(()).unwrap();
        assert_eq!(
            drain(&mut first).await,
            vec![
                StreamEvent::Delta("o!".into()),
                StreamEvent::Completed("Halo!".into()),
            ]
        );

        let mut second = second.await.unwrap().unwrap();
        assert_eq!(
            drain(&mut second).await.last(),
            Some(&StreamEvent::Completed("Sama-sama".into()))
        );
        assert_eq!(session.history_len().await, 4);

        let _ = requests.recv().await.unwrap();
        let second_request = requests.recv().await.unwrap();
        assert!(second_request.contains("Halo!"));
        assert!(second_request.contains("terima kasih"));
    }
}
