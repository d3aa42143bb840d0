//! Assistant dialog controller.
//!
//! Owns the message history, the staged photo, the pending-request flag and
//! the one active [`TutorSession`] of a Fadel dialog.
//!
//! Every asynchronous continuation re-checks the dialog *epoch* before it
//! touches state. Closing the dialog bumps the epoch, so replies that arrive
//! after a close are dropped instead of leaking into the next opening.

use crate::ports::ai_gateway::{AiGateway, GatewayError, TutorSession};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::dialog_observer::{DialogObserver, NoDialogObserver};
use belajar_domain::{
    ChatCommand, ChatMessage, ImageFile, MessageId, MessageLog, StagedImage, StreamEvent,
    TutorContext, TutorPromptTemplate, truncate,
};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned to the caller of the dialog.
///
/// Failures of the AI service itself never surface here during a send; they
/// become apology messages in the history instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("The assistant is not open")]
    NotOpen,

    #[error("Wait for the current reply to finish")]
    Busy,

    #[error("Type a message or attach a photo first")]
    EmptyMessage,

    #[error("Could not start the assistant: {0}")]
    Gateway(#[from] GatewayError),
}

/// Lifecycle of one dialog opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Opening,
    Ready,
}

/// How a send ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// `/gambar` without a description; guidance was shown
    ImagePromptMissing,
    ImageGenerated,
    ImageFailed,
    Replied,
    ReplyFailed,
    /// The dialog was closed before the result arrived
    Abandoned,
}

#[derive(Default)]
struct DialogState {
    phase: DialogPhase,
    epoch: u64,
    context: Option<TutorContext>,
    log: MessageLog,
    staged: Option<StagedImage>,
    pending: bool,
    session: Option<Arc<dyn TutorSession>>,
}

/// Controller for the Fadel assistant dialog.
pub struct AssistantDialog {
    gateway: Arc<dyn AiGateway>,
    state: Mutex<DialogState>,
    next_id: AtomicU64,
    observer: Arc<dyn DialogObserver>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AssistantDialog {
    pub fn new(gateway: Arc<dyn AiGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(DialogState::default()),
            next_id: AtomicU64::new(1),
            observer: Arc::new(NoDialogObserver),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with an observer that renders message changes.
    pub fn with_observer(mut self, observer: Arc<dyn DialogObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    fn lock(&self) -> MutexGuard<'_, DialogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate_id(&self) -> MessageId {
        MessageId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn log_event(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }

    // ==================== Lifecycle ====================

    /// Open the dialog for `context`.
    ///
    /// Starts exactly one session and synthesizes exactly one greeting.
    /// Opening an already open dialog does nothing.
    pub async fn open(&self, context: TutorContext) -> Result<(), DialogError> {
        let epoch = {
            let mut state = self.lock();
            if state.phase != DialogPhase::Closed {
                return Ok(());
            }
            state.phase = DialogPhase::Opening;
            state.epoch += 1;
            state.context = Some(context);
            state.epoch
        };

        let instruction = TutorPromptTemplate::system_instruction(&context);
        let started = self.gateway.start_session(&instruction).await;

        let greeting = {
            let mut state = self.lock();
            if state.epoch != epoch {
                debug!("Dialog closed while the session was starting");
                return Ok(());
            }
            let session = match started {
                Ok(session) => session,
                Err(e) => {
                    state.phase = DialogPhase::Closed;
                    state.context = None;
                    return Err(e.into());
                }
            };
            state.session = Some(Arc::from(session));
            let greeting = ChatMessage::assistant(
                self.allocate_id(),
                TutorPromptTemplate::greeting(&context),
            );
            state.log.push(greeting.clone());
            state.phase = DialogPhase::Ready;
            greeting
        };

        info!(
            "Assistant opened ({} {})",
            context.level,
            context.subject.map(|s| s.name).unwrap_or("umum")
        );
        self.observer.on_message_added(&greeting);
        self.log_event(
            "session_started",
            json!({
                "level": context.level.as_str(),
                "grade": context.grade.map(|g| g.number()),
                "subject": context.subject.map(|s| s.id),
            }),
        );
        Ok(())
    }

    /// Close the dialog and discard everything from this opening.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.phase == DialogPhase::Closed {
            return;
        }
        state.phase = DialogPhase::Closed;
        state.epoch += 1;
        state.context = None;
        state.log.clear();
        state.staged = None;
        state.pending = false;
        state.session = None;
        debug!("Assistant closed");
    }

    // ==================== Attachments ====================

    /// Stage a photo for the next ordinary message, replacing any staged one.
    pub fn stage_image(&self, file: ImageFile) -> Result<(), DialogError> {
        let mut state = self.lock();
        if state.phase != DialogPhase::Ready {
            return Err(DialogError::NotOpen);
        }
        if state.pending {
            return Err(DialogError::Busy);
        }
        state.staged = Some(StagedImage::from(file));
        Ok(())
    }

    pub fn clear_staged_image(&self) {
        self.lock().staged = None;
    }

    // ==================== Sending ====================

    /// Whether the send affordance is enabled for `input`.
    pub fn can_send(&self, input: &str) -> bool {
        let state = self.lock();
        state.phase == DialogPhase::Ready
            && !state.pending
            && (!input.trim().is_empty() || state.staged.is_some())
    }

    /// Send one user turn.
    ///
    /// `/gambar <prompt>` generates an image; anything else is streamed to the
    /// tutor together with the staged photo, if any.
    pub async fn send(&self, input: &str) -> Result<SendOutcome, DialogError> {
        let command = ChatCommand::parse(input);

        let (epoch, session, staged, user_message) = {
            let mut state = self.lock();
            if state.phase != DialogPhase::Ready {
                return Err(DialogError::NotOpen);
            }
            if state.pending {
                return Err(DialogError::Busy);
            }
            if input.trim().is_empty() && state.staged.is_none() {
                return Err(DialogError::EmptyMessage);
            }

            let staged = state.staged.take();
            let preview = match command {
                ChatCommand::Ask => staged.as_ref().map(|s| s.preview.clone()),
                ChatCommand::GenerateImage { .. } => None,
            };
            let user_message = ChatMessage::user(self.allocate_id(), input).with_image(preview);
            state.log.push(user_message.clone());
            state.pending = true;
            (state.epoch, state.session.clone(), staged, user_message)
        };

        self.observer.on_message_added(&user_message);
        self.log_event(
            "user_message",
            json!({
                "id": user_message.id.0,
                "text": user_message.text,
                "has_image": user_message.image.is_some(),
            }),
        );

        let outcome = match command {
            ChatCommand::GenerateImage { prompt } if prompt.is_empty() => {
                self.append_assistant(epoch, TutorPromptTemplate::empty_image_prompt());
                SendOutcome::ImagePromptMissing
            }
            ChatCommand::GenerateImage { prompt } => self.generate_image(epoch, &prompt).await,
            ChatCommand::Ask => self.stream_reply(epoch, session, input, staged).await,
        };

        if self.finish(epoch) {
            Ok(outcome)
        } else {
            Ok(SendOutcome::Abandoned)
        }
    }

    async fn generate_image(&self, epoch: u64, prompt: &str) -> SendOutcome {
        let Some(id) = self.append_assistant(epoch, TutorPromptTemplate::image_in_progress(prompt))
        else {
            return SendOutcome::Abandoned;
        };

        match self.gateway.generate_image(prompt).await {
            Ok(image) => {
                self.update_message(epoch, id, |m| {
                    m.text = TutorPromptTemplate::image_ready().to_string();
                    m.image = Some(image.into_string());
                });
                self.log_event(
                    "image_generated",
                    json!({ "id": id.0, "prompt": prompt }),
                );
                SendOutcome::ImageGenerated
            }
            Err(e) => {
                warn!("Image generation failed: {}", e);
                self.update_message(epoch, id, |m| {
                    m.text = TutorPromptTemplate::image_failed().to_string();
                });
                self.log_event(
                    "request_failed",
                    json!({ "id": id.0, "kind": "image", "error": e.to_string() }),
                );
                SendOutcome::ImageFailed
            }
        }
    }

    async fn stream_reply(
        &self,
        epoch: u64,
        session: Option<Arc<dyn TutorSession>>,
        text: &str,
        staged: Option<StagedImage>,
    ) -> SendOutcome {
        let image = staged.map(|s| s.file.to_inline());
        let Some(id) = self.append_assistant(epoch, String::new()) else {
            return SendOutcome::Abandoned;
        };

        let result = match session {
            Some(session) => session.send_streaming(text, image).await,
            None => Err(GatewayError::SessionNotStarted),
        };
        let mut handle = match result {
            Ok(handle) => handle,
            Err(e) => return self.reply_failed(epoch, id, &e.to_string()),
        };

        let mut received_delta = false;
        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    received_delta = true;
                    if !self.append_delta(epoch, id, &chunk) {
                        return SendOutcome::Abandoned;
                    }
                }
                StreamEvent::Completed(full) => {
                    if !received_delta && !full.is_empty() {
                        self.update_message(epoch, id, |m| m.text = full);
                    }
                    break;
                }
                StreamEvent::Error(e) => return self.reply_failed(epoch, id, &e),
            }
        }

        let reply = self.lock().log.get(id).map(|m| m.text.clone());
        if let Some(reply) = reply {
            debug!("Reply {} finished: {}", id, truncate(&reply, 80));
            self.log_event(
                "assistant_reply",
                json!({ "id": id.0, "text": reply }),
            );
        }
        SendOutcome::Replied
    }

    fn reply_failed(&self, epoch: u64, id: MessageId, error: &str) -> SendOutcome {
        warn!("Reply {} failed: {}", id, error);
        self.update_message(epoch, id, |m| {
            m.text = TutorPromptTemplate::reply_failed().to_string();
        });
        self.log_event(
            "request_failed",
            json!({ "id": id.0, "kind": "reply", "error": error }),
        );
        SendOutcome::ReplyFailed
    }

    /// Clear the pending flag; returns false if the dialog moved on meanwhile.
    fn finish(&self, epoch: u64) -> bool {
        let mut state = self.lock();
        if state.epoch != epoch {
            return false;
        }
        state.pending = false;
        true
    }

    // ==================== Message updates ====================

    fn append_assistant(&self, epoch: u64, text: impl Into<String>) -> Option<MessageId> {
        let message = {
            let mut state = self.lock();
            if state.epoch != epoch {
                return None;
            }
            let message = ChatMessage::assistant(self.allocate_id(), text);
            state.log.push(message.clone());
            message
        };
        self.observer.on_message_added(&message);
        Some(message.id)
    }

    fn append_delta(&self, epoch: u64, id: MessageId, chunk: &str) -> bool {
        let applied = {
            let mut state = self.lock();
            state.epoch == epoch && state.log.update(id, |m| m.text.push_str(chunk))
        };
        if applied {
            self.observer.on_message_delta(id, chunk);
        }
        applied
    }

    fn update_message<F>(&self, epoch: u64, id: MessageId, update: F) -> bool
    where
        F: FnOnce(&mut ChatMessage),
    {
        let updated = {
            let mut state = self.lock();
            if state.epoch != epoch || !state.log.update(id, update) {
                return false;
            }
            state.log.get(id).cloned()
        };
        if let Some(message) = updated {
            self.observer.on_message_updated(&message);
        }
        true
    }

    // ==================== Queries ====================

    pub fn phase(&self) -> DialogPhase {
        self.lock().phase
    }

    pub fn is_open(&self) -> bool {
        self.phase() == DialogPhase::Ready
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn context(&self) -> Option<TutorContext> {
        self.lock().context
    }

    /// Snapshot of the history in display order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().log.messages().to_vec()
    }

    pub fn staged_preview(&self) -> Option<String> {
        self.lock().staged.as_ref().map(|s| s.preview.clone())
    }
}
