//! Document Search - Model (UI-scoped entities)

use chrono::Utc;
use contracts::usecases::u101_upload_document::UploadResponse;
use contracts::usecases::u102_query_documents::{QueryResponse, SourceRef};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const CHAT_PLACEHOLDER: &str = "Upload documents and ask questions to get started!";
pub const THINKING_TEXT: &str = "Thinking...";
pub const QUERY_ERROR_TEXT: &str = "❌ Error: Could not get answer. Make sure backend is running.";
pub const NO_FILES_SELECTED: &str = "Please select files to upload";
pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all documents?";
pub const DATABASE_CLEARED: &str = "Database cleared!";
pub const CLEAR_FAILED: &str = "Error clearing database";
pub const UPLOAD_IDLE_LABEL: &str = "Upload & Process";
pub const UPLOAD_BUSY_LABEL: &str = "Processing...";

/// How long a status banner stays visible
pub const STATUS_TIMEOUT_MS: u32 = 5_000;

/// Identifier of a chat message, unique within a page session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces `msg_<millis>_<seq>` ids
///
/// The sequence number keeps ids distinct when several messages are created
/// within the same millisecond (user message followed by its loading
/// placeholder). Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct MessageIdGen {
    seq: Arc<AtomicU64>,
}

impl MessageIdGen {
    pub fn next_id(&self) -> MessageId {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        MessageId(format!("msg_{}_{}", Utc::now().timestamp_millis(), seq))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    /// Placeholder shown while a question is in flight
    Loading(String),
    Answer {
        answer: String,
        sources: Vec<SourceRef>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::User,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn assistant_text(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            body: MessageBody::Text(text.into()),
        }
    }

    pub fn loading(id: MessageId) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            body: MessageBody::Loading(THINKING_TEXT.to_string()),
        }
    }

    pub fn answer(id: MessageId, response: QueryResponse) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            body: MessageBody::Answer {
                answer: response.answer,
                sources: response.sources,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, MessageBody::Loading(_))
    }

    /// Text content as it reads on screen
    pub fn plain_text(&self) -> String {
        match &self.body {
            MessageBody::Text(text) | MessageBody::Loading(text) => text.clone(),
            MessageBody::Answer { answer, sources } => {
                let mut out = format!("Answer:\n{}", answer);
                if !sources.is_empty() {
                    out.push_str("\n\n📚 Sources:");
                    for line in numbered_sources(sources) {
                        out.push('\n');
                        out.push_str(&line);
                    }
                }
                out
            }
        }
    }
}

/// Source list lines: "1. report.pdf", "2. notes.txt", ...
pub fn numbered_sources(sources: &[SourceRef]) -> Vec<String> {
    sources
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.source))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Danger,
}

/// Transient message shown above the upload controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusBanner {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Warning, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Danger, text)
    }
}

/// Banner currently on screen, with a counter of banners shown so far
///
/// Each [`BannerSlot::show`] returns a ticket for its hide timer; only the
/// ticket of the latest banner can hide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerSlot {
    banner: Option<StatusBanner>,
    generation: u64,
}

impl BannerSlot {
    pub fn current(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    pub fn show(&mut self, banner: StatusBanner) -> u64 {
        self.generation += 1;
        self.banner = Some(banner);
        self.generation
    }

    /// Hide the banner if `ticket` belongs to it; stale tickets are ignored
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.banner.is_none() {
            return false;
        }
        self.banner = None;
        true
    }
}

/// Outcome of one upload batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub chunks_added: u64,
}

impl UploadSummary {
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self, response: &UploadResponse) {
        self.succeeded += 1;
        self.chunks_added += response.chunks_added;
    }

    /// Aggregate banner; failed files only show up as a lower count
    pub fn status(&self) -> StatusBanner {
        StatusBanner::success(format!(
            "✅ Uploaded {}/{} files ({} chunks)",
            self.succeeded, self.attempted, self.chunks_added
        ))
    }
}

/// Reachability of the document service as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "Backend: Checking...",
            BackendStatus::Online => "Backend: Online",
            BackendStatus::Offline => "Backend: Offline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> MessageId {
        MessageId(s.to_string())
    }

    #[test]
    fn test_message_ids_are_unique() {
        let ids = MessageIdGen::default();
        let shared = ids.clone();
        let a = ids.next_id();
        let b = shared.next_id();
        let c = ids.next_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.as_str().starts_with("msg_"));
        assert!(c.as_str().ends_with("_2"));
    }

    #[test]
    fn test_answer_with_sources() {
        let msg = ChatMessage::answer(
            id("m"),
            QueryResponse {
                answer: "42".into(),
                sources: vec![SourceRef::new("doc1.pdf"), SourceRef::new("notes.txt")],
            },
        );
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(
            msg.plain_text(),
            "Answer:\n42\n\n📚 Sources:\n1. doc1.pdf\n2. notes.txt"
        );
    }

    #[test]
    fn test_answer_without_sources_has_no_list() {
        let msg = ChatMessage::answer(
            id("m"),
            QueryResponse {
                answer: "No relevant documents found.".into(),
                sources: vec![],
            },
        );
        assert_eq!(msg.plain_text(), "Answer:\nNo relevant documents found.");
    }

    #[test]
    fn test_loading_message() {
        let msg = ChatMessage::loading(id("m"));
        assert!(msg.is_loading());
        assert_eq!(msg.plain_text(), THINKING_TEXT);
        assert!(!ChatMessage::user(id("u"), "hi").is_loading());
    }

    #[test]
    fn test_upload_summary_all_succeeded() {
        let mut summary = UploadSummary::new(2);
        summary.record_success(&UploadResponse::with_chunks(5));
        summary.record_success(&UploadResponse::with_chunks(7));
        assert_eq!(
            summary.status(),
            StatusBanner::success("✅ Uploaded 2/2 files (12 chunks)")
        );
    }

    #[test]
    fn test_upload_summary_with_failures_stays_success() {
        let mut summary = UploadSummary::new(3);
        summary.record_success(&UploadResponse::with_chunks(4));
        assert_eq!(
            summary.status(),
            StatusBanner::success("✅ Uploaded 1/3 files (4 chunks)")
        );
    }

    #[test]
    fn test_stale_timer_keeps_newer_banner() {
        let mut slot = BannerSlot::default();
        let first = slot.show(StatusBanner::warning(NO_FILES_SELECTED));
        let second = slot.show(StatusBanner::success(DATABASE_CLEARED));

        assert!(!slot.expire(first));
        assert_eq!(
            slot.current(),
            Some(&StatusBanner::success(DATABASE_CLEARED))
        );

        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_banner_timer_hides_its_own_banner() {
        let mut slot = BannerSlot::default();
        let ticket = slot.show(StatusBanner::danger(CLEAR_FAILED));
        assert!(slot.expire(ticket));
        assert_eq!(slot.current(), None);
        assert!(!slot.expire(ticket));
    }
}
