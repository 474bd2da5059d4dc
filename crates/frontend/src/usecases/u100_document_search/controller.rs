//! Document Search - Controller
//!
//! The four user intents (upload, ask, stats, clear) as named async methods.
//! Every side effect on the page goes through [`DocSearchView`], every
//! request through [`DocumentApi`].

use super::api::DocumentApi;
use super::model::{
    BackendStatus, ChatMessage, MessageId, MessageIdGen, StatusBanner, UploadSummary,
    CLEAR_CONFIRMATION, CLEAR_FAILED, DATABASE_CLEARED, NO_FILES_SELECTED, QUERY_ERROR_TEXT,
};
use contracts::usecases::u102_query_documents::QueryRequest;

/// Page state the controller writes to
pub trait DocSearchView {
    /// Disable and relabel the upload button while a batch runs
    fn set_uploading(&self, busy: bool);
    fn show_status(&self, banner: StatusBanner);
    fn reset_file_input(&self);
    fn set_total_chunks(&self, total: u64);
    fn set_backend_status(&self, status: BackendStatus);
    fn clear_question(&self);
    fn push_message(&self, message: ChatMessage);
    fn remove_message(&self, id: &MessageId);
    /// Drop every message; the chat shows its placeholder again
    fn reset_chat(&self);
    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Clone)]
pub struct DocSearchController<A, V> {
    api: A,
    view: V,
    ids: MessageIdGen,
    n_results: u32,
}

impl<A, V> DocSearchController<A, V>
where
    A: DocumentApi,
    V: DocSearchView,
{
    pub fn new(api: A, view: V, n_results: u32) -> Self {
        Self {
            api,
            view,
            ids: MessageIdGen::default(),
            n_results,
        }
    }

    /// Runs once when the page mounts
    pub async fn initialize(&self) {
        self.load_stats().await;
        self.check_health().await;
    }

    /// Upload `files` one after another, then report the batch
    pub async fn upload_files(&self, files: Vec<A::File>) {
        if files.is_empty() {
            self.view.show_status(StatusBanner::warning(NO_FILES_SELECTED));
            return;
        }

        self.view.set_uploading(true);

        let mut summary = UploadSummary::new(files.len());
        for file in &files {
            let filename = A::file_name(file);
            match self.api.upload(file).await {
                Ok(resp) => {
                    log::debug!("Indexed {} ({} chunks)", filename, resp.chunks_added);
                    summary.record_success(&resp);
                }
                Err(e) => {
                    if e.is_response_level() {
                        log::warn!("Upload of {} rejected: {}", filename, e);
                    } else {
                        log::error!("Upload error for {}: {}", filename, e);
                    }
                }
            }
        }

        self.view.show_status(summary.status());
        self.view.set_uploading(false);
        self.view.reset_file_input();

        self.load_stats().await;
    }

    pub async fn ask_question(&self, question: &str) {
        let question = question.trim();
        if question.is_empty() {
            return;
        }

        self.view
            .push_message(ChatMessage::user(self.ids.next_id(), question));
        self.view.clear_question();

        let loading_id = self.ids.next_id();
        self.view.push_message(ChatMessage::loading(loading_id.clone()));

        let request = QueryRequest::new(question).with_n_results(self.n_results);
        let result = self.api.query(&request).await;

        self.view.remove_message(&loading_id);
        match result {
            Ok(resp) => {
                self.view
                    .push_message(ChatMessage::answer(self.ids.next_id(), resp));
            }
            Err(e) => {
                self.view.push_message(ChatMessage::assistant_text(
                    self.ids.next_id(),
                    QUERY_ERROR_TEXT,
                ));
                log::error!("Query error: {}", e);
            }
        }
    }

    /// Refresh the chunk counter; on failure the old value stays
    pub async fn load_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => self.view.set_total_chunks(stats.total_chunks),
            Err(e) => log::error!("Stats error: {}", e),
        }
    }

    pub async fn clear_database(&self) {
        if !self.view.confirm(CLEAR_CONFIRMATION) {
            return;
        }

        match self.api.clear().await {
            Ok(()) => {
                self.view.show_status(StatusBanner::success(DATABASE_CLEARED));
                self.view.reset_chat();
                self.load_stats().await;
            }
            Err(e) => {
                log::error!("Clear error: {}", e);
                self.view.show_status(StatusBanner::danger(CLEAR_FAILED));
            }
        }
    }

    pub async fn check_health(&self) {
        let status = match self.api.health().await {
            Ok(resp) if resp.is_healthy() => BackendStatus::Online,
            Ok(resp) => {
                log::warn!("Backend reports status {:?}", resp.status);
                BackendStatus::Offline
            }
            Err(e) => {
                log::warn!("Health check failed: {}", e);
                BackendStatus::Offline
            }
        };
        self.view.set_backend_status(status);
    }
}
