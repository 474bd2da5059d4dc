//! Document Search - View Model

use super::controller::DocSearchView;
use super::model::{
    BackendStatus, BannerSlot, ChatMessage, MessageId, StatusBanner, STATUS_TIMEOUT_MS,
};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DocSearchVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub question: RwSignal<String>,
    pub status: RwSignal<BannerSlot>,
    pub total_chunks: RwSignal<Option<u64>>,
    pub is_uploading: RwSignal<bool>,
    pub backend: RwSignal<BackendStatus>,
    pub file_input: NodeRef<html::Input>,
    pub messages_container: NodeRef<html::Div>,
}

impl DocSearchVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            question: RwSignal::new(String::new()),
            status: RwSignal::new(BannerSlot::default()),
            total_chunks: RwSignal::new(None),
            is_uploading: RwSignal::new(false),
            backend: RwSignal::new(BackendStatus::Unknown),
            file_input: NodeRef::new(),
            messages_container: NodeRef::new(),
        }
    }

    /// Files currently picked in the file input
    pub fn selected_files(&self) -> Vec<web_sys::File> {
        let Some(input) = self.file_input.get_untracked() else {
            return Vec::new();
        };
        let Some(list) = input.files() else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }

    fn scroll_to_bottom(&self) {
        if let Some(container) = self.messages_container.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    }
}

impl Default for DocSearchVm {
    fn default() -> Self {
        Self::new()
    }
}

impl DocSearchView for DocSearchVm {
    fn set_uploading(&self, busy: bool) {
        self.is_uploading.set(busy);
    }

    fn show_status(&self, banner: StatusBanner) {
        let mut ticket = 0;
        self.status.update(|slot| ticket = slot.show(banner));

        let status = self.status;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
            status.update(|slot| {
                slot.expire(ticket);
            });
        });
    }

    fn reset_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    fn set_total_chunks(&self, total: u64) {
        self.total_chunks.set(Some(total));
    }

    fn set_backend_status(&self, status: BackendStatus) {
        self.backend.set(status);
    }

    fn clear_question(&self) {
        self.question.set(String::new());
    }

    fn push_message(&self, message: ChatMessage) {
        self.messages.update(|msgs| msgs.push(message));
        self.scroll_to_bottom();
    }

    fn remove_message(&self, id: &MessageId) {
        self.messages.update(|msgs| msgs.retain(|m| &m.id != id));
    }

    fn reset_chat(&self) {
        self.messages.set(Vec::new());
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
