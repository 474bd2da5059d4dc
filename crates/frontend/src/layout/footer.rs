use crate::usecases::u100_document_search::model::BackendStatus;
use leptos::prelude::*;

fn css_class(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Online => "status-online",
        BackendStatus::Offline => "status-offline",
        BackendStatus::Unknown => "status-checking",
    }
}

#[component]
pub fn Footer(
    #[prop(into)] backend: Signal<BackendStatus>,
    api_base: String,
) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar" style="display: flex; gap: 16px; padding: 4px 20px; font-size: 12px; border-top: 1px solid var(--colorNeutralStroke2);">
            <span class=move || css_class(backend.get())>
                {move || backend.get().display_text()}
            </span>
            <span style="color: var(--colorNeutralForeground3);">{api_base}</span>
        </footer>
    }
}
