pub mod footer;
pub mod header;

use crate::usecases::u100_document_search::model::BackendStatus;
use leptos::prelude::*;

/// Application shell: header, page content, status bar
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    #[prop(into)] backend: Signal<BackendStatus>,
    #[prop(into)] api_base: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout" style="display: flex; flex-direction: column; height: 100vh;">
            <header::Header backend=backend />
            <main class="app-main" style="flex: 1; min-height: 0; overflow: auto;">
                {children()}
            </main>
            <footer::Footer backend=backend api_base=api_base />
        </div>
    }
}
