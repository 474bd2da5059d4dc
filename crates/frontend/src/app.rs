use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::usecases::u100_document_search::{DocSearchPage, DocSearchVm};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let api_base = config.api.base_url.clone();
    // One view model per page session, shared by the page and the status bar.
    let vm = DocSearchVm::new();

    view! {
        <Shell backend=vm.backend api_base=api_base>
            <DocSearchPage vm=vm config=config />
        </Shell>
    }
}
