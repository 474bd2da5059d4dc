//! Document Search - Page component

use super::api::HttpDocumentApi;
use super::chat_panel::ChatPanel;
use super::controller::DocSearchController;
use super::upload_panel::UploadPanel;
use super::view_model::DocSearchVm;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub type PageController = DocSearchController<HttpDocumentApi, DocSearchVm>;

#[component]
#[allow(non_snake_case)]
pub fn DocSearchPage(vm: DocSearchVm, config: ClientConfig) -> impl IntoView {
    let controller = StoredValue::new(PageController::new(
        HttpDocumentApi::new(config.api.base_url),
        vm,
        config.query.n_results,
    ));

    Effect::new(move |_| {
        let c = controller.get_value();
        spawn_local(async move {
            c.initialize().await;
        });
    });

    let on_upload = Callback::new(move |_| {
        let c = controller.get_value();
        let files = vm.selected_files();
        spawn_local(async move {
            c.upload_files(files).await;
        });
    });

    let on_ask = Callback::new(move |_| {
        let c = controller.get_value();
        let question = vm.question.get_untracked();
        spawn_local(async move {
            c.ask_question(&question).await;
        });
    });

    let on_clear = Callback::new(move |_| {
        let c = controller.get_value();
        spawn_local(async move {
            c.clear_database().await;
        });
    });

    view! {
        <div style="display: flex; gap: 20px; padding: 20px; height: 100%; align-items: stretch;">
            <UploadPanel vm=vm on_upload=on_upload on_clear=on_clear />
            <ChatPanel vm=vm on_ask=on_ask />
        </div>
    }
}
