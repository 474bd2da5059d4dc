//! Document Search - upload controls, status banner and database stats

use super::model::{StatusKind, UPLOAD_BUSY_LABEL, UPLOAD_IDLE_LABEL};
use super::view_model::DocSearchVm;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_document::{accept_attribute, UploadDocument};
use contracts::usecases::u103_index_stats::IndexStats;
use contracts::usecases::u104_clear_index::ClearIndex;
use leptos::prelude::*;
use thaw::*;

fn intent(kind: StatusKind) -> MessageBarIntent {
    match kind {
        StatusKind::Success => MessageBarIntent::Success,
        StatusKind::Warning => MessageBarIntent::Warning,
        StatusKind::Danger => MessageBarIntent::Error,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(
    vm: DocSearchVm,
    on_upload: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="width: 320px; flex-shrink: 0; display: flex; flex-direction: column; gap: 16px;">
            <Card>
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    {icon("document")}
                    <h3 style="font-size: 16px; font-weight: 600;">{UploadDocument::display_name()}</h3>
                </Flex>
                <input
                    type="file"
                    multiple=true
                    accept=accept_attribute()
                    node_ref=vm.file_input
                    style="width: 100%; margin: 8px 0;"
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_uploading
                    on_click=move |_| on_upload.run(())
                >
                    {icon("upload")}
                    {move || {
                        if vm.is_uploading.get() {
                            format!(" {}", UPLOAD_BUSY_LABEL)
                        } else {
                            format!(" {}", UPLOAD_IDLE_LABEL)
                        }
                    }}
                </Button>

                {move || {
                    vm.status
                        .with(|slot| slot.current().cloned())
                        .map(|banner| {
                            view! {
                                <div style="margin-top: 8px;">
                                    <MessageBar intent=intent(banner.kind)>
                                        <span>{banner.text}</span>
                                    </MessageBar>
                                </div>
                            }
                        })
                }}
            </Card>

            <Card>
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    {icon("database")}
                    <h3 style="font-size: 16px; font-weight: 600;">{IndexStats::display_name()}</h3>
                </Flex>
                <p style="margin: 8px 0;">
                    "Total chunks: "
                    <strong>
                        {move || {
                            vm.total_chunks
                                .get()
                                .map(|n| n.to_string())
                                .unwrap_or_else(|| "-".to_string())
                        }}
                    </strong>
                </p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear.run(())>
                    {icon("trash")}
                    {format!(" {}", ClearIndex::display_name())}
                </Button>
            </Card>
        </div>
    }
}
