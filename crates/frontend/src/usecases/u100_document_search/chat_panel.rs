//! Document Search - chat panel (message list and question input)

use super::message_bubble::MessageBubble;
use super::model::CHAT_PLACEHOLDER;
use super::view_model::DocSearchVm;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_query_documents::QueryDocuments;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel(vm: DocSearchVm, on_ask: Callback<()>) -> impl IntoView {
    view! {
        <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
            <Flex align=FlexAlign::Center style="gap: 8px; margin-bottom: 12px;">
                {icon("chat")}
                <h3 style="font-size: 16px; font-weight: 600;">{QueryDocuments::display_name()}</h3>
            </Flex>

            <div
                node_ref=vm.messages_container
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; min-height: 320px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <Show
                    when=move || !vm.messages.with(|m| m.is_empty())
                    fallback=|| {
                        view! {
                            <MessageBar intent=MessageBarIntent::Info>
                                <span>{CHAT_PLACEHOLDER}</span>
                            </MessageBar>
                        }
                    }
                >
                    <For
                        each=move || vm.messages.get()
                        key=|msg| msg.id.clone()
                        let:msg
                    >
                        <MessageBubble message=msg />
                    </For>
                </Show>
            </div>

            <div style="display: flex; gap: 8px;">
                <input
                    style="flex: 1; height: 32px; padding: 4px 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;"
                    placeholder="Ask a question about your documents..."
                    prop:value=move || vm.question.get()
                    on:input=move |ev| vm.question.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_ask.run(());
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_ask.run(())>
                    {icon("send")}
                    " Ask"
                </Button>
            </div>
        </div>
    }
}
