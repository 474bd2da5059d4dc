//! Document Search - single chat message

use super::model::{numbered_sources, ChatMessage, MessageBody, MessageRole};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    let body = match message.body {
        MessageBody::Text(text) => view! {
            <div style="white-space: pre-wrap;">{text}</div>
        }
        .into_any(),
        MessageBody::Loading(text) => view! {
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <Spinner size=SpinnerSize::Tiny />
                <span>{text}</span>
            </Flex>
        }
        .into_any(),
        MessageBody::Answer { answer, sources } => {
            let lines: Vec<(String, Option<String>)> = numbered_sources(&sources)
                .into_iter()
                .zip(sources.into_iter().map(|s| s.text))
                .collect();
            view! {
                <div>
                    <strong>"Answer:"</strong>
                    <div style="white-space: pre-wrap;">{answer}</div>
                    {(!lines.is_empty())
                        .then(|| {
                            view! {
                                <div style="margin-top: 12px;">
                                    <strong>"📚 Sources:"</strong>
                                    {lines
                                        .into_iter()
                                        .map(|(line, preview)| {
                                            view! {
                                                <div>
                                                    <small title=preview.unwrap_or_default()>
                                                        <em>{line}</em>
                                                    </small>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div
            id=message.id.to_string()
            style=if is_user {
                "align-self: flex-end; max-width: 80%;"
            } else {
                "align-self: flex-start; max-width: 80%;"
            }
        >
            <div
                style=if is_user {
                    "background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); padding: 10px 14px; border-radius: 12px;"
                } else {
                    "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                }
            >
                {body}
            </div>
        </div>
    }
}
