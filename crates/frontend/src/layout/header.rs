use crate::usecases::u100_document_search::model::BackendStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header(#[prop(into)] backend: Signal<BackendStatus>) -> impl IntoView {
    let badge_color = Signal::derive(move || match backend.get() {
        BackendStatus::Online => BadgeColor::Success,
        BackendStatus::Offline => BadgeColor::Danger,
        BackendStatus::Unknown => BadgeColor::Informative,
    });

    view! {
        <header data-zone="header" class="header" style="display: flex; align-items: center; justify-content: space-between; padding: 12px 20px; border-bottom: 1px solid var(--colorNeutralStroke2);">
            <div class="header__content">
                <span class="header__title" style="font-size: 20px; font-weight: bold;">"🔍 AI Document Search"</span>
            </div>
            <div class="header__actions">
                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                    {move || backend.get().display_text()}
                </Badge>
            </div>
        </header>
    }
}
