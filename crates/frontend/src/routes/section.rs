use contracts::system::access::MenuKey;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Sections of the console whose screens live outside this crate. Still
/// routed, so role gating and the sidebar behave the same as everywhere else.
#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let title = move || {
        let path = pathname.get();
        MenuKey::ALL
            .into_iter()
            .find(|key| key.path() == path)
            .map(|key| key.label())
            .unwrap_or("Not found")
    };

    view! {
        <PageFrame page_id="section--list" category=PAGE_CAT_LIST>
            <h1 class="page__title">{title}</h1>
        </PageFrame>
    }
}
