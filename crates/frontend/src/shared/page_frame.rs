use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper for every console page.
///
/// Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
/// element, and the BEM modifier for detail and dashboard pages.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {title.map(|title| view! {
                <div class="page__header">
                    <h1 class="page__title">{title}</h1>
                </div>
            })}
            <div class="page__content">{children()}</div>
        </div>
    }
}
