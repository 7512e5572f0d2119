//! Top bar: brand, signed-in user, tenant switcher and session actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{use_auth, use_session, use_tenant};

#[component]
pub fn TopHeader(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let tenant = use_tenant();

    let display_name = move || {
        session
            .get()
            .map(|s| format!("{} ({})", s.display_name, s.role.as_str()))
            .unwrap_or_default()
    };

    let on_tenant_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).trim().to_string();
        auth.switch_tenant(if value.is_empty() { None } else { Some(value) });
    };

    let refresh = move |_| {
        spawn_local(async move {
            if let Err(e) = auth.refresh_session().await {
                log::warn!("permission refresh failed: {}", e);
            }
        });
    };

    let logout = move |_| {
        spawn_local(async move {
            auth.sign_out().await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    title="Toggle navigation"
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <span class="top-header__title">"Sales Console"</span>
            </div>

            <div class="top-header__actions">
                <label class="top-header__tenant">
                    "Tenant "
                    <input
                        type="text"
                        prop:value=move || tenant.get().unwrap_or_default()
                        on:change=on_tenant_change
                    />
                </label>
                <span class="top-header__user">{display_name}</span>
                <button class="top-header__icon-btn" title="Reload permissions" on:click=refresh>
                    "⟳"
                </button>
                <button class="button button--ghost" on:click=logout>"Sign out"</button>
            </div>
        </div>
    }
}
