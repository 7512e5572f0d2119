use contracts::system::access::{permission_visible, GateDecision, GateState, Role};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::*;

use super::context::use_auth;
use crate::shared::config::use_config;

/// Neutral placeholder shown while the session is being resolved.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="gate-loading">
            <Spinner />
        </div>
    }
}

/// Route-level gate.
///
/// Without `allowed` the console route table decides for the current path.
/// Unauthenticated visits go to the login route, unauthorized ones to the
/// landing route; nothing protected renders while the session is loading.
#[component]
pub fn RoleRoute(
    #[prop(optional)] allowed: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let routes = use_config().routes;
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = pathname.get();
        auth.phase.with(|phase| {
            let state = match &allowed {
                Some(roles) => GateState::evaluate(phase, roles),
                None => GateState::for_path(phase, &path),
            };
            state.decision(&routes)
        })
    });

    Effect::new(move |_| {
        if let GateDecision::Redirect(target) = decision.get() {
            log::debug!("gate redirect to {}", target);
            navigate(&target, Default::default());
        }
    });

    move || match decision.get() {
        GateDecision::ShowLoading => view! { <LoadingPlaceholder /> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
        GateDecision::Render => children().into_any(),
    }
}

/// Any authenticated role.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! {
        <RoleRoute allowed=Role::ALL.to_vec()>
            {children()}
        </RoleRoute>
    }
}

/// Widget-level gate: renders `children` only when the session holds
/// `permission`. Never redirects.
#[component]
pub fn PermissionGate(
    #[prop(into)] permission: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let visible = move || auth.phase.with(|phase| permission_visible(phase, &permission));

    view! {
        <Show when=visible>
            {children()}
        </Show>
    }
}
