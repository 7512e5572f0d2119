use contracts::system::access::{catalog, AuthPhase, Session};
use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::fetch::LatestRequest;

/// Authentication state shared through context.
///
/// Session restore, login and permission refresh all race for the same
/// signal; each takes a ticket from `pending` so only the latest one lands.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub phase: ReadSignal<AuthPhase>,
    set_phase: WriteSignal<AuthPhase>,
    pending: LatestRequest,
}

fn session_for(user: &UserInfo) -> Session {
    let session = Session::from_user(user, catalog());
    match storage::get_tenant() {
        Some(tenant) => session.with_tenant(Some(tenant)),
        None => session,
    }
}

async fn restore_user() -> Result<UserInfo, String> {
    let access_token = storage::get_access_token().ok_or("no stored session")?;
    match api::get_current_user(&access_token).await {
        Ok(user) => Ok(user),
        Err(e) => {
            log::debug!("stored access token rejected: {}", e);
            let refresh_token = storage::get_refresh_token().ok_or("no refresh token")?;
            let refreshed = api::refresh_token(refresh_token).await?;
            storage::save_access_token(&refreshed.access_token);
            api::get_current_user(&refreshed.access_token).await
        }
    }
}

impl AuthContext {
    pub fn session(&self) -> Option<Session> {
        self.phase.with(|phase| phase.session().cloned())
    }

    fn restore(&self) {
        let auth = *self;
        let ticket = auth.pending.begin();
        spawn_local(async move {
            let restored = restore_user().await;
            let Some(restored) = auth.pending.accept(ticket, restored) else {
                return;
            };
            match restored {
                Ok(user) => {
                    log::info!("session restored for {}", user.username);
                    auth.set_phase.set(AuthPhase::Authenticated(session_for(&user)));
                }
                Err(e) => {
                    log::info!("no session restored: {}", e);
                    storage::clear();
                    auth.set_phase.set(AuthPhase::Anonymous);
                }
            }
        });
    }

    pub fn sign_in(&self, response: LoginResponse) {
        self.pending.invalidate();
        storage::save_tokens(&response.access_token, &response.refresh_token);
        storage::save_tenant(None);
        self.set_phase
            .set(AuthPhase::Authenticated(session_for(&response.user)));
    }

    pub async fn sign_out(self) {
        self.pending.invalidate();
        if let Some(refresh_token) = storage::get_refresh_token() {
            if let Err(e) = api::logout(refresh_token).await {
                log::warn!("{}", e);
            }
        }
        storage::clear();
        self.set_phase.set(AuthPhase::Anonymous);
    }

    /// Re-read role and permissions from the backend, keeping the tenant.
    pub async fn refresh_session(self) -> Result<(), String> {
        let access_token = storage::get_access_token().ok_or("Not authenticated")?;
        let ticket = self.pending.begin();
        let user = api::get_current_user(&access_token).await?;
        let Some(user) = self.pending.accept(ticket, user) else {
            return Ok(());
        };

        let fresh = Session::from_user(&user, catalog());
        self.set_phase.update(|phase| {
            if let AuthPhase::Authenticated(session) = phase {
                *session = session
                    .with_role(fresh.role)
                    .with_permissions(fresh.permissions);
            }
        });
        Ok(())
    }

    pub fn switch_tenant(&self, tenant_id: Option<String>) {
        storage::save_tenant(tenant_id.as_deref());
        self.set_phase.update(|phase| {
            if let AuthPhase::Authenticated(session) = phase {
                *session = session.with_tenant(tenant_id);
            }
        });
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (phase, set_phase) = signal(AuthPhase::Loading);
    let auth = AuthContext {
        phase,
        set_phase,
        pending: LatestRequest::new(),
    };
    provide_context(auth);
    auth.restore();

    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// Current session, `None` while loading or signed out.
pub fn use_session() -> Signal<Option<Session>> {
    let auth = use_auth();
    Signal::derive(move || auth.phase.with(|phase| phase.session().cloned()))
}

/// Tenant of the current session; list pages refetch when it changes.
pub fn use_tenant() -> Memo<Option<String>> {
    let auth = use_auth();
    Memo::new(move |_| {
        auth.phase
            .with(|phase| phase.session().and_then(|s| s.tenant_id.clone()))
    })
}
