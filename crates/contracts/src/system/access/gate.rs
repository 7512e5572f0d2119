//! Gate state machine shared by route and component gates.
//!
//! ```text
//! Loading ──► Unauthenticated            → redirect to login
//!         └─► Authenticated ─► Unauthorized → redirect to landing
//!                           └─► Authorized   → render children
//! ```

use super::resolver;
use super::role::Role;
use super::session::AuthPhase;
use crate::shared::config::RoutesConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

/// What a gate does with its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Neutral placeholder, protected content is never rendered speculatively.
    ShowLoading,
    Redirect(String),
    Render,
}

impl GateState {
    /// Gate with an explicit role allow-list.
    pub fn evaluate(phase: &AuthPhase, allowed: &[Role]) -> Self {
        match phase {
            AuthPhase::Loading => GateState::Loading,
            AuthPhase::Anonymous => GateState::Unauthenticated,
            AuthPhase::Authenticated(session) if allowed.contains(&session.role) => {
                GateState::Authorized
            }
            AuthPhase::Authenticated(_) => GateState::Unauthorized,
        }
    }

    /// Gate using the console route table for `path`.
    pub fn for_path(phase: &AuthPhase, path: &str) -> Self {
        Self::evaluate(phase, resolver::allowed_roles_for(path))
    }

    pub fn decision(&self, routes: &RoutesConfig) -> GateDecision {
        match self {
            GateState::Loading => GateDecision::ShowLoading,
            GateState::Unauthenticated => GateDecision::Redirect(routes.login.clone()),
            GateState::Unauthorized => GateDecision::Redirect(routes.landing.clone()),
            GateState::Authorized => GateDecision::Render,
        }
    }
}

/// Widget-level gate: visible only for an authenticated session holding
/// `key`. Hidden widgets never redirect.
pub fn permission_visible(phase: &AuthPhase, key: &str) -> bool {
    phase.has_permission(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ConsoleConfig;
    use crate::system::access::catalog::{self, catalog};
    use crate::system::access::session::Session;
    use crate::system::auth::UserInfo;

    fn authenticated(role: &str, permissions: &[&str]) -> AuthPhase {
        let info = UserInfo {
            id: "1".to_string(),
            username: "u".to_string(),
            full_name: None,
            email: None,
            role: Some(role.to_string()),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            tenant_id: None,
        };
        AuthPhase::Authenticated(Session::from_user(&info, catalog()))
    }

    #[test]
    fn test_loading_never_renders() {
        let routes = ConsoleConfig::default().routes;
        let state = GateState::evaluate(&AuthPhase::Loading, &Role::ALL);
        assert_eq!(state, GateState::Loading);
        assert_eq!(state.decision(&routes), GateDecision::ShowLoading);
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        let routes = ConsoleConfig::default().routes;
        let state = GateState::for_path(&AuthPhase::Anonymous, "/dashboard/users");
        assert_eq!(state, GateState::Unauthenticated);
        assert_eq!(state.decision(&routes), GateDecision::Redirect("/".to_string()));
    }

    #[test]
    fn test_sales_on_ceo_route_redirects_to_landing() {
        let routes = ConsoleConfig::default().routes;
        let state = GateState::for_path(&authenticated("sales", &[]), "/dashboard/users/new");
        assert_eq!(state, GateState::Unauthorized);
        assert_eq!(
            state.decision(&routes),
            GateDecision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn test_allowed_role_renders() {
        let routes = ConsoleConfig::default().routes;
        let state = GateState::evaluate(&authenticated("owner", &[]), &[Role::Ceo]);
        assert_eq!(state.decision(&routes), GateDecision::Render);
        let state = GateState::for_path(&authenticated("manager", &[]), "/dashboard/users");
        assert_eq!(state, GateState::Authorized);
    }

    #[test]
    fn test_permission_visibility_is_independent_of_role() {
        let ceo = authenticated("ceo", &[]);
        assert!(!permission_visible(&ceo, catalog::VIEW_KPI_GROSS_REVENUE));
        let sales = authenticated("sales", &[catalog::VIEW_KPI_GROSS_REVENUE]);
        assert!(permission_visible(&sales, catalog::VIEW_KPI_GROSS_REVENUE));
        assert!(!permission_visible(&AuthPhase::Loading, catalog::VIEW_KPI_GROSS_REVENUE));
    }
}
