use std::collections::BTreeSet;

use super::catalog::PermissionCatalog;
use super::resolver::{self, MenuKey};
use super::role::{normalize_role, Role};
use super::selection::PermissionSet;
use crate::system::auth::UserInfo;

/// Access view of the signed-in user.
///
/// Derived once from [`UserInfo`]. Never mutated: a role switch, permission
/// refresh or tenant change produces a new value through the `with_*`
/// methods, so readers holding an older session keep a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    pub permissions: PermissionSet,
    pub tenant_id: Option<String>,
}

impl Session {
    pub fn from_user(user: &UserInfo, catalog: &PermissionCatalog) -> Self {
        let display_name = user
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(user.username.as_str())
            .to_string();

        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            display_name,
            role: normalize_role(user.role.as_deref()),
            permissions: PermissionSet::from_stored(&user.permissions, catalog),
            tenant_id: user.tenant_id.clone(),
        }
    }

    pub fn has_permission(&self, key: &str) -> bool {
        resolver::has_permission(&self.permissions, key)
    }

    pub fn menu_items(&self) -> BTreeSet<MenuKey> {
        resolver::role_menu_items(self.role)
    }

    /// Whether the session role is on the allow-list of `path`.
    pub fn can_access(&self, path: &str) -> bool {
        resolver::allowed_roles_for(path).contains(&self.role)
    }

    pub fn with_role(&self, role: Role) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    pub fn with_permissions(&self, permissions: PermissionSet) -> Self {
        Self {
            permissions,
            ..self.clone()
        }
    }

    pub fn with_tenant(&self, tenant_id: Option<String>) -> Self {
        Self {
            tenant_id,
            ..self.clone()
        }
    }
}

/// Where the authentication collaborator currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Session restore or login still in flight.
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

impl AuthPhase {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthPhase::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    /// `false` for anything but an authenticated session holding `key`.
    pub fn has_permission(&self, key: &str) -> bool {
        self.session().map(|s| s.has_permission(key)).unwrap_or(false)
    }
}
