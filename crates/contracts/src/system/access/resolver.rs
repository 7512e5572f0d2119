use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::role::Role;
use super::selection::PermissionSet;

// ---------------------------------------------------------------------------
// Fine gating: explicit permission keys
// ---------------------------------------------------------------------------

/// Whether `key` is explicitly granted. Never derived from the role.
pub fn has_permission(permissions: &PermissionSet, key: &str) -> bool {
    permissions.contains(key)
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKey {
    Dashboard,
    Categories,
    Products,
    Sales,
    Customers,
    Purchases,
    Inventory,
    Suppliers,
    Expenses,
    Reports,
    Users,
    Messaging,
    Notifications,
    Profile,
    Settings,
}

impl MenuKey {
    /// Sidebar order.
    pub const ALL: [MenuKey; 15] = [
        MenuKey::Dashboard,
        MenuKey::Categories,
        MenuKey::Products,
        MenuKey::Sales,
        MenuKey::Customers,
        MenuKey::Purchases,
        MenuKey::Inventory,
        MenuKey::Suppliers,
        MenuKey::Expenses,
        MenuKey::Reports,
        MenuKey::Users,
        MenuKey::Messaging,
        MenuKey::Notifications,
        MenuKey::Profile,
        MenuKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKey::Dashboard => "dashboard",
            MenuKey::Categories => "categories",
            MenuKey::Products => "products",
            MenuKey::Sales => "sales",
            MenuKey::Customers => "customers",
            MenuKey::Purchases => "purchases",
            MenuKey::Inventory => "inventory",
            MenuKey::Suppliers => "suppliers",
            MenuKey::Expenses => "expenses",
            MenuKey::Reports => "reports",
            MenuKey::Users => "users",
            MenuKey::Messaging => "messaging",
            MenuKey::Notifications => "notifications",
            MenuKey::Profile => "profile",
            MenuKey::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuKey::Dashboard => "Dashboard",
            MenuKey::Categories => "Categories",
            MenuKey::Products => "Products",
            MenuKey::Sales => "Sales",
            MenuKey::Customers => "Customers",
            MenuKey::Purchases => "Purchases",
            MenuKey::Inventory => "Inventory",
            MenuKey::Suppliers => "Suppliers",
            MenuKey::Expenses => "Expenses",
            MenuKey::Reports => "Reports",
            MenuKey::Users => "Users",
            MenuKey::Messaging => "Messaging",
            MenuKey::Notifications => "Notifications",
            MenuKey::Profile => "Profile",
            MenuKey::Settings => "Settings",
        }
    }

    /// Route the entry navigates to.
    pub fn path(&self) -> String {
        match self {
            MenuKey::Dashboard => "/dashboard".to_string(),
            other => format!("/dashboard/{}", other.as_str()),
        }
    }
}

const SALES_MENU: &[MenuKey] = &[
    MenuKey::Dashboard,
    MenuKey::Categories,
    MenuKey::Products,
    MenuKey::Sales,
    MenuKey::Customers,
    MenuKey::Profile,
    MenuKey::Notifications,
];

/// Sidebar entries visible to a role.
///
/// Static table: CEO and Manager see everything, Sales sees the reduced menu.
pub fn role_menu_items(role: Role) -> BTreeSet<MenuKey> {
    match role {
        Role::Ceo | Role::Manager => MenuKey::ALL.into_iter().collect(),
        Role::Sales => SALES_MENU.iter().copied().collect(),
    }
}

// ---------------------------------------------------------------------------
// Coarse gating: route allow-lists
// ---------------------------------------------------------------------------

const ALL_ROLES: &[Role] = &[Role::Ceo, Role::Manager, Role::Sales];
const LEADERSHIP: &[Role] = &[Role::Ceo, Role::Manager];
const CEO_ONLY: &[Role] = &[Role::Ceo];

/// A route prefix and the roles allowed to open it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRoute {
    pub path: &'static str,
    pub allowed: &'static [Role],
}

impl RoleRoute {
    pub const fn new(path: &'static str, allowed: &'static [Role]) -> Self {
        Self { path, allowed }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    /// Segment-wise prefix match: `/dashboard/users` matches
    /// `/dashboard/users/42` but not `/dashboard/users-archive`.
    pub fn matches(&self, path: &str) -> bool {
        let rule = segments(self.path);
        let target = segments(path);
        target.len() >= rule.len() && rule.iter().zip(&target).all(|(a, b)| a == b)
    }

    fn depth(&self) -> usize {
        segments(self.path).len()
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

const ROUTE_RULES: &[RoleRoute] = &[
    RoleRoute::new("/dashboard", ALL_ROLES),
    RoleRoute::new("/dashboard/purchases", LEADERSHIP),
    RoleRoute::new("/dashboard/inventory", LEADERSHIP),
    RoleRoute::new("/dashboard/suppliers", LEADERSHIP),
    RoleRoute::new("/dashboard/expenses", LEADERSHIP),
    RoleRoute::new("/dashboard/reports", LEADERSHIP),
    RoleRoute::new("/dashboard/users", LEADERSHIP),
    RoleRoute::new("/dashboard/users/new", CEO_ONLY),
    RoleRoute::new("/dashboard/messaging", LEADERSHIP),
    RoleRoute::new("/dashboard/settings", LEADERSHIP),
];

/// Route allow-list table of the console.
pub fn route_rules() -> &'static [RoleRoute] {
    ROUTE_RULES
}

/// Most specific rule covering `path`, if any.
pub fn rule_for(path: &str) -> Option<&'static RoleRoute> {
    ROUTE_RULES
        .iter()
        .filter(|rule| rule.matches(path))
        .max_by_key(|rule| rule.depth())
}

/// Roles allowed on `path`. Paths without a rule are open to every role.
pub fn allowed_roles_for(path: &str) -> &'static [Role] {
    rule_for(path).map(|rule| rule.allowed).unwrap_or(ALL_ROLES)
}
