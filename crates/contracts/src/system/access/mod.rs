//! Role and permission model.
//!
//! Roles gate navigation (routes, sidebar), permission keys gate widgets
//! inside a page. The two systems are independent: a role never implies a
//! permission key and a permission key never unlocks a route.

pub mod catalog;
pub mod gate;
pub mod generation;
pub mod resolver;
pub mod role;
pub mod selection;
pub mod session;

pub use catalog::{catalog, CatalogError, PermissionCatalog, PermissionCategory, PermissionDef};
pub use gate::{permission_visible, GateDecision, GateState};
pub use generation::{RequestGeneration, Ticket};
pub use resolver::{
    allowed_roles_for, has_permission, role_menu_items, route_rules, rule_for, MenuKey, RoleRoute,
};
pub use role::{normalize_role, Role};
pub use selection::{CategoryState, PermissionSet};
pub use session::{AuthPhase, Session};
