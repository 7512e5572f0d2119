//! End-to-end access scenarios: raw user record → session → gate decision,
//! menu and widget visibility.

use contracts::shared::config::ConsoleConfig;
use contracts::system::access::catalog::{self, catalog};
use contracts::system::access::{
    permission_visible, role_menu_items, AuthPhase, GateDecision, GateState, MenuKey, Role,
    Session,
};
use contracts::system::auth::UserInfo;
use rstest::{fixture, rstest};

#[fixture]
fn config() -> ConsoleConfig {
    ConsoleConfig::default()
}

fn signed_in(role: &str, permissions: &[&str]) -> AuthPhase {
    let info: UserInfo = serde_json::from_value(serde_json::json!({
        "id": "42",
        "username": "tester",
        "role": role,
        "permissions": permissions,
    }))
    .expect("user payload should deserialize");
    AuthPhase::Authenticated(Session::from_user(&info, catalog()))
}

#[rstest]
#[case("/dashboard")]
#[case("/dashboard/users")]
#[case("/dashboard/users/new")]
#[case("/dashboard/reports")]
#[case("/dashboard/users/42")]
#[case("/dashboard/messaging/7/attachments")]
#[case("/nowhere")]
fn unauthenticated_visit_redirects_to_login(config: ConsoleConfig, #[case] path: &str) {
    let decision = GateState::for_path(&AuthPhase::Anonymous, path).decision(&config.routes);
    assert_eq!(decision, GateDecision::Redirect("/".to_string()));
}

#[rstest]
#[case("/dashboard/users")]
#[case("/dashboard/users/new")]
fn loading_session_shows_placeholder(config: ConsoleConfig, #[case] path: &str) {
    let decision = GateState::for_path(&AuthPhase::Loading, path).decision(&config.routes);
    assert_eq!(decision, GateDecision::ShowLoading);
}

#[rstest]
#[case("sales", "/dashboard/users/new", GateDecision::Redirect("/dashboard".to_string()))]
#[case("sales", "/dashboard/users", GateDecision::Redirect("/dashboard".to_string()))]
#[case("sales", "/dashboard/inventory", GateDecision::Redirect("/dashboard".to_string()))]
#[case("sales", "/dashboard/products", GateDecision::Render)]
#[case("sales", "/dashboard/users/42", GateDecision::Redirect("/dashboard".to_string()))]
#[case("manager", "/dashboard/users/42", GateDecision::Render)]
#[case("sales", "/dashboard/unknown/deep", GateDecision::Render)]
#[case("manager", "/dashboard/users", GateDecision::Render)]
#[case("manager", "/dashboard/users/new", GateDecision::Redirect("/dashboard".to_string()))]
#[case("Owner", "/dashboard/users/new", GateDecision::Render)]
#[case("unknown-title", "/dashboard/settings", GateDecision::Redirect("/dashboard".to_string()))]
fn route_gate_decisions(
    config: ConsoleConfig,
    #[case] role: &str,
    #[case] path: &str,
    #[case] expected: GateDecision,
) {
    let phase = signed_in(role, &[]);
    assert_eq!(GateState::for_path(&phase, path).decision(&config.routes), expected);
}

#[rstest]
fn sales_without_permissions_sees_no_kpi_card() {
    let phase = signed_in("Sales", &[]);
    assert!(!phase.has_permission(catalog::VIEW_KPI_GROSS_REVENUE));
    assert!(!permission_visible(&phase, catalog::VIEW_KPI_GROSS_REVENUE));
}

#[rstest]
fn explicit_permission_shows_card_regardless_of_role() {
    let phase = signed_in("sales_rep", &[catalog::VIEW_KPI_GROSS_REVENUE, "RETIRED_KEY"]);
    assert!(permission_visible(&phase, catalog::VIEW_KPI_GROSS_REVENUE));
    assert!(!permission_visible(&phase, catalog::VIEW_KPI_NET_PROFIT));

    // a granted widget key does not widen navigation
    let session = phase.session().expect("authenticated");
    assert_eq!(session.menu_items(), role_menu_items(Role::Sales));
    assert!(!session.menu_items().contains(&MenuKey::Reports));
    assert_eq!(session.permissions.len(), 1);
}

#[rstest]
#[case("CEO", Role::Ceo)]
#[case("super_admin", Role::Ceo)]
#[case("Management", Role::Manager)]
#[case("salesperson", Role::Sales)]
#[case("", Role::Sales)]
fn session_role_is_normalized(#[case] raw: &str, #[case] expected: Role) {
    let phase = signed_in(raw, &[]);
    assert_eq!(phase.session().map(|s| s.role), Some(expected));
}

#[rstest]
fn menu_follows_role_only() {
    let ceo = signed_in("ceo", &[]);
    let manager = signed_in("manager", &[]);
    let sales = signed_in("sales", &[]);

    let ceo_menu = ceo.session().unwrap().menu_items();
    let manager_menu = manager.session().unwrap().menu_items();
    let sales_menu = sales.session().unwrap().menu_items();

    assert_eq!(ceo_menu, manager_menu);
    assert!(sales_menu.is_subset(&manager_menu));
    assert!(sales_menu.contains(&MenuKey::Notifications));
    assert!(!sales_menu.contains(&MenuKey::Users));
}

#[rstest]
fn custom_redirect_targets(config: ConsoleConfig) {
    let mut config = config;
    config.routes.login = "/login".to_string();
    config.routes.landing = "/home".to_string();

    let anonymous = GateState::for_path(&AuthPhase::Anonymous, "/dashboard/users");
    assert_eq!(anonymous.decision(&config.routes), GateDecision::Redirect("/login".to_string()));

    let sales = GateState::for_path(&signed_in("sales", &[]), "/dashboard/users");
    assert_eq!(sales.decision(&config.routes), GateDecision::Redirect("/home".to_string()));
}
