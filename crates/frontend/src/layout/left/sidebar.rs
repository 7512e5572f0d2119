//! Sidebar with grouped, role-filtered navigation.

use contracts::system::access::MenuKey;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::menu_icon;
use crate::system::auth::context::use_session;

struct MenuGroup {
    label: &'static str,
    items: &'static [MenuKey],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Overview",
        items: &[MenuKey::Dashboard],
    },
    MenuGroup {
        label: "Catalog",
        items: &[
            MenuKey::Categories,
            MenuKey::Products,
            MenuKey::Inventory,
            MenuKey::Suppliers,
            MenuKey::Purchases,
        ],
    },
    MenuGroup {
        label: "Sales",
        items: &[
            MenuKey::Sales,
            MenuKey::Customers,
            MenuKey::Expenses,
            MenuKey::Reports,
        ],
    },
    MenuGroup {
        label: "Team",
        items: &[MenuKey::Users, MenuKey::Messaging, MenuKey::Notifications],
    },
    MenuGroup {
        label: "Account",
        items: &[MenuKey::Profile, MenuKey::Settings],
    },
];

fn is_active(key: MenuKey, pathname: &str) -> bool {
    let path = key.path();
    match key {
        MenuKey::Dashboard => pathname == path,
        _ => pathname == path || pathname.starts_with(&format!("{}/", path)),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    move || {
        // menu follows the role only; granted permission keys never add entries
        let visible = session
            .get()
            .map(|s| s.menu_items())
            .unwrap_or_default();

        MENU_GROUPS
            .iter()
            .filter_map(|group| {
                let items: Vec<MenuKey> = group
                    .items
                    .iter()
                    .copied()
                    .filter(|key| visible.contains(key))
                    .collect();
                if items.is_empty() {
                    return None;
                }

                Some(view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {items
                            .into_iter()
                            .map(|key| view! {
                                <a
                                    href=key.path()
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || pathname.with(|p| is_active(key, p))
                                >
                                    <div class="app-sidebar__item-content">
                                        {menu_icon(key)}
                                        <span>{key.label()}</span>
                                    </div>
                                </a>
                            })
                            .collect_view()}
                    </div>
                })
            })
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_every_menu_key_once() {
        let mut seen: Vec<MenuKey> = MENU_GROUPS.iter().flat_map(|g| g.items.iter().copied()).collect();
        seen.sort();
        let mut all = MenuKey::ALL.to_vec();
        all.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_active_matching() {
        assert!(is_active(MenuKey::Dashboard, "/dashboard"));
        assert!(!is_active(MenuKey::Dashboard, "/dashboard/users"));
        assert!(is_active(MenuKey::Users, "/dashboard/users/new"));
        assert!(!is_active(MenuKey::Users, "/dashboard/users-archive"));
    }
}
