pub mod left;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::guard::RoleRoute;
use left::Sidebar;
use top_header::TopHeader;

/// Authenticated console shell.
///
/// ```text
/// +----------------------------------+
/// |            TopHeader             |
/// +----------------------------------+
/// |  Sidebar  |   routed page        |
/// +----------------------------------+
/// ```
///
/// The whole subtree sits behind the route gate for the current path.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <RoleRoute>
            <div class="app-layout">
                <TopHeader sidebar_open=sidebar_open />
                <div class="app-body">
                    <div data-zone="left" class="left" class:hidden=move || !sidebar_open.get()>
                        <Sidebar />
                    </div>
                    <div class="app-main">
                        <Outlet />
                    </div>
                </div>
            </div>
        </RoleRoute>
    }
}
