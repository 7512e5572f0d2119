use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use super::section::SectionPage;
use crate::dashboards::OverviewDashboard;
use crate::domain::customers::ui::list::CustomersListPage;
use crate::domain::messages::ui::details::MessageDetailsPage;
use crate::domain::messages::ui::list::MessagesListPage;
use crate::domain::orders::ui::list::OrdersListPage;
use crate::domain::products::ui::list::ProductsListPage;
use crate::layout::DashboardLayout;
use crate::system::auth::guard::RoleRoute;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::details::NewUserPage;
use crate::system::users::ui::list::UsersListPage;

/// Route tree. Role restrictions are not declared here: the dashboard layout
/// gates every nested path against the console route table, and unmatched
/// paths pass through the same gate before rendering "Not found".
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| {
                view! {
                    <RoleRoute>
                        <SectionPage />
                    </RoleRoute>
                }
            }>
                <Route path=path!("/") view=LoginPage />
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("products") view=ProductsListPage />
                    <Route path=path!("sales") view=OrdersListPage />
                    <Route path=path!("customers") view=CustomersListPage />
                    <Route path=path!("messaging") view=MessagesListPage />
                    <Route path=path!("messaging/:id") view=MessageDetailsPage />
                    <Route path=path!("users") view=UsersListPage />
                    <Route path=path!("users/new") view=NewUserPage />
                    <Route path=path!(":section") view=SectionPage />
                    <Route path=path!("*any") view=SectionPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
