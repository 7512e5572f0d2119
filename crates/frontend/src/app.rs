use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_config;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_config();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
