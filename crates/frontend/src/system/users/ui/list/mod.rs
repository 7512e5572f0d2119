use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::fetch::use_tenant_list;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use crate::system::users::api;

const NEW_USER_PATH: &str = "/dashboard/users/new";

#[component]
pub fn UsersListPage() -> impl IntoView {
    let auth = use_auth();
    let state = use_tenant_list("/api/system/users", api::users_from_response);

    let can_create = move || {
        auth.session()
            .map(|s| s.can_access(NEW_USER_PATH))
            .unwrap_or(false)
    };

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_LIST title="Users">
            <Show when=can_create>
                <div class="page__actions">
                    <a href=NEW_USER_PATH class="btn-primary">"New user"</a>
                </div>
            </Show>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Show
                when=move || state.with(|s| s.is_loaded)
                fallback=|| view! { <Spinner /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Username"</TableHeaderCell>
                            <TableHeaderCell>"Full name"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Permissions"</TableHeaderCell>
                            <TableHeaderCell>"Active"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|user| user.id.clone()
                            children=move |user: User| {
                                view! {
                                    <TableRow>
                                        <TableCell>{user.username.clone()}</TableCell>
                                        <TableCell>{user.full_name.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{user.email.clone().unwrap_or_default()}</TableCell>
                                        <TableCell>{user.role.as_str()}</TableCell>
                                        <TableCell>{user.permissions.len()}</TableCell>
                                        <TableCell>{if user.is_active { "Yes" } else { "No" }}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
