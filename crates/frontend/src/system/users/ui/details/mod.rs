use contracts::system::access::{normalize_role, PermissionSet, Role};
use contracts::system::users::CreateUserDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::users::api;
use crate::system::users::ui::permission_editor::PermissionEditor;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn NewUserPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (role, set_role) = signal(Role::Sales);
    let permissions = RwSignal::new(PermissionSet::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = CreateUserDto {
            username: username.get().trim().to_string(),
            password: password.get(),
            email: non_empty(email.get()),
            full_name: non_empty(full_name.get()),
            role: role.get(),
            permissions: permissions.get(),
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(id) => {
                    log::info!("created user {}", id);
                    navigate("/dashboard/users", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="users--detail" category=PAGE_CAT_DETAIL title="New user">
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username *"</label>
                    <input
                        type="text"
                        id="username"
                        value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password *"</label>
                    <input
                        type="password"
                        id="password"
                        value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="full_name">"Full name"</label>
                    <input
                        type="text"
                        id="full_name"
                        value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        on:change=move |ev| set_role.set(normalize_role(Some(&event_target_value(&ev))))
                        disabled=move || is_saving.get()
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|option| view! {
                                <option value=option.as_str() selected=move || role.get() == option>
                                    {option.as_str()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <h3>"Permissions"</h3>
                <PermissionEditor selection=permissions />

                <div class="form-actions">
                    <a href="/dashboard/users" class="btn-secondary">"Cancel"</a>
                    <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Create user" }}
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}
