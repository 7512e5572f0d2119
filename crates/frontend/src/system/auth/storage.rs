use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "console_access_token";
const REFRESH_TOKEN_KEY: &str = "console_refresh_token";
const TENANT_KEY: &str = "console_tenant";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_tokens(access_token: &str, refresh_token: &str) {
    write(ACCESS_TOKEN_KEY, access_token);
    write(REFRESH_TOKEN_KEY, refresh_token);
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Tenant picked in the header switcher; overrides the user's home tenant
/// until logout.
pub fn get_tenant() -> Option<String> {
    read(TENANT_KEY)
}

pub fn save_tenant(tenant_id: Option<&str>) {
    match tenant_id {
        Some(id) => write(TENANT_KEY, id),
        None => remove(TENANT_KEY),
    }
}

/// Forget everything tied to the signed-in user.
pub fn clear() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
    remove(TENANT_KEY);
}
