use contracts::shared::envelope::{extract_list, extract_single};
use contracts::system::users::{CreateUserDto, User};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

const USERS_KEY: &str = "users";

fn auth_header() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Records that do not deserialize are skipped, not fatal.
pub fn users_from_response(response: &Value) -> Vec<User> {
    extract_list(response, USERS_KEY)
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<User>(raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("skipping malformed user record: {}", e);
                None
            }
        })
        .collect()
}

/// Create a user; returns the new id when the backend reports one.
pub async fn create_user(dto: CreateUserDto) -> Result<String, String> {
    let response = Request::post(&api_url("/api/system/users"))
        .header("Authorization", &auth_header()?)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create user: {}", response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let created = extract_single(&body, &["user"]);
    Ok(created
        .get("id")
        .or_else(|| created.get("_id"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}
