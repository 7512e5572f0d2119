use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

async fn post_json<B, T>(path: &str, body: &B, action: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("{} failed: {}", action, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    post_json(
        "/api/system/auth/login",
        &LoginRequest { username, password },
        "Login",
    )
    .await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    post_json(
        "/api/system/auth/refresh",
        &RefreshRequest { refresh_token },
        "Refresh",
    )
    .await
}

/// Revokes the refresh token server-side. Failures are not fatal for a
/// local logout.
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

/// Current user, including the raw role string and stored permission keys.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
