use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Authenticated user as reported by `/api/system/auth/me`.
///
/// `role` is the raw backend string (legacy titles included); it is only
/// interpreted through `access::normalize_role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub username: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub permissions: Vec<String>,
    #[serde(default, alias = "tenantId")]
    pub tenant_id: Option<String>,
}

/// Ids arrive as strings or bare numbers depending on the backend store.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

// `permissions` arrives as null, a list, or occasionally a comma separated string.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        serde_json::Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_minimal_payload() {
        let info: UserInfo = serde_json::from_str(r#"{"id":"1","username":"ann"}"#).unwrap();
        assert!(info.role.is_none());
        assert!(info.permissions.is_empty());
    }

    #[test]
    fn test_user_info_permission_shapes() {
        let info: UserInfo = serde_json::from_str(
            r#"{"id":"1","username":"ann","role":"Owner","permissions":["VIEW_ORDERS", 5, null]}"#,
        )
        .unwrap();
        assert_eq!(info.permissions, vec!["VIEW_ORDERS".to_string()]);

        let info: UserInfo = serde_json::from_str(
            r#"{"id":"1","username":"ann","permissions":"VIEW_ORDERS, VIEW_PRODUCTS"}"#,
        )
        .unwrap();
        assert_eq!(info.permissions, vec!["VIEW_ORDERS", "VIEW_PRODUCTS"]);

        let info: UserInfo =
            serde_json::from_str(r#"{"id":"1","username":"ann","permissions":null}"#).unwrap();
        assert!(info.permissions.is_empty());
    }

    #[test]
    fn test_numeric_user_id() {
        let info: UserInfo =
            serde_json::from_str(r#"{"id":42,"username":"ann","role":"ceo"}"#).unwrap();
        assert_eq!(info.id, "42");

        let login: LoginResponse = serde_json::from_str(
            r#"{"access_token":"a","refresh_token":"r","user":{"id":7,"username":"bo"}}"#,
        )
        .unwrap();
        assert_eq!(login.user.id, "7");

        let info: UserInfo = serde_json::from_str(r#"{"id":null,"username":"ann"}"#).unwrap();
        assert_eq!(info.id, "");
    }
}
