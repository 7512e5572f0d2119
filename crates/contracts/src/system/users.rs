use serde::{Deserialize, Serialize};

use super::access::{normalize_role, PermissionSet, Role};
use super::auth::lenient_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
    pub permissions: PermissionSet,
}

// null, numbers and other non-strings resolve like a missing role
fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_role(value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(role: serde_json::Value, id: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "username": "ann",
            "is_active": true,
            "role": role,
            "created_at": "2024-01-01",
            "updated_at": "2024-01-01",
        })
    }

    #[test]
    fn test_null_role_resolves_to_sales() {
        let user: User = serde_json::from_value(record(json!(null), json!("1"))).unwrap();
        assert_eq!(user.role, Role::Sales);

        let user: User = serde_json::from_value(record(json!(3), json!("1"))).unwrap();
        assert_eq!(user.role, Role::Sales);

        let user: User = serde_json::from_value(record(json!(" Owner "), json!("1"))).unwrap();
        assert_eq!(user.role, Role::Ceo);
    }

    #[test]
    fn test_numeric_id() {
        let user: User = serde_json::from_value(record(json!("manager"), json!(17))).unwrap();
        assert_eq!(user.id, "17");
        assert_eq!(user.role, Role::Manager);
    }
}
