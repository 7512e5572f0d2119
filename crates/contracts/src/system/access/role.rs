use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse identity tier of a console user.
///
/// Ordered from most to least privileged. Unknown input always lands on
/// [`Role::Sales`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Ceo,
    Manager,
    #[default]
    Sales,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Ceo, Role::Manager, Role::Sales];

    /// Canonical display name, also accepted back by [`normalize_role`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Manager => "Manager",
            Role::Sales => "Sales",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize_role(Some(s)))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        normalize_role(Some(&value))
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

/// Map a raw role string (legacy titles, casing variants) onto a [`Role`].
///
/// Total: anything not in the table, including `None` and the empty string,
/// resolves to [`Role::Sales`].
pub fn normalize_role(raw: Option<&str>) -> Role {
    let value = raw.unwrap_or_default().trim().to_lowercase();

    match value.as_str() {
        "ceo" | "owner" | "superadmin" | "super_admin" | "admin" | "administrator" => Role::Ceo,
        "manager" | "management" => Role::Manager,
        "sales" | "salesperson" | "sales_person" | "sales rep" | "sales_rep" => Role::Sales,
        "" => Role::Sales,
        other => {
            log::warn!("unrecognized role '{}', falling back to {}", other, Role::Sales);
            Role::Sales
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        for raw in ["ceo", "owner", "superadmin", "super_admin", "admin", "administrator"] {
            assert_eq!(normalize_role(Some(raw)), Role::Ceo, "{raw}");
        }
        for raw in ["manager", "management"] {
            assert_eq!(normalize_role(Some(raw)), Role::Manager, "{raw}");
        }
        for raw in ["sales", "salesperson", "sales_person", "sales rep", "sales_rep"] {
            assert_eq!(normalize_role(Some(raw)), Role::Sales, "{raw}");
        }
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(normalize_role(Some("CEO")), Role::Ceo);
        assert_eq!(normalize_role(Some("ceo")), Role::Ceo);
        assert_eq!(normalize_role(Some("  Owner  ")), Role::Ceo);
        assert_eq!(normalize_role(Some("\tMANAGER\n")), Role::Manager);
        assert_eq!(normalize_role(Some("Sales Rep")), Role::Sales);
    }

    #[test]
    fn test_unknown_falls_back_to_sales() {
        assert_eq!(normalize_role(None), Role::Sales);
        assert_eq!(normalize_role(Some("")), Role::Sales);
        assert_eq!(normalize_role(Some("   ")), Role::Sales);
        assert_eq!(normalize_role(Some("root")), Role::Sales);
        // no partial matching
        assert_eq!(normalize_role(Some("admin2")), Role::Sales);
        assert_eq!(normalize_role(Some("sales manager")), Role::Sales);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(normalize_role(Some(role.as_str())), role);
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_normalizer() {
        let role: Role = serde_json::from_str("\"Administrator\"").unwrap();
        assert_eq!(role, Role::Ceo);
        let role: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(role, Role::Sales);
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"Manager\"");
    }
}
