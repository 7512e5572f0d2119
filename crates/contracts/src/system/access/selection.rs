use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::{PermissionCatalog, PermissionCategory};

/// How much of a category is selected. Drives the tri-state header checkbox
/// of the permission editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    None,
    Partial,
    All,
}

/// Set of permission keys explicitly granted to a user.
///
/// Independent of the user's role. Built from the raw list stored on the user
/// record through [`PermissionSet::from_stored`], which drops keys the catalog
/// no longer knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stored permission list, keeping only keys present in `catalog`.
    pub fn from_stored<I, S>(stored: I, catalog: &PermissionCatalog) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = BTreeSet::new();
        for raw in stored {
            let key = raw.as_ref();
            if catalog.contains(key) {
                keys.insert(key.to_string());
            } else {
                log::debug!("dropping unknown permission key '{}'", key);
            }
        }
        Self(keys)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn insert(&mut self, key: &str) {
        self.0.insert(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    /// Flip a single key.
    pub fn toggle(&mut self, key: &str) {
        if !self.0.remove(key) {
            self.0.insert(key.to_string());
        }
    }

    pub fn category_state(&self, category: &PermissionCategory) -> CategoryState {
        let selected = category.keys().filter(|k| self.contains(k)).count();
        if selected == 0 {
            CategoryState::None
        } else if selected == category.permissions.len() {
            CategoryState::All
        } else {
            CategoryState::Partial
        }
    }

    /// "Select all" for one category: deselect everything when all keys are
    /// selected, otherwise select every key of the category.
    pub fn toggle_category(&mut self, category: &PermissionCategory) {
        if self.category_state(category) == CategoryState::All {
            for key in category.keys() {
                self.0.remove(key);
            }
        } else {
            for key in category.keys() {
                self.0.insert(key.to_string());
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::access::catalog::{self, catalog};

    fn kpi_category() -> &'static PermissionCategory {
        catalog().category("Dashboard KPI Cards").unwrap()
    }

    #[test]
    fn test_from_stored_drops_unknown_keys() {
        let set = PermissionSet::from_stored(
            ["VIEW_KPI_GROSS_REVENUE", "LEGACY_KEY", "", "VIEW_ORDERS"],
            catalog(),
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains(catalog::VIEW_KPI_GROSS_REVENUE));
        assert!(set.contains(catalog::VIEW_ORDERS));
        assert!(!set.contains("LEGACY_KEY"));
    }

    #[test]
    fn test_toggle_category_all_or_none() {
        let category = kpi_category();
        let mut set = PermissionSet::new();
        assert_eq!(set.category_state(category), CategoryState::None);

        set.toggle_category(category);
        assert_eq!(set.category_state(category), CategoryState::All);

        set.toggle_category(category);
        assert_eq!(set.category_state(category), CategoryState::None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_category_from_partial_selects_all() {
        let category = kpi_category();
        let mut set: PermissionSet = [catalog::VIEW_KPI_NET_PROFIT].into_iter().collect();
        assert_eq!(set.category_state(category), CategoryState::Partial);

        set.toggle_category(category);
        assert_eq!(set.category_state(category), CategoryState::All);
    }

    #[test]
    fn test_toggle_category_leaves_other_categories() {
        let category = kpi_category();
        let mut set: PermissionSet = [catalog::VIEW_ORDERS].into_iter().collect();
        set.toggle_category(category);
        set.toggle_category(category);
        assert_eq!(set.to_vec(), vec![catalog::VIEW_ORDERS.to_string()]);
    }

    #[test]
    fn test_toggle_single_key() {
        let mut set = PermissionSet::new();
        set.toggle(catalog::SEND_MESSAGES);
        assert!(set.contains(catalog::SEND_MESSAGES));
        set.toggle(catalog::SEND_MESSAGES);
        assert!(!set.contains(catalog::SEND_MESSAGES));
    }
}
