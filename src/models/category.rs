use std::sync::Arc;

use tracing::debug;

use crate::models::errors::CategoryError;
use crate::storage::SettingsStore;

/// Settings key the custom category names are persisted under.
pub const CUSTOM_CATEGORIES_KEY: &str = "CustomCategories";

/// Categories offered to every owner out of the box.
pub static DEFAULT_CATEGORIES: [&str; 30] = [
    "Mortgage",
    "Rent",
    "Property Tax",
    "Condo/Strata Fees",
    "Insurance - House",
    "Utilities - Hydro",
    "Utilities - Natural Gas",
    "Utilities - Water",
    "Cable and Internet",
    "Maintenance - House",
    "Furniture",
    "Car Payments",
    "Gas",
    "Parking",
    "Maintenance - Car",
    "Insurance - Car",
    "Insurance - Life",
    "Transit",
    "Grocery",
    "Dining Out",
    "Alcohol",
    "Cell Phone",
    "Gym and Fitness",
    "Clothes",
    "Charity",
    "Vacations",
    "Entertainment",
    "Beauty",
    "Medical",
    "Dental"
];

/// The built-in categories plus the user's custom ones.
///
/// Custom categories are read from the settings store when the list is loaded and
/// written back after every change.
pub struct CategoryList<S: SettingsStore> {
    store: Arc<S>,
    custom: Vec<String>
}

impl<S: SettingsStore> CategoryList<S> {
    pub fn load(store: Arc<S>) -> Self {
        let custom = store.load(CUSTOM_CATEGORIES_KEY);

        Self { store, custom }
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// Built-in categories first, then custom ones in the order they were added.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        DEFAULT_CATEGORIES.iter().copied().chain(self.custom.iter().map(String::as_str))
    }

    pub fn contains(&self, name: &str) -> bool {
        DEFAULT_CATEGORIES.iter().any(|default| *default == name)
            || self.custom.iter().any(|custom| custom == name)
    }

    /// Adds a custom category and persists the list.
    ///
    /// # Errors
    /// Returns `CategoryError` if the name is empty or already a built-in or custom category.
    pub fn add(&mut self, name: &str) -> Result<(), CategoryError> {
        if name.is_empty() {
            return Err(CategoryError::EmptyName)
        }

        if self.contains(name) {
            return Err(CategoryError::AlreadyExists { name: name.to_string() })
        }

        self.custom.push(name.to_string());
        self.save();

        debug!("Added custom category [{name}]");

        Ok(())
    }

    /// Removes the custom categories at `indices`. Indices past the end are ignored.
    pub fn delete(&mut self, indices: &[usize]) {
        let mut indices = indices.to_vec();
        indices.sort_unstable_by(|left, right| right.cmp(left));
        indices.dedup();

        for index in indices {
            if index < self.custom.len() {
                let removed = self.custom.remove(index);
                debug!("Deleted custom category [{removed}]");
            }
        }

        self.save();
    }

    fn save(&self) {
        self.store.save(CUSTOM_CATEGORIES_KEY, self.custom.clone());
    }
}
