use std::sync::Arc;

use tracing::debug;

use crate::models::errors::OwnerError;
use crate::storage::SettingsStore;

/// Settings key the owner names are persisted under.
pub const OWNERS_KEY: &str = "Owners";

/// Owner used when nobody has been added yet.
pub const DEFAULT_OWNER: &str = "Sample";

/// Names of the people or accounts transactions can belong to.
pub struct OwnerList<S: SettingsStore> {
    store: Arc<S>,
    names: Vec<String>
}

impl<S: SettingsStore> OwnerList<S> {
    pub fn load(store: Arc<S>) -> Self {
        let names = store.load(OWNERS_KEY);

        Self { store, names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|owner| owner == name)
    }

    /// The first owner on the list, or [`DEFAULT_OWNER`] when the list is empty.
    pub fn current(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(DEFAULT_OWNER)
    }

    /// # Errors
    /// Returns `OwnerError` if the name is empty or already on the list.
    pub fn add(&mut self, name: &str) -> Result<(), OwnerError> {
        if name.is_empty() {
            return Err(OwnerError::EmptyName)
        }

        if self.contains(name) {
            return Err(OwnerError::AlreadyExists { name: name.to_string() })
        }

        self.names.push(name.to_string());
        self.store.save(OWNERS_KEY, self.names.clone());

        debug!("Added owner [{name}]");

        Ok(())
    }

    /// Removes `name`, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|owner| owner != name);

        let removed = self.names.len() != before;
        if removed {
            self.store.save(OWNERS_KEY, self.names.clone());
        }

        removed
    }
}
