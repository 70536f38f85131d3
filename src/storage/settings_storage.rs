use std::sync::Arc;

use dashmap::DashMap;

use crate::storage::SettingsStore;

/// In-memory settings store keyed by setting name.
pub struct SettingsStorage {
    cache: Arc<DashMap<String, Vec<String>>>
}

impl SettingsStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }
}

impl Default for SettingsStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for SettingsStorage {
    fn load(&self, key: &str) -> Vec<String> {
        self.cache.get(key).map(|values| values.value().clone()).unwrap_or_default()
    }

    fn save(&self, key: &str, values: Vec<String>) {
        self.cache.insert(key.to_string(), values);
    }
}
