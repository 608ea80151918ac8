use super::SessionStore;
use crate::error::Result;
use std::collections::BTreeMap;

/// Session storage that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored key, for before/after comparisons.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.get("role").unwrap(), None);

        store.set("role", "admin").unwrap();
        assert_eq!(store.get("role").unwrap().as_deref(), Some("admin"));

        store.remove("role").unwrap();
        store.remove("role").unwrap();
        assert_eq!(store.get("role").unwrap(), None);
    }
}
