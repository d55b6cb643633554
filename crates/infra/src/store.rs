//! Tenant-isolated key/value storage.
//!
//! Backs the per-tenant configuration record and the in-memory collaborator
//! adapters. Every operation is scoped by tenant; records of one tenant are never
//! visible to another.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use mosaic_core::TenantId;

/// A write that could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("tenant store lock poisoned")]
    Poisoned,
}

/// Tenant-isolated key/value store.
pub trait TenantStore<K, V>: Send + Sync {
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V>;
    fn upsert(&self, tenant_id: TenantId, key: K, value: V) -> Result<(), StoreError>;
    /// Store `value` only if `key` is vacant. Returns whether it was stored.
    fn insert_if_absent(&self, tenant_id: TenantId, key: K, value: V)
        -> Result<bool, StoreError>;
    fn remove(&self, tenant_id: TenantId, key: &K) -> Option<V>;
    fn list(&self, tenant_id: TenantId) -> Vec<V>;
}

impl<K, V, S> TenantStore<K, V> for Arc<S>
where
    S: TenantStore<K, V> + ?Sized,
{
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        (**self).get(tenant_id, key)
    }

    fn upsert(&self, tenant_id: TenantId, key: K, value: V) -> Result<(), StoreError> {
        (**self).upsert(tenant_id, key, value)
    }

    fn insert_if_absent(
        &self,
        tenant_id: TenantId,
        key: K,
        value: V,
    ) -> Result<bool, StoreError> {
        (**self).insert_if_absent(tenant_id, key, value)
    }

    fn remove(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        (**self).remove(tenant_id, key)
    }

    fn list(&self, tenant_id: TenantId) -> Vec<V> {
        (**self).list(tenant_id)
    }
}

/// In-memory tenant-isolated store for tests/dev.
#[derive(Debug)]
pub struct InMemoryTenantStore<K, V> {
    inner: RwLock<HashMap<(TenantId, K), V>>,
}

impl<K, V> InMemoryTenantStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryTenantStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TenantStore<K, V> for InMemoryTenantStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(&(tenant_id, key.clone())).cloned()
    }

    fn upsert(&self, tenant_id: TenantId, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert((tenant_id, key), value);
        Ok(())
    }

    fn insert_if_absent(
        &self,
        tenant_id: TenantId,
        key: K,
        value: V,
    ) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(match map.entry((tenant_id, key)) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        })
    }

    fn remove(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        let mut map = self.inner.write().ok()?;
        map.remove(&(tenant_id, key.clone()))
    }

    fn list(&self, tenant_id: TenantId) -> Vec<V> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.iter()
            .filter_map(|((t, _k), v)| (*t == tenant_id).then(|| v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_isolated_per_tenant() {
        let store: InMemoryTenantStore<&'static str, u32> = InMemoryTenantStore::new();
        let (a, b) = (TenantId::new(), TenantId::new());

        store.upsert(a, "k", 1).unwrap();

        assert_eq!(store.get(a, &"k"), Some(1));
        assert_eq!(store.get(b, &"k"), None);
        assert!(store.list(b).is_empty());
    }

    #[test]
    fn insert_if_absent_keeps_existing_value() {
        let store: InMemoryTenantStore<&'static str, u32> = InMemoryTenantStore::new();
        let tenant = TenantId::new();

        assert_eq!(store.insert_if_absent(tenant, "k", 1), Ok(true));
        assert_eq!(store.insert_if_absent(tenant, "k", 2), Ok(false));
        assert_eq!(store.get(tenant, &"k"), Some(1));
    }

    #[test]
    fn remove_returns_previous_value() {
        let store = InMemoryTenantStore::<u8, String>::new();
        let tenant = TenantId::new();
        store.upsert(tenant, 1, "one".to_string()).unwrap();

        assert_eq!(store.remove(tenant, &1).as_deref(), Some("one"));
        assert_eq!(store.remove(tenant, &1), None);
    }

    #[test]
    fn writes_to_poisoned_store_report_failure() {
        let store = InMemoryTenantStore::<u8, u8>::new();
        let tenant = TenantId::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.write().unwrap();
            panic!("poison the lock");
        }));

        assert_eq!(store.upsert(tenant, 1, 1), Err(StoreError::Poisoned));
        assert_eq!(store.insert_if_absent(tenant, 1, 1), Err(StoreError::Poisoned));
    }
}
