//! Best-effort session storage for the cart.
//!
//! Reads fall back to an empty cart and writes are fire-and-forget: any
//! failure is logged and never reaches the caller.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::domain::CartItem;

/// Key the cart is stored under unless configured otherwise.
pub const CART_STORAGE_KEY: &str = "catalog-cart";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Nothing stored under `{0}`")]
    Missing(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Stored cart is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Stored cart lists product `{0}` more than once")]
    DuplicateEntry(String),
}

/// Session-scoped key/value storage, as offered by the hosting environment.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process session storage with an optional byte quota across all entries.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries()?;
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(existing, stored)| existing.len() + stored.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Saves and restores the cart list under a fixed key.
///
/// Without a storage backend (server-side execution) every call is a no-op
/// and the cart starts empty.
#[derive(Clone)]
pub struct CartPersistence {
    storage: Option<Arc<dyn SessionStorage>>,
    key: String,
}

impl std::fmt::Debug for CartPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartPersistence")
            .field("enabled", &self.is_enabled())
            .field("key", &self.key)
            .finish()
    }
}

impl CartPersistence {
    /// # Arguments
    /// * `storage` - Session storage offered by the host
    /// * `key` - Entry the cart is stored under
    /// * `browser` - Capability flag; when false the storage is never touched
    pub fn new(storage: Arc<dyn SessionStorage>, key: impl Into<String>, browser: bool) -> Self {
        Self {
            storage: browser.then_some(storage),
            key: key.into(),
        }
    }

    /// Pure in-memory operation, nothing is read or written.
    pub fn disabled() -> Self {
        Self {
            storage: None,
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.storage.is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restores the stored cart, or an empty one on any failure.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Vec<CartItem> {
        let Some(storage) = &self.storage else {
            debug!("Persistence disabled, starting with an empty cart");
            return Vec::new();
        };

        match self.try_load(storage.as_ref()) {
            Ok(items) => {
                debug!(entries = items.len(), "Cart restored from session storage");
                items
            }
            Err(PersistenceError::Missing(_)) => {
                debug!("No stored cart, starting with an empty cart");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to restore cart, starting with an empty cart");
                Vec::new()
            }
        }
    }

    fn try_load(&self, storage: &dyn SessionStorage) -> Result<Vec<CartItem>, PersistenceError> {
        let raw = storage
            .get_item(&self.key)?
            .ok_or_else(|| PersistenceError::Missing(self.key.clone()))?;
        decode(&raw)
    }

    #[instrument(skip(self, items), fields(key = %self.key, entries = items.len()))]
    pub fn save(&self, items: &[CartItem]) {
        let Some(storage) = &self.storage else {
            return;
        };

        let result = serde_json::to_string(items)
            .map_err(PersistenceError::from)
            .and_then(|raw| storage.set_item(&self.key, &raw).map_err(PersistenceError::from));
        match result {
            Ok(()) => debug!("Cart saved to session storage"),
            Err(e) => warn!(error = %e, "Failed to save cart to session storage"),
        }
    }

    #[instrument(skip(self), fields(key = %self.key))]
    pub fn erase(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        match storage.remove_item(&self.key) {
            Ok(()) => debug!("Stored cart erased"),
            Err(e) => warn!(error = %e, "Failed to erase stored cart"),
        }
    }
}

/// Parses a stored cart. Lists naming a product twice are rejected.
pub fn decode(raw: &str) -> Result<Vec<CartItem>, PersistenceError> {
    let items: Vec<CartItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.product_id.as_str()) {
            return Err(PersistenceError::DuplicateEntry(item.product_id.clone()));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled by user".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled by user".to_string()))
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled by user".to_string()))
        }
    }

    fn persistence(storage: Arc<dyn SessionStorage>) -> CartPersistence {
        CartPersistence::new(storage, CART_STORAGE_KEY, true)
    }

    #[test]
    fn save_then_load_keeps_ids_quantities_and_order() {
        let storage = Arc::new(MemorySessionStorage::new());
        let persistence = persistence(storage.clone());
        let items = vec![CartItem::new("p2", 1), CartItem::new("p1", 3)];

        persistence.save(&items);

        assert_eq!(persistence.load(), items);
        let raw = storage.get_item(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"productId":"p2","quantity":1},{"productId":"p1","quantity":3}]"#);
    }

    #[test]
    fn configured_key_is_used_for_every_access() {
        let storage = Arc::new(MemorySessionStorage::new());
        let persistence = CartPersistence::new(storage.clone(), "shop-cart", true);
        assert_eq!(persistence.key(), "shop-cart");

        persistence.save(&[CartItem::new("p3", 2)]);
        assert!(storage.get_item(CART_STORAGE_KEY).unwrap().is_none());
        assert!(storage.get_item(persistence.key()).unwrap().is_some());

        persistence.erase();
        assert!(storage.get_item(persistence.key()).unwrap().is_none());
    }

    #[test]
    fn corrupt_payloads_load_as_empty() {
        let storage = Arc::new(MemorySessionStorage::new());
        let persistence = persistence(storage.clone());

        for raw in [
            "not json",
            r#"{"productId":"p1","quantity":1}"#,
            r#"[{"productId":"p1"}]"#,
            r#"[{"productId":"p1","quantity":1},{"productId":"p1","quantity":2}]"#,
        ] {
            storage.set_item(CART_STORAGE_KEY, raw).unwrap();
            assert!(persistence.load().is_empty(), "payload {raw} should be discarded");
        }
    }

    #[test]
    fn missing_key_and_broken_storage_load_as_empty() {
        assert!(persistence(Arc::new(MemorySessionStorage::new())).load().is_empty());

        let broken = persistence(Arc::new(BrokenStorage));
        assert!(broken.load().is_empty());
        // Writes are swallowed too.
        broken.save(&[CartItem::new("p1", 1)]);
        broken.erase();
    }

    #[test]
    fn non_browser_context_never_touches_storage() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage
            .set_item(CART_STORAGE_KEY, r#"[{"productId":"p1","quantity":4}]"#)
            .unwrap();

        let persistence = CartPersistence::new(storage.clone(), CART_STORAGE_KEY, false);
        assert!(!persistence.is_enabled());
        assert!(persistence.load().is_empty());

        persistence.save(&[]);
        assert_eq!(
            storage.get_item(CART_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"[{"productId":"p1","quantity":4}]"#)
        );
    }

    #[test]
    fn quota_is_enforced_per_storage() {
        let storage = MemorySessionStorage::with_quota(16);
        assert!(storage.set_item("k", "short").is_ok());
        assert_eq!(
            storage.set_item("k", "this value is far too long"),
            Err(StorageError::QuotaExceeded { needed: 27, quota: 16 })
        );
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn erase_removes_the_entry() {
        let storage = Arc::new(MemorySessionStorage::new());
        let persistence = persistence(storage.clone());
        persistence.save(&[CartItem::new("p1", 1)]);

        persistence.erase();

        assert_eq!(storage.get_item(CART_STORAGE_KEY).unwrap(), None);
    }
}
