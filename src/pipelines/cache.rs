use crate::error::Result;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub trait ModelOptions {
    /// Key under which a loaded model may be shared, or `None` if it must not be.
    fn cache_key(&self) -> Option<String>;
}

// Cache stores WEAK references - lexicons are freed when all pipelines using them drop.
type CacheStorage = HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>;

pub struct ModelCache {
    cache: Arc<Mutex<CacheStorage>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn storage(&self) -> MutexGuard<'_, CacheStorage> {
        // Entries are only ever inserted or removed whole, so a poisoned map is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> Result<Arc<M>>
    where
        M: Send + Sync + 'static,
        F: FnOnce() -> Result<M>,
    {
        let type_id = TypeId::of::<M>();
        let cache_key = (type_id, key.to_string());

        {
            let mut cache = self.storage();
            if let Some(boxed) = cache.get(&cache_key) {
                // Try to upgrade weak ref
                if let Some(weak) = boxed.downcast_ref::<Weak<M>>() {
                    if let Some(strong) = weak.upgrade() {
                        tracing::debug!(key, "reusing cached lexicons");
                        return Ok(strong);
                    }
                }
                // Weak ref dead, remove stale entry
                cache.remove(&cache_key);
            }
        }

        let model = Arc::new(loader()?);

        {
            let mut cache = self.storage();
            let weak: Weak<M> = Arc::downgrade(&model);
            cache.insert(cache_key, Box::new(weak));
        }

        Ok(model)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.storage().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.storage().is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_MODEL_CACHE: once_cell::sync::Lazy<ModelCache> =
    once_cell::sync::Lazy::new(ModelCache::new);

pub fn global_cache() -> &'static ModelCache {
    &GLOBAL_MODEL_CACHE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentimentError;

    #[derive(Clone)]
    struct TestModel {
        id: String,
    }

    #[test]
    fn test_cache_returns_same_instance() {
        let cache = ModelCache::new();
        let model1 = cache
            .get_or_create::<TestModel, _>("test", || {
                Ok(TestModel {
                    id: "original".into(),
                })
            })
            .unwrap();
        let model2 = cache
            .get_or_create::<TestModel, _>("test", || Ok(TestModel { id: "new".into() }))
            .unwrap();
        assert_eq!(model1.id, model2.id);
        assert!(Arc::ptr_eq(&model1, &model2));
    }

    #[test]
    fn test_cache_reloads_after_drop() {
        let cache = ModelCache::new();
        let first = cache
            .get_or_create::<TestModel, _>("k", || Ok(TestModel { id: "a".into() }))
            .unwrap();
        drop(first);
        let second = cache
            .get_or_create::<TestModel, _>("k", || Ok(TestModel { id: "b".into() }))
            .unwrap();
        assert_eq!(second.id, "b");
    }

    #[test]
    fn test_loader_error_is_not_cached() {
        let cache = ModelCache::new();
        let err = cache.get_or_create::<TestModel, _>("k", || {
            Err(SentimentError::Unexpected("boom".into()))
        });
        assert!(err.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_dead_entry_is_replaced() {
        let cache = ModelCache::new();
        let first = cache
            .get_or_create::<TestModel, _>("k", || Ok(TestModel { id: "a".into() }))
            .unwrap();
        assert!(!cache.is_empty());
        drop(first);
        let _second = cache
            .get_or_create::<TestModel, _>("k", || Ok(TestModel { id: "b".into() }))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_different_keys_independent() {
        let cache = ModelCache::new();

        let model1 = cache
            .get_or_create::<TestModel, _>("key1", || Ok(TestModel { id: "first".into() }))
            .unwrap();

        let model2 = cache
            .get_or_create::<TestModel, _>("key2", || {
                Ok(TestModel {
                    id: "second".into(),
                })
            })
            .unwrap();

        assert_eq!(model1.id, "first");
        assert_eq!(model2.id, "second");
        assert_eq!(cache.len(), 2);
    }
}
