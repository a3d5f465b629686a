use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;

use crate::errors::error::prelude::*;

/// Arena of live protocol objects, keyed by randomly assigned u32 handles.
/// Releasing a handle removes the entry; handles of released objects are
/// never handed out again while another object holds them.
pub struct ObjectCache<T>
where
    T: Clone,
{
    pub cache_name: String,
    pub store: RwLock<HashMap<u32, Mutex<T>>>,
}

impl<T> ObjectCache<T>
where
    T: Clone,
{
    pub fn new(cache_name: &str) -> Self {
        Self {
            store: Default::default(),
            cache_name: cache_name.to_string(),
        }
    }

    fn _lock_store_read(&self) -> VcxResult<RwLockReadGuard<HashMap<u32, Mutex<T>>>> {
        self.store.read().map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::PoisonedLock,
                format!(
                    "[ObjectCache: {}] Unable to read-lock Object Store: {:?}",
                    self.cache_name, err
                ),
            )
        })
    }

    fn _lock_store_write(&self) -> VcxResult<RwLockWriteGuard<HashMap<u32, Mutex<T>>>> {
        self.store.write().map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::PoisonedLock,
                format!(
                    "[ObjectCache: {}] Unable to write-lock Object Store: {:?}",
                    self.cache_name, err
                ),
            )
        })
    }

    pub fn has_handle(&self, handle: u32) -> bool {
        match self._lock_store_read() {
            Ok(store) => store.contains_key(&handle),
            Err(_) => false,
        }
    }

    pub fn get<F, R>(&self, handle: u32, closure: F) -> VcxResult<R>
    where
        F: Fn(&T) -> VcxResult<R>,
    {
        let store = self._lock_store_read()?;
        match store.get(&handle) {
            Some(m) => match m.lock() {
                Ok(obj) => closure(obj.deref()),
                Err(_) => Err(VcxError::from_msg(
                    VcxErrorKind::PoisonedLock,
                    format!("[ObjectCache: {}] Unable to lock Object Store", self.cache_name),
                )),
            },
            None => Err(VcxError::from_msg(
                VcxErrorKind::InvalidHandle,
                format!(
                    "[ObjectCache: {}] Object not found for handle: {}",
                    self.cache_name, handle
                ),
            )),
        }
    }

    pub fn get_cloned(&self, handle: u32) -> VcxResult<T> {
        self.get(handle, |obj| Ok(obj.clone()))
    }

    pub fn add(&self, obj: T) -> VcxResult<u32> {
        let mut store = self._lock_store_write()?;

        let mut new_handle = rand::thread_rng().gen::<u32>();
        loop {
            if new_handle != 0 && !store.contains_key(&new_handle) {
                break;
            }
            new_handle = rand::thread_rng().gen::<u32>();
        }

        match store.insert(new_handle, Mutex::new(obj)) {
            Some(_) => Ok(new_handle),
            None => Ok(new_handle),
        }
    }

    pub fn insert(&self, handle: u32, obj: T) -> VcxResult<()> {
        let mut store = self._lock_store_write()?;
        store.insert(handle, Mutex::new(obj));
        Ok(())
    }

    pub fn release(&self, handle: u32) -> VcxResult<()> {
        let mut store = self._lock_store_write()?;
        match store.remove(&handle) {
            Some(_) => Ok(()),
            None => Err(VcxError::from_msg(
                VcxErrorKind::InvalidHandle,
                format!(
                    "[ObjectCache: {}] Object not found for handle: {}",
                    self.cache_name, handle
                ),
            )),
        }
    }

    pub fn drain(&self) -> VcxResult<()> {
        let mut store = self._lock_store_write()?;
        Ok(store.clear())
    }

    pub fn len(&self) -> VcxResult<usize> {
        let store = self._lock_store_read()?;
        Ok(store.len())
    }

    pub fn is_empty(&self) -> VcxResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let cache: ObjectCache<u32> = ObjectCache::new("test-cache");
        let handle = cache.add(2221).unwrap();
        assert!(handle > 0);
        assert_eq!(cache.get_cloned(handle).unwrap(), 2221);
    }

    #[test]
    fn test_get_unknown_handle() {
        let cache: ObjectCache<u32> = ObjectCache::new("test-cache");
        assert_eq!(
            cache.get_cloned(100).unwrap_err().kind(),
            VcxErrorKind::InvalidHandle
        );
    }

    #[test]
    fn test_release_removes_object() {
        let cache: ObjectCache<u32> = ObjectCache::new("test-cache");
        let handle = cache.add(2221).unwrap();
        cache.release(handle).unwrap();
        assert!(!cache.has_handle(handle));
        assert_eq!(
            cache.release(handle).unwrap_err().kind(),
            VcxErrorKind::InvalidHandle
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let cache: ObjectCache<u32> = ObjectCache::new("test-cache");
        let handle = cache.add(1).unwrap();
        cache.insert(handle, 2).unwrap();
        assert_eq!(cache.get_cloned(handle).unwrap(), 2);
    }

    #[test]
    fn test_drain_empties_store() {
        let cache: ObjectCache<u32> = ObjectCache::new("test-cache");
        let h1 = cache.add(1).unwrap();
        let h2 = cache.add(2).unwrap();
        cache.drain().unwrap();
        assert!(!cache.has_handle(h1));
        assert!(!cache.has_handle(h2));
        assert_eq!(cache.len().unwrap(), 0);
    }
}
