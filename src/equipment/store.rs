// src/equipment/store.rs
//! In-memory backing collections and the read-only views handed out to
//! callers and validation strategies.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::models::{Equipment, MaintenanceRecord};

/// Live read-only view of the equipment collection
pub type EquipmentView = CollectionView<Equipment>;
/// Live read-only view of the maintenance record collection
pub type MaintenanceView = CollectionView<MaintenanceRecord>;

/// Owned, writable collection. Only the service holds one of these.
pub(crate) struct SharedCollection<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> SharedCollection<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        // A panic while holding the lock cannot leave the Vec half-written
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn view(&self) -> CollectionView<T> {
        CollectionView {
            items: Arc::clone(&self.items),
        }
    }
}

/// Shared handle onto a live collection.
///
/// Reads always reflect the collection as it is now, not as it was when the
/// view was created. There is no way to mutate through a view.
pub struct CollectionView<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for CollectionView<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> fmt::Debug for CollectionView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionView")
            .field("len", &self.len())
            .finish()
    }
}

impl<T> CollectionView<T> {
    fn guard(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.guard().iter().any(predicate)
    }

    /// Runs `f` against the current contents without copying them.
    pub fn with_items<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        f(&self.guard())
    }
}

impl<T: Clone> CollectionView<T> {
    /// Copy of the current contents, in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.guard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_sees_later_writes() {
        let collection: SharedCollection<u32> = SharedCollection::new();
        let view = collection.view();
        assert!(view.is_empty());

        collection.write().push(7);
        collection.write().push(9);

        assert_eq!(view.len(), 2);
        assert!(view.any(|n| *n == 9));
        assert_eq!(view.snapshot(), vec![7, 9]);
        assert_eq!(view.with_items(|items| items.iter().sum::<u32>()), 16);
    }

    #[test]
    fn test_cloned_views_share_the_collection() {
        let collection: SharedCollection<&str> = SharedCollection::new();
        let first = collection.view();
        let second = first.clone();

        collection.write().push("MRI-001");
        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(collection.read().len(), 1);
    }
}
