use crate::cache::RandomState;
use crate::cache::eviction_list::EvictionList;
use std::borrow::Borrow;
use std::cmp;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// The unguarded cache state: a key index on top of the eviction list.
///
/// Every key in `slots` points to the list slot holding its node and every node in the list is
/// reachable from exactly one key. Both structures are only changed together.
/// Upper bound on the slots allocated up front. The capacity limit is a cap, not a size hint.
const MAX_PREALLOCATED_SLOTS: usize = 1024;

#[derive(Debug)]
pub(crate) struct Store<K, V, S = RandomState> {
    slots: HashMap<K, usize, S>,
    eviction_list: EvictionList<K, V>,
    capacity_limit: usize,
}

impl<K, V, S> Store<K, V, S>
where
    S: BuildHasher,
{
    pub(crate) fn with_capacity_and_hasher(capacity_limit: usize, hash_builder: S) -> Self {
        let preallocated = cmp::min(capacity_limit, MAX_PREALLOCATED_SLOTS);

        Self {
            slots: HashMap::with_capacity_and_hasher(preallocated, hash_builder),
            eviction_list: EvictionList::with_capacity(preallocated),
            capacity_limit,
        }
    }
}

impl<K, V, S> Store<K, V, S> {
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity_limit(&self) -> usize {
        self.capacity_limit
    }

    /// Drains the entries from the least to the most recently used one.
    pub(crate) fn into_entries(mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.eviction_list.len());
        while let Some(node) = self.eviction_list.pop_front() {
            entries.push(node.into_parts());
        }
        entries
    }

    /// Iterates over the entries from the least to the most recently used one.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.eviction_list
            .iter()
            .map(|node| (node.key(), node.value()))
    }
}

impl<K, V, S> Store<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous_value = match self.slots.get(&key) {
            Some(&index) => {
                let previous_value = self
                    .eviction_list
                    .get_mut(index)
                    .expect("a node must exist for an indexed key")
                    .replace_value(value);
                self.eviction_list.move_to_back(index);
                Some(previous_value)
            }
            None => {
                let index = self.eviction_list.push_back(key.clone(), value);
                self.slots.insert(key, index);
                None
            }
        };

        self.evict_overflow();

        previous_value
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = *self.slots.get(key)?;
        self.eviction_list.move_to_back(index);

        self.eviction_list.get(index).map(|node| node.value())
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = *self.slots.get(key)?;
        self.eviction_list.get(index).map(|node| node.value())
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.slots.contains_key(key)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.slots.remove(key)?;
        let (_, value) = self.eviction_list.remove(index).into_parts();
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        let len = self.slots.len();

        self.slots.clear();
        self.eviction_list.clear();

        if len > 0 {
            log::debug!("Cleared {} cache entries", len);
        }
    }

    pub(crate) fn set_capacity_limit(&mut self, capacity_limit: usize) {
        log::trace!(
            "Changing capacity limit from {} to {}",
            self.capacity_limit,
            capacity_limit
        );

        self.capacity_limit = capacity_limit;
        let evicted = self.evict_overflow();

        if evicted > 0 {
            log::debug!(
                "Evicted {} entries after lowering the capacity limit to {}",
                evicted,
                capacity_limit
            );
        }
    }

    /// Pops least recently used entries until the limit is honored again. Returns how many entries
    /// were evicted.
    fn evict_overflow(&mut self) -> usize {
        let mut evicted = 0;

        while self.slots.len() > self.capacity_limit {
            let Some(node) = self.eviction_list.pop_front() else {
                break;
            };

            self.slots.remove(node.key());
            evicted += 1;
            log::trace!("Evicted least recently used entry");
        }

        evicted
    }
}
