use locking::{Guarded, Locking, Unguarded};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use store::Store;

mod eviction_list;
pub mod locking;
mod node;
mod store;

pub(crate) type RandomState = ahash::RandomState;

/// Capacity limit of caches created without an explicit one.
pub const DEFAULT_CAPACITY_LIMIT: usize = 20;

/// Fixed-capacity cache evicting the least recently used entry.
///
/// Entries are kept in recency order. Both [`LruCache::set`] and [`LruCache::get`] mark the entry
/// as the most recently used one. Once more than [`LruCache::capacity_limit`] entries are present,
/// the least recently used ones are evicted. Lookup, insertion and eviction are O(1).
///
/// The locking policy `L` decides whether the cache can be shared between threads:
///
/// - [`Unguarded`] (the default) does no synchronization. The cache is `Send` but not `Sync`.
/// - [`Guarded`] serializes every operation behind a mutex. Wrap the cache in a
///   [`std::sync::Arc`] to share it between threads.
///
/// All operations only require a shared reference to the cache.
///
/// Keys must be `Clone`: each key is stored in the lookup map and in its entry, so that evicting
/// the least recently used entry can also drop it from the map.
///
/// # Examples
///
/// ```rust
/// use plain_lru::LruCache;
///
/// let cache = LruCache::with_capacity(2);
///
/// cache.set("a", 1);
/// cache.set("b", 2);
///
/// // reading "a" makes "b" the least recently used entry
/// assert_eq!(cache.get("a"), Some(1));
///
/// cache.set("c", 3);
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.count(), 2);
/// ```
pub struct LruCache<K, V, L: Locking = Unguarded, S = RandomState> {
    store: L::Cell<Store<K, V, S>>,
}

/// An [`LruCache`] that can be shared between threads.
pub type SyncLruCache<K, V, S = RandomState> = LruCache<K, V, Guarded, S>;

impl<K, V> LruCache<K, V, Unguarded, RandomState>
where
    K: Clone + Eq + Hash,
{
    /// Creates an unguarded cache holding up to [`DEFAULT_CAPACITY_LIMIT`] entries.
    pub fn new() -> LruCache<K, V, Unguarded, RandomState> {
        LruCache::with_capacity(DEFAULT_CAPACITY_LIMIT)
    }

    /// Creates an unguarded cache holding up to `capacity_limit` entries.
    ///
    /// A limit of zero yields a cache that never holds anything.
    pub fn with_capacity(capacity_limit: usize) -> LruCache<K, V, Unguarded, RandomState> {
        LruCache::with_capacity_and_hasher(capacity_limit, Default::default())
    }
}

impl<K, V> LruCache<K, V, Guarded, RandomState>
where
    K: Clone + Eq + Hash,
{
    /// Creates a guarded cache holding up to [`DEFAULT_CAPACITY_LIMIT`] entries.
    pub fn new_guarded() -> LruCache<K, V, Guarded, RandomState> {
        LruCache::guarded_with_capacity(DEFAULT_CAPACITY_LIMIT)
    }

    /// Creates a guarded cache holding up to `capacity_limit` entries.
    pub fn guarded_with_capacity(capacity_limit: usize) -> LruCache<K, V, Guarded, RandomState> {
        LruCache::with_capacity_and_hasher(capacity_limit, Default::default())
    }
}

impl<K, V, L, S> LruCache<K, V, L, S>
where
    K: Clone + Eq + Hash,
    L: Locking,
    S: BuildHasher,
{
    /// Creates a cache holding up to `capacity_limit` entries, using `hash_builder` to hash the
    /// keys.
    pub fn with_capacity_and_hasher(
        capacity_limit: usize,
        hash_builder: S,
    ) -> LruCache<K, V, L, S> {
        LruCache {
            store: L::wrap(Store::with_capacity_and_hasher(capacity_limit, hash_builder)),
        }
    }

    /// Inserts a key-value pair and marks it as the most recently used entry.
    ///
    /// If the cache did not have this key present, [`None`] is returned.
    ///
    /// If the cache did have this key present, the value is replaced in place, and the old value
    /// is returned.
    ///
    /// Afterwards, least recently used entries are evicted until the capacity limit is met. With
    /// a capacity limit of zero, this evicts the entry just inserted.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        self.with_store(|store| store.insert(key, value))
    }

    /// Returns the value corresponding to the key and marks the entry as the most recently used
    /// one.
    ///
    /// This method clones the value when returning the item. Consider wrapping your values in
    /// [`std::sync::Arc`] if cloning is too expensive for your use-case.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.with_store(|store| store.get(key).cloned())
    }

    /// Returns the value corresponding to the key without changing the recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.with_store(|store| store.peek(key).cloned())
    }

    /// Returns `true` if the cache holds a value for the key. The recency order is not changed.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.with_store(|store| store.contains_key(key))
    }

    /// Removes the key from the cache, returning its value if it was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.with_store(|store| store.remove(key))
    }

    /// Removes all entries.
    pub fn remove_all(&self) {
        self.with_store(|store| store.clear())
    }

    /// Changes the capacity limit. Lowering it below the current number of entries evicts the
    /// least recently used ones right away.
    pub fn set_capacity_limit(&self, capacity_limit: usize) {
        self.with_store(|store| store.set_capacity_limit(capacity_limit))
    }
}

impl<K, V, L, S> LruCache<K, V, L, S>
where
    L: Locking,
{
    /// Returns the number of entries in the cache.
    pub fn count(&self) -> usize {
        self.with_store(|store| store.len())
    }

    /// Alias of [`LruCache::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the maximum number of entries kept, [`DEFAULT_CAPACITY_LIMIT`] (20) unless
    /// configured otherwise.
    ///
    /// ```rust
    /// use plain_lru::LruCache;
    ///
    /// let cache: LruCache<u32, u32> = LruCache::new();
    /// assert_eq!(cache.capacity_limit(), 20);
    /// assert!(cache.is_empty());
    /// ```
    pub fn capacity_limit(&self) -> usize {
        self.with_store(|store| store.capacity_limit())
    }

    /// Returns the keys ordered from the least to the most recently used one.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.with_store(|store| store.iter().map(|(key, _)| key.clone()).collect())
    }

    /// Consumes the cache and returns the entries ordered from the least to the most recently
    /// used one.
    pub fn into_entries(self) -> Vec<(K, V)> {
        L::into_inner::<Store<K, V, S>>(self.store).into_entries()
    }

    fn with_store<R>(&self, f: impl FnOnce(&mut Store<K, V, S>) -> R) -> R {
        L::with::<Store<K, V, S>, R>(&self.store, f)
    }
}

impl<K, V, L, S> Default for LruCache<K, V, L, S>
where
    K: Clone + Eq + Hash,
    L: Locking,
    S: BuildHasher + Default,
{
    fn default() -> LruCache<K, V, L, S> {
        LruCache::with_capacity_and_hasher(DEFAULT_CAPACITY_LIMIT, Default::default())
    }
}

impl<K, V, L, S> fmt::Debug for LruCache<K, V, L, S>
where
    L: Locking,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, capacity_limit) =
            self.with_store(|store| (store.len(), store.capacity_limit()));

        f.debug_struct("LruCache")
            .field("count", &count)
            .field("capacity_limit", &capacity_limit)
            .finish()
    }
}
