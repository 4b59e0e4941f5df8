//! A small, fixed-capacity LRU cache.
//!
//! This crate provides a key-value cache that evicts the least recently used entry once its
//! capacity limit is exceeded. Lookups, insertions and evictions run in O(1).
//!
//! # Features
//!
//! - Strict LRU: both writes and reads mark an entry as the most recently used one
//! - Capacity limit adjustable at runtime, lowering it evicts immediately
//! - Opt-in thread safety, chosen through the type of the cache
//! - No unsafe code
//!
//! # Thread safety
//!
//! The locking policy is a type parameter of [`LruCache`]:
//!
//! - [`Unguarded`](locking::Unguarded) caches are meant for a single thread and have no
//!   synchronization overhead. The compiler rejects sharing them between threads.
//! - [`Guarded`](locking::Guarded) caches serialize every operation behind a mutex. Reads take
//!   the same exclusive lock as writes, as they reorder the entries.
//!
//! # Examples
//!
//! Basic usage with string keys and values:
//!
//! ```rust
//! use plain_lru::LruCache;
//!
//! // Create a new cache holding up to 1000 items
//! let cache = LruCache::with_capacity(1000);
//!
//! // Insert and retrieve a value
//! cache.set("key1", "value1");
//! assert_eq!(cache.get("key1"), Some("value1"));
//! ```
//!
//! Evicting the least recently used entry:
//!
//! ```rust
//! use plain_lru::LruCache;
//!
//! let cache = LruCache::with_capacity(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//!
//! // "a" becomes the most recently used entry
//! cache.get("a");
//!
//! // "b" is evicted
//! cache.set("c", 3);
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.keys(), vec!["a", "c"]);
//!
//! // lowering the limit evicts right away
//! cache.set_capacity_limit(1);
//! assert_eq!(cache.keys(), vec!["c"]);
//! ```
//!
//! Thread-safe usage across multiple threads:
//!
//! ```rust
//! use plain_lru::{LruCache, SyncLruCache};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache: Arc<SyncLruCache<&str, &str>> = Arc::new(LruCache::guarded_with_capacity(100));
//! cache.set("key1", "value1");
//!
//! // Spawn a thread that inserts a value
//! let cache_in_arc = Arc::clone(&cache);
//! let handle = thread::spawn(move || {
//!     cache_in_arc.set("key2", "value2");
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(cache.get("key1"), Some("value1"));
//! assert_eq!(cache.get("key2"), Some("value2"));
//! ```

#![forbid(unsafe_code)]
pub mod cache;

pub use cache::locking;
pub use cache::{DEFAULT_CAPACITY_LIMIT, LruCache, SyncLruCache};
