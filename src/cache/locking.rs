//! Locking policies deciding how a [`LruCache`](crate::LruCache) serializes access to its state.
//!
//! The policy is a type parameter of the cache and therefore fixed at construction. Both
//! policies hand out exclusive access only, since even a read reorders the entries.

use parking_lot::Mutex;
use std::cell::RefCell;

/// Strategy for wrapping the cache state so that it can be mutated through a shared reference.
pub trait Locking {
    /// Container holding the guarded state.
    type Cell<T>;

    fn wrap<T>(value: T) -> Self::Cell<T>;

    /// Runs `f` with exclusive access to the state. Any lock taken is released when `f` returns
    /// or unwinds.
    fn with<T, R>(cell: &Self::Cell<T>, f: impl FnOnce(&mut T) -> R) -> R;

    fn into_inner<T>(cell: Self::Cell<T>) -> T;
}

/// No synchronization at all.
///
/// The state sits in a [`RefCell`], which makes the cache `!Sync`. It can be moved to another
/// thread but not shared between threads, so the compiler holds the caller to a single accessor
/// at a time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Unguarded;

impl Locking for Unguarded {
    type Cell<T> = RefCell<T>;

    fn wrap<T>(value: T) -> RefCell<T> {
        RefCell::new(value)
    }

    fn with<T, R>(cell: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = cell.borrow_mut();
        f(&mut *state)
    }

    fn into_inner<T>(cell: RefCell<T>) -> T {
        cell.into_inner()
    }
}

/// Every operation holds a mutex for its whole duration.
///
/// Wrap the cache in a [`std::sync::Arc`] to share it between threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Guarded;

impl Locking for Guarded {
    type Cell<T> = Mutex<T>;

    fn wrap<T>(value: T) -> Mutex<T> {
        Mutex::new(value)
    }

    fn with<T, R>(cell: &Mutex<T>, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = cell.lock();
        f(&mut *state)
    }

    fn into_inner<T>(cell: Mutex<T>) -> T {
        cell.into_inner()
    }
}
