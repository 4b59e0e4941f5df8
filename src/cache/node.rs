/// A single cache entry, stored in a slot of the
/// [`EvictionList`](super::eviction_list::EvictionList).
///
/// `prev` and `next` are slot indices into the list's arena. They only describe the position
/// of the node in the recency order and never keep another node alive.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Swaps in a new value and returns the old one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) fn clear_links(&mut self) {
        self.prev = None;
        self.next = None;
    }
}
