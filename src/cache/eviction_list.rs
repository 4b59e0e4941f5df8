use crate::cache::node::Node;

/// Doubly linked list of cache entries ordered by recency.
///
/// The front (head) holds the least recently used entry and is the next one to be evicted. The
/// back (tail) holds the most recently used entry. Nodes live in an arena of slots and are linked
/// through slot indices. Vacated slots are remembered in a free list and reused by later pushes,
/// so an index handed out by [`EvictionList::push_back`] stays valid until that node is removed.
#[derive(Debug)]
pub(crate) struct EvictionList<K, V> {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
}

impl<K, V> EvictionList<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> EvictionList<K, V> {
        EvictionList {
            head: None,
            tail: None,
            len: 0,
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Node<K, V>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Appends a new node at the back of the list and returns its slot index.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> usize {
        let node = Node::new(key, value);

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_back(index);
        self.len += 1;
        index
    }

    /// Moves the node to the back of the list, marking it as the most recently used one.
    ///
    /// ## Panics
    /// Panics if `index` does not point to a node of this list.
    pub(crate) fn move_to_back(&mut self, index: usize) {
        if self.tail == Some(index) {
            return;
        }

        // head          tail             head     tail
        //  |   index     |                |        |     index
        // [A]<->[B]<->[C]        =>      [A]<->[C]<->[B]
        self.unlink(index);
        self.link_back(index);
    }

    /// Removes the node from the list and hands it back. Its slot is freed for reuse.
    ///
    /// ## Panics
    /// Panics if `index` does not point to a node of this list.
    pub(crate) fn remove(&mut self, index: usize) -> Node<K, V> {
        self.unlink(index);

        let node = self.slots[index]
            .take()
            .expect("an unlinked index must point to an occupied slot");

        self.free.push(index);
        self.len -= 1;
        node
    }

    /// Removes the least recently used node.
    ///
    /// If the list is empty, [None] is returned.
    pub(crate) fn pop_front(&mut self) -> Option<Node<K, V>> {
        if self.is_empty() {
            return None;
        }

        let head = self.head.expect("a non-empty list must have a head");
        Some(self.remove(head))
    }

    /// Drops all nodes at once without unlinking them one by one.
    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.slots.clear();
        self.free.clear();
    }

    /// Iterates from the least to the most recently used node.
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn link_back(&mut self, index: usize) {
        let old_tail = self.tail;

        let node = self.node_mut(index);
        node.prev = old_tail;
        node.next = None;

        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
    }

    fn unlink(&mut self, index: usize) {
        let node = self.node_mut(index);
        let (prev, next) = (node.prev, node.next);
        node.clear_links();

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K, V> {
        self.slots[index]
            .as_mut()
            .expect("a linked index must point to an occupied slot")
    }
}

pub(crate) struct Iter<'a, K, V> {
    list: &'a EvictionList<K, V>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
