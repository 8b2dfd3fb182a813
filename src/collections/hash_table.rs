use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use super::{CollectionError, DynamicArray, Generation};

/// Bucket count of a fresh table. Also the floor for shrinking.
pub const MIN_CAPACITY: usize = 16;

const GROW_THRESHOLD: f64 = 0.75;
const SHRINK_THRESHOLD: f64 = 0.25;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

/// A hash table with chained buckets.
///
/// The bucket count is always a power of two no smaller than
/// [`MIN_CAPACITY`]. New keys are prepended to their bucket's chain. The
/// table doubles once the load factor exceeds 0.75 and halves once it drops
/// below 0.25, rehashing every entry each time.
///
/// The default hasher is `FxHash`, which is fast and deterministic but weak
/// in its low bits; [`spread`] folds the high bits down before masking.
#[derive(Clone)]
pub struct HashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<Link<K, V>>,
    entries: usize,
    generation: Generation,
    hasher: S,
}

/// Fold high bits into low bits so that masking with `capacity - 1` sees
/// them.
#[inline]
pub fn spread(hash: u64) -> u64 {
    hash ^ (hash >> 20) ^ (hash >> 12) ^ (hash >> 7) ^ (hash >> 4)
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> HashTable<K, V, FxBuildHasher> {
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }
}

impl<K, V> Default for HashTable<K, V, FxBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        HashTable {
            buckets: empty_buckets(MIN_CAPACITY),
            entries: 0,
            generation: 0,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of buckets, not entries.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Entries in bucket-major, then chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Insert or overwrite. Returns the previous value for an existing key.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_for(&key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            cursor = node.next.as_deref_mut();
        }

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node {
            key,
            value,
            next: head,
        }));

        self.entries += 1;
        self.generation += 1;
        self.check_capacity();
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            if node.key.borrow() == key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.key.borrow() == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Unlink `key` from its chain. No-op when absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key, self.buckets.len());

        // Walk the links rather than the nodes so the predecessor's `next`
        // can be rewired in place.
        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|node| node.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }

        let removed = link.take()?;
        let Node { value, next, .. } = *removed;
        *link = next;

        self.entries -= 1;
        self.generation += 1;
        self.check_capacity();
        Some(value)
    }

    fn index_for<Q>(&self, key: &Q, capacity: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = spread(self.hasher.hash_one(key));
        (hash & (capacity as u64 - 1)) as usize
    }

    fn check_capacity(&mut self) {
        let capacity = self.buckets.len();
        let load = self.entries as f64 / capacity as f64;

        if load > GROW_THRESHOLD {
            self.rehash(capacity * 2);
        } else if load < SHRINK_THRESHOLD && capacity / 2 >= MIN_CAPACITY {
            self.rehash(capacity / 2);
        }
    }

    /// Move every node into a fresh bucket array, prepending in the order the
    /// old buckets are walked.
    fn rehash(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for mut link in old {
            while let Some(mut node) = link {
                link = node.next.take();
                let index = self.index_for(&node.key, new_capacity);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Clone,
{
    /// Snapshot of every key, bucket-major then chain order.
    pub fn key_set(&self) -> DynamicArray<K> {
        self.keys().cloned().collect()
    }

    /// Fail-fast cursor over a [`HashTable::key_set`] snapshot.
    pub fn cursor(&self) -> KeyCursor<K> {
        KeyCursor {
            keys: self.key_set(),
            index: 0,
            last: None,
            expected: self.generation,
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::with_hasher(S::default());
        for (key, value) in iter {
            table.put(key, value);
        }
        table
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

/// Borrowing iterator over a [`HashTable`].
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Link<K, V>>,
    chain: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain {
                self.chain = node.next.as_deref();
                return Some((&node.key, &node.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fail-fast cursor over the keys of a [`HashTable`].
///
/// Keys come from a snapshot taken when the cursor was created. Any
/// structural change to the table that did not go through
/// [`KeyCursor::remove`] invalidates the cursor.
#[derive(Debug, Clone)]
pub struct KeyCursor<K> {
    keys: DynamicArray<K>,
    index: usize,
    last: Option<usize>,
    expected: Generation,
}

impl<K> KeyCursor<K> {
    pub fn has_next<V, S>(&self, table: &HashTable<K, V, S>) -> Result<bool, CollectionError> {
        self.check(table.generation)?;
        Ok(self.index < self.keys.len())
    }

    pub fn next<V, S>(
        &mut self,
        table: &HashTable<K, V, S>,
    ) -> Result<Option<&K>, CollectionError> {
        self.check(table.generation)?;
        self.advance()
    }

    /// Remove the key most recently returned by [`KeyCursor::next`].
    pub fn remove<V, S>(&mut self, table: &mut HashTable<K, V, S>) -> Result<V, CollectionError>
    where
        K: Hash + Eq,
        S: BuildHasher,
    {
        self.check(table.generation)?;

        let index = self.last.take().ok_or(CollectionError::NoCurrentElement)?;
        let key = self.keys.get(index)?;
        let removed = table.remove(key).ok_or(CollectionError::NoCurrentElement)?;
        self.expected = table.generation;
        Ok(removed)
    }

    pub(crate) fn check(&self, found: Generation) -> Result<(), CollectionError> {
        if found != self.expected {
            return Err(CollectionError::ConcurrentModification {
                expected: self.expected,
                found,
            });
        }
        Ok(())
    }

    pub(crate) fn remaining(&self) -> bool {
        self.index < self.keys.len()
    }

    pub(crate) fn advance(&mut self) -> Result<Option<&K>, CollectionError> {
        if self.index >= self.keys.len() {
            return Ok(None);
        }
        let index = self.index;
        self.index += 1;
        self.last = Some(index);
        self.keys.get(index).map(Some)
    }

    pub(crate) fn take_last(&mut self) -> Result<&K, CollectionError> {
        let index = self.last.take().ok_or(CollectionError::NoCurrentElement)?;
        self.keys.get(index)
    }

    pub(crate) fn resync(&mut self, generation: Generation) {
        self.expected = generation;
    }
}
