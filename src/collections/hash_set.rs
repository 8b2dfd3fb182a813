use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use super::{CollectionError, DynamicArray, Generation, HashTable, KeyCursor};

/// A set of unique elements backed by a [`HashTable`] with unit values.
#[derive(Clone)]
pub struct HashSet<E, S = FxBuildHasher> {
    table: HashTable<E, (), S>,
}

impl<E: fmt::Debug, S> fmt::Debug for HashSet<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> HashSet<E, FxBuildHasher> {
    pub fn new() -> Self {
        HashSet {
            table: HashTable::new(),
        }
    }
}

impl<E> Default for HashSet<E, FxBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> HashSet<E, S> {
    pub fn with_hasher(hasher: S) -> Self {
        HashSet {
            table: HashTable::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn generation(&self) -> Generation {
        self.table.generation()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.table.keys()
    }
}

impl<E, S> HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Insert `element` unless already present. Returns whether it was added.
    pub fn add(&mut self, element: E) -> bool {
        if self.table.contains_key(&element) {
            return false;
        }
        self.table.put(element, ());
        true
    }

    /// Returns whether `element` was present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(element).is_some()
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains_key(element)
    }

    pub fn add_all(&mut self, elements: &DynamicArray<E>)
    where
        E: Clone,
    {
        for element in elements {
            self.add(element.clone());
        }
    }

    pub fn remove_all(&mut self, elements: &DynamicArray<E>) {
        for element in elements {
            self.remove(element);
        }
    }
}

impl<E: Clone, S> HashSet<E, S> {
    /// The elements as a sequence, in table order.
    pub fn to_sequence(&self) -> DynamicArray<E> {
        self.table.key_set()
    }

    pub fn cursor(&self) -> SetCursor<E> {
        SetCursor {
            inner: self.table.cursor(),
        }
    }
}

impl<E, S> Extend<E> for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E, S> FromIterator<E> for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = HashSet::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

/// Fail-fast cursor over a [`HashSet`], delegating to the table's
/// [`KeyCursor`].
#[derive(Debug, Clone)]
pub struct SetCursor<E> {
    inner: KeyCursor<E>,
}

impl<E> SetCursor<E> {
    pub fn has_next<S>(&self, set: &HashSet<E, S>) -> Result<bool, CollectionError> {
        self.inner.check(set.generation())?;
        Ok(self.inner.remaining())
    }

    pub fn next<S>(&mut self, set: &HashSet<E, S>) -> Result<Option<&E>, CollectionError> {
        self.inner.check(set.generation())?;
        self.inner.advance()
    }

    /// Remove the element most recently returned by [`SetCursor::next`].
    pub fn remove<S>(&mut self, set: &mut HashSet<E, S>) -> Result<(), CollectionError>
    where
        E: Hash + Eq,
        S: BuildHasher,
    {
        self.inner.check(set.generation())?;

        let element = self.inner.take_last()?;
        if !set.remove(element) {
            return Err(CollectionError::NoCurrentElement);
        }
        let generation = set.generation();
        self.inner.resync(generation);
        Ok(())
    }
}
