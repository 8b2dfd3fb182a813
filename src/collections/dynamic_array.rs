use super::{CollectionError, Generation};

/// Capacity a fresh or cleared array starts with. Also the floor for shrinking.
pub const MIN_CAPACITY: usize = 8;

const GROW_THRESHOLD: f64 = 0.75;
const SHRINK_THRESHOLD: f64 = 0.25;

/// A growable, index-addressable sequence.
///
/// Capacity is managed with hysteresis: it doubles once the array is more
/// than three quarters full and halves once it drops below a quarter, never
/// going under [`MIN_CAPACITY`]. Every structural mutation (append, remove,
/// clear) bumps a generation counter that [`Cursor`] uses to detect
/// modifications made behind its back.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    buffer: Vec<T>,
    capacity: usize,
    generation: Generation,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        DynamicArray {
            buffer: Vec::with_capacity(MIN_CAPACITY),
            capacity: MIN_CAPACITY,
            generation: 0,
        }
    }

    pub fn append(&mut self, value: T) {
        self.buffer.push(value);
        self.generation += 1;
        self.check_capacity();
    }

    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.buffer.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.buffer.len(),
        })
    }

    /// Replace the value at `index`, returning the previous one.
    ///
    /// Only occupied slots can be written; `set(len, _)` is rejected just like
    /// `get(len)`. Overwriting is not a structural change and leaves live
    /// cursors valid.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let len = self.buffer.len();
        let slot = self
            .buffer
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove the value at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.buffer.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.buffer.len(),
            });
        }

        let removed = self.buffer.remove(index);
        self.generation += 1;
        self.check_capacity();
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Logical capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every element and reset the capacity to [`MIN_CAPACITY`].
    pub fn clear(&mut self) {
        self.buffer = Vec::with_capacity(MIN_CAPACITY);
        self.capacity = MIN_CAPACITY;
        self.generation += 1;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Mutable view over the elements. Reordering in place (e.g. shuffling)
    /// does not change the length and is not tracked as a structural change.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            index: 0,
            last: None,
            expected: self.generation,
        }
    }

    fn check_capacity(&mut self) {
        let len = self.buffer.len() as f64;
        let capacity = self.capacity as f64;

        if len > capacity * GROW_THRESHOLD {
            self.change_capacity(self.capacity * 2);
        } else if len < capacity * SHRINK_THRESHOLD && self.capacity / 2 >= MIN_CAPACITY {
            self.change_capacity(self.capacity / 2);
        }
    }

    fn change_capacity(&mut self, new_capacity: usize) {
        if new_capacity > self.buffer.capacity() {
            self.buffer.reserve_exact(new_capacity - self.buffer.len());
        } else {
            self.buffer.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.buffer.iter().position(|candidate| candidate == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Remove the first element equal to `value`. No-op when absent.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.remove(index).ok()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

/// Fail-fast cursor over a [`DynamicArray`].
///
/// The cursor does not borrow the array between steps, so the array may be
/// mutated while a cursor is alive. Any such mutation is reported as
/// [`CollectionError::ConcurrentModification`] on the next step. Removing
/// through the cursor itself keeps it valid.
#[derive(Debug, Clone)]
pub struct Cursor {
    index: usize,
    last: Option<usize>,
    expected: Generation,
}

impl Cursor {
    pub fn has_next<T>(&self, array: &DynamicArray<T>) -> Result<bool, CollectionError> {
        self.check(array)?;
        Ok(self.index < array.len())
    }

    pub fn next<'a, T>(
        &mut self,
        array: &'a DynamicArray<T>,
    ) -> Result<Option<&'a T>, CollectionError> {
        self.check(array)?;

        let Some(value) = array.buffer.get(self.index) else {
            return Ok(None);
        };
        self.last = Some(self.index);
        self.index += 1;
        Ok(Some(value))
    }

    /// Remove the element most recently returned by [`Cursor::next`].
    pub fn remove<T>(&mut self, array: &mut DynamicArray<T>) -> Result<T, CollectionError> {
        self.check(array)?;

        let index = self.last.take().ok_or(CollectionError::NoCurrentElement)?;
        let removed = array.remove(index)?;
        self.index = index;
        self.expected = array.generation;
        Ok(removed)
    }

    fn check<T>(&self, array: &DynamicArray<T>) -> Result<(), CollectionError> {
        if array.generation != self.expected {
            return Err(CollectionError::ConcurrentModification {
                expected: self.expected,
                found: array.generation,
            });
        }
        Ok(())
    }
}
