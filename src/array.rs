use alloc::boxed::Box;
use core::cmp::{max, Ordering};
use core::fmt;
use core::iter;
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::cursor::{Cursor, CursorMut};
use crate::error::DynArrayError;

const MAX_CAPACITY: usize = isize::MAX as usize / mem::size_of::<i32>(); // isize::MAX bytes in slots

/// A growable contiguous array of `i32` elements
///
/// The array owns a single heap buffer of `capacity()` slots of which the
/// first `len()` hold live elements. Slots past the length keep whatever
/// value they last held; they are never read through the public surface.
///
/// Cloning is a deep copy sized exactly to the source length. Two arrays
/// never share a buffer.
pub struct DynArray {
    storage: Box<[i32]>,
    length: usize,
}

impl DynArray {
    /// Creates an empty array without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            length: 0,
        }
    }

    /// Creates an array of `count` copies of `value`, allocating exactly
    /// `count` slots.
    #[must_use]
    pub fn from_elem(value: i32, count: usize) -> Self {
        Self {
            storage: iter::repeat(value).take(count).collect(),
            length: count,
        }
    }

    /// Creates a zero-filled array where length and capacity both equal
    /// `len`.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::from_elem(0, len)
    }

    /// Creates an array holding a copy of `values`, allocating exactly
    /// `values.len()` slots.
    #[must_use]
    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            storage: values.iter().copied().collect(),
            length: values.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of allocated element slots, always at least `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Read-only view of the live elements.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn as_slice(&self) -> &[i32] {
        self.storage
            .get(..self.length)
            .expect("length never exceeds capacity")
    }

    /// Mutable view of the live elements.
    #[allow(clippy::expect_used)]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        self.storage
            .get_mut(..self.length)
            .expect("length never exceeds capacity")
    }

    /// Element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&i32> {
        self.as_slice().get(index)
    }

    /// Mutable element at `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.as_mut_slice().get_mut(index)
    }

    /// Element at `index` with a reported failure.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&i32, DynArrayError> {
        self.get(index).ok_or(DynArrayError::IndexOutOfBounds {
            index,
            length: self.length,
        })
    }

    /// Last element, or `None` when the array is empty.
    #[must_use]
    pub fn last(&self) -> Option<&i32> {
        self.as_slice().last()
    }

    /// Ensures the backing buffer holds at least `min_capacity` slots.
    ///
    /// Does nothing when the capacity is already sufficient. Otherwise a
    /// fresh buffer of exactly `min_capacity` slots is allocated, the `len()`
    /// live elements are copied over and the old buffer is released. The
    /// length never changes.
    ///
    /// `min_capacity` is the target capacity, not an additional element
    /// count as in `Vec::reserve`.
    ///
    /// # Panics
    ///
    /// Panics if `min_capacity` slots exceed `isize::MAX` bytes.
    #[allow(clippy::expect_used)]
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity() {
            return;
        }
        let mut grown: Box<[i32]> = iter::repeat(0).take(min_capacity).collect();
        grown
            .get_mut(..self.length)
            .expect("grown buffer holds at least length slots")
            .copy_from_slice(self.as_slice());
        self.storage = grown;
    }

    /// Checked variant of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityOverflow` if `min_capacity` slots
    /// exceed `isize::MAX` bytes.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), DynArrayError> {
        if min_capacity > MAX_CAPACITY {
            return Err(DynArrayError::CapacityOverflow {
                requested: min_capacity,
                max: MAX_CAPACITY,
            });
        }
        self.reserve(min_capacity);
        Ok(())
    }

    /// Removes all elements. The allocation is kept and `capacity()` is
    /// unchanged.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Appends `value` at the back, growing the buffer when it is full.
    ///
    /// A full buffer grows to exactly `max(len * 2, 1)` slots, which keeps a
    /// push sequence amortized O(1).
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity would exceed `isize::MAX` bytes.
    #[allow(clippy::expect_used)]
    pub fn push(&mut self, value: i32) {
        if self.length == self.capacity() {
            self.reserve(max(self.length * 2, 1));
        }
        *self
            .storage
            .get_mut(self.length)
            .expect("a slot is free after growth") = value;
        self.length += 1;
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty. The capacity is unchanged.
    pub fn pop(&mut self) -> Option<i32> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;
        self.storage.get(self.length).copied()
    }

    /// Checked variant of [`pop`](Self::pop).
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn try_pop(&mut self) -> Result<i32, DynArrayError> {
        self.pop().ok_or(DynArrayError::EmptyArray)
    }

    /// Exchanges length, capacity and buffer ownership with `other` in
    /// constant time. No elements are copied.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Cursor at the first element; equals `end()` when the array is empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor at the one-past-the-end position.
    ///
    /// `begin()` and `end()` delimit the half-open range of live elements;
    /// `end()` is a valid position holding no element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self.as_slice(), self.length)
    }

    /// Cursor at an arbitrary position in `0..=len()`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor<'_> {
        assert!(
            index <= self.length,
            "cursor index {} out of range for array of length {}",
            index,
            self.length
        );
        Cursor::new(self.as_slice(), index)
    }

    /// Mutable cursor at an arbitrary position in `0..=len()`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor_mut(&mut self, index: usize) -> CursorMut<'_> {
        assert!(
            index <= self.length,
            "cursor index {} out of range for array of length {}",
            index,
            self.length
        );
        CursorMut::new(self.as_mut_slice(), index)
    }

    /// Iterator over the elements, front to back.
    ///
    /// The iterator is a [`Cursor`] positioned at `begin()`.
    #[must_use]
    pub fn iter(&self) -> Cursor<'_> {
        self.begin()
    }

    /// Mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, i32> {
        self.as_mut_slice().iter_mut()
    }
}

impl Default for DynArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynArray {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    #[allow(clippy::expect_used)]
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() >= source.length {
            self.storage
                .get_mut(..source.length)
                .expect("capacity checked above")
                .copy_from_slice(source.as_slice());
            self.length = source.length;
        } else {
            *self = source.clone();
        }
    }
}

impl fmt::Debug for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for DynArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynArray {}

impl PartialOrd for DynArray {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DynArray {
    /// Lexicographic over the common prefix; all-equal prefixes tie-break by
    /// length, shorter first.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.as_slice().iter().zip(other.as_slice()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        self.length.cmp(&other.length)
    }
}

impl Index<usize> for DynArray {
    type Output = i32;

    #[allow(clippy::indexing_slicing)] // Bounds asserted above the access
    fn index(&self, index: usize) -> &i32 {
        assert!(
            index < self.length,
            "index {} out of bounds for array of length {}",
            index,
            self.length
        );
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for DynArray {
    #[allow(clippy::indexing_slicing)] // Bounds asserted above the access
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        assert!(
            index < self.length,
            "index {} out of bounds for array of length {}",
            index,
            self.length
        );
        &mut self.as_mut_slice()[index]
    }
}

impl From<&[i32]> for DynArray {
    fn from(values: &[i32]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[i32; N]> for DynArray {
    fn from(values: [i32; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl FromIterator<i32> for DynArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::new();
        array.reserve(iter.size_hint().0);
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl Extend<i32> for DynArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.length.saturating_add(iter.size_hint().0));
        for value in iter {
            self.push(value);
        }
    }
}
