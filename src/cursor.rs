use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;
use core::slice;

use crate::array::DynArray;

/// Position within a [`DynArray`]
///
/// A cursor pairs a borrow of the array's elements with an index, so the
/// borrow checker guarantees it never outlives the array or survives a
/// reallocation. Positions `0..len()` address an element; the position at
/// `len()` is the one-past-the-end marker returned by [`DynArray::end`].
///
/// Two cursors compare equal only when they point into the same array at
/// the same position. Cursors into different arrays are unordered.
///
/// A cursor created with `Default` addresses no array: it sits at the end
/// of an empty range and yields no elements. It is indistinguishable from
/// a cursor of a zero-capacity array, since neither addresses any storage.
///
/// Because a cursor is also an [`Iterator`], method-call syntax such as
/// `a.partial_cmp(b)` selects the iterator adapter, which compares the
/// remaining element sequences instead of positions. Compare positions
/// through the operators (`<`, `==`) or `PartialOrd::partial_cmp(&a, &b)`.
///
/// This cursor implements `Copy` and `Iterator`.
#[derive(Clone, Copy, Default)]
pub struct Cursor<'a> {
    slice: &'a [i32],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(slice: &'a [i32], index: usize) -> Self {
        Self { slice, index }
    }

    /// Position of the cursor as an index into the array.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` at the one-past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }

    /// Element under the cursor, or `None` at the end position.
    ///
    /// The returned reference borrows the array, not the cursor, so it
    /// stays usable after the cursor moves on.
    #[must_use]
    pub fn get(&self) -> Option<&'a i32> {
        self.slice.get(self.index)
    }

    /// Cursor moved by `delta` positions, or `None` when the move would
    /// leave the `0..=len()` range.
    #[must_use]
    pub fn offset(&self, delta: isize) -> Option<Self> {
        let target = self.index.checked_add_signed(delta)?;
        (target <= self.slice.len()).then_some(Self {
            slice: self.slice,
            index: target,
        })
    }

    fn same_storage(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_storage(other) && self.index == other.index
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    /// Orders by position within one array; `None` across arrays.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_storage(other)
            .then(|| self.index.cmp(&other.index))
    }
}

impl<'a> Add<isize> for Cursor<'a> {
    type Output = Cursor<'a>;

    /// Cursor moved forward by `delta` positions.
    ///
    /// # Panics
    ///
    /// Panics if the move leaves the `0..=len()` range. Use
    /// [`offset`](Cursor::offset) for a non-panicking move.
    fn add(self, delta: isize) -> Cursor<'a> {
        match self.offset(delta) {
            Some(moved) => moved,
            None => panic!(
                "cursor offset {} out of range at position {} in an array of length {}",
                delta,
                self.index,
                self.slice.len()
            ),
        }
    }
}

impl<'a> Sub<isize> for Cursor<'a> {
    type Output = Cursor<'a>;

    /// Cursor moved backward by `delta` positions.
    ///
    /// # Panics
    ///
    /// Panics if the move leaves the `0..=len()` range, or if `delta` is
    /// `isize::MIN`, whose negation overflows.
    #[allow(clippy::expect_used)]
    fn sub(self, delta: isize) -> Cursor<'a> {
        self + delta.checked_neg().expect("cursor offset overflow")
    }
}

impl Sub for Cursor<'_> {
    type Output = isize;

    /// Signed number of positions from `other` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors point into different arrays.
    #[allow(clippy::expect_used)]
    fn sub(self, other: Self) -> isize {
        assert!(
            self.same_storage(&other),
            "cannot take the distance between cursors into different arrays"
        );
        let this = isize::try_from(self.index).expect("slice index fits isize");
        let that = isize::try_from(other.index).expect("slice index fits isize");
        this - that
    }
}

impl AddAssign<isize> for Cursor<'_> {
    fn add_assign(&mut self, delta: isize) {
        *self = *self + delta;
    }
}

impl SubAssign<isize> for Cursor<'_> {
    fn sub_assign(&mut self, delta: isize) {
        *self = *self - delta;
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl<'a> IntoIterator for &'a DynArray {
    type Item = &'a i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a> IntoIterator for &'a mut DynArray {
    type Item = &'a mut i32;
    type IntoIter = slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Mutable position within a [`DynArray`]
///
/// Holds an exclusive borrow of the array's elements, so at most one
/// exists at a time and the element under it can be written through
/// [`get_mut`](CursorMut::get_mut). Moving consumes the cursor because the
/// exclusive borrow moves with it.
pub struct CursorMut<'a> {
    slice: &'a mut [i32],
    index: usize,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn new(slice: &'a mut [i32], index: usize) -> Self {
        Self { slice, index }
    }

    /// Position of the cursor as an index into the array.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` at the one-past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index == self.slice.len()
    }

    /// Element under the cursor, or `None` at the end position.
    #[must_use]
    pub fn get(&self) -> Option<&i32> {
        self.slice.get(self.index)
    }

    /// Mutable element under the cursor, or `None` at the end position.
    pub fn get_mut(&mut self) -> Option<&mut i32> {
        self.slice.get_mut(self.index)
    }

    /// Cursor moved by `delta` positions, or `None` when the move would
    /// leave the `0..=len()` range.
    #[must_use]
    pub fn offset(self, delta: isize) -> Option<Self> {
        let target = self.index.checked_add_signed(delta)?;
        (target <= self.slice.len()).then_some(Self {
            slice: self.slice,
            index: target,
        })
    }

    /// Read-only cursor at the same position, borrowing this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor::new(&*self.slice, self.index)
    }
}

impl fmt::Debug for CursorMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl AddAssign<isize> for CursorMut<'_> {
    /// Moves the cursor forward by `delta` positions.
    ///
    /// # Panics
    ///
    /// Panics if the move leaves the `0..=len()` range.
    fn add_assign(&mut self, delta: isize) {
        match self.index.checked_add_signed(delta) {
            Some(target) if target <= self.slice.len() => self.index = target,
            _ => panic!(
                "cursor offset {} out of range at position {} in an array of length {}",
                delta,
                self.index,
                self.slice.len()
            ),
        }
    }
}

impl SubAssign<isize> for CursorMut<'_> {
    /// Moves the cursor backward by `delta` positions.
    ///
    /// # Panics
    ///
    /// Panics if the move leaves the `0..=len()` range, or if `delta` is
    /// `isize::MIN`, whose negation overflows.
    #[allow(clippy::expect_used)]
    fn sub_assign(&mut self, delta: isize) {
        *self += delta.checked_neg().expect("cursor offset overflow");
    }
}
